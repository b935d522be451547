//! The persisted sign-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session is two cookies written together on login and cleared together on
//! logout. Nothing makes the pair atomic, so readers must cope with one half
//! being missing and with a profile cookie that no longer parses.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserRecord;
use crate::util::cookie::CookieStore;

/// Opaque bearer token cookie.
pub const TOKEN_COOKIE: &str = "auth_token";
/// JSON login response cookie.
pub const USER_COOKIE: &str = "user_data";

/// A signed-in identity and the bearer token that proves it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}

/// What the cookie jar currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSession {
    /// Neither cookie, or only one of the pair.
    Absent,
    /// Both cookies present and the profile parsed.
    Valid(Session),
    /// Both cookies present but the profile is not a valid user record.
    Malformed(String),
}

/// Read the session cookies. This is the only place `user_data` is parsed.
pub fn read_session(cookies: &impl CookieStore) -> StoredSession {
    let token = cookies.get(TOKEN_COOKIE);
    let raw_user = cookies.get(USER_COOKIE);
    if token.is_empty() || raw_user.is_empty() {
        return StoredSession::Absent;
    }
    match serde_json::from_str::<UserRecord>(&raw_user) {
        Ok(user) => StoredSession::Valid(Session { token, user }),
        Err(e) => StoredSession::Malformed(e.to_string()),
    }
}

/// Persist a fresh login. `user_json` is stored verbatim.
pub fn write_session(cookies: &impl CookieStore, token: &str, user_json: &str) {
    cookies.set_default(TOKEN_COOKIE, token);
    cookies.set_default(USER_COOKIE, user_json);
}

/// Remove both session cookies.
pub fn clear_session(cookies: &impl CookieStore) {
    cookies.delete(TOKEN_COOKIE);
    cookies.delete(USER_COOKIE);
}
