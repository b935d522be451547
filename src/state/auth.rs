//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is provided once at the application root and is the single
//! read path for "who is signed in". Route guards, the role router and the
//! layouts consult it; nothing else parses the session cookies.
//!
//! LIFECYCLE
//! =========
//! State starts `loading`. `settle` reads the cookies once and leaves
//! `loading` for good; later changes come only from login and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::role::Role;
use super::session::{Session, StoredSession, clear_session, read_session};
use crate::net::auth::{AuthResult, AuthService};
use crate::net::types::{LoginRequest, RegisterRequest, UserRecord};
use crate::util::cookie::CookieStore;

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
    /// The stored session was present but unreadable and has been cleared.
    pub rejected: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true, rejected: false }
    }
}

impl AuthState {
    /// Settled state for whatever the cookie jar holds.
    pub fn restore(cookies: &impl CookieStore) -> Self {
        let mut state = Self::default();
        state.settle(cookies);
        state
    }

    /// Leave `loading` by reading the session cookies. A profile cookie that
    /// does not parse signs the user out. Returns `false` if already settled.
    pub fn settle(&mut self, cookies: &impl CookieStore) -> bool {
        if !self.loading {
            return false;
        }
        match read_session(cookies) {
            StoredSession::Valid(session) => {
                self.session = Some(session);
            }
            StoredSession::Malformed(reason) => {
                log::warn!("discarding unreadable user_data cookie: {reason}");
                clear_session(cookies);
                self.session = None;
                self.rejected = true;
            }
            StoredSession::Absent => {
                self.session = None;
            }
        }
        self.loading = false;
        true
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.loading = false;
        self.rejected = false;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.loading = false;
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Current role, or `None` while the session is still being read.
    pub fn role(&self) -> Option<Role> {
        (!self.loading).then(|| Role::resolve(self.user()))
    }
}

/// Reactive handle to the auth state plus the auth operations that change it.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Read the browser cookies once. Later calls are no-ops.
    pub fn mount(self) {
        let auth = AuthService::browser();
        self.state.update(|state| {
            state.settle(auth.cookies());
        });
    }

    pub fn user(self) -> Option<UserRecord> {
        self.state.with(|state| state.user().cloned())
    }

    pub fn loading(self) -> bool {
        self.state.with(|state| state.loading)
    }

    pub fn is_authenticated(self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn role(self) -> Option<Role> {
        self.state.with(AuthState::role)
    }

    /// Sign in through the backend and publish the new session.
    ///
    /// # Errors
    ///
    /// Returns the `AuthError` from the service; state is left unchanged.
    pub async fn login(self, credentials: LoginRequest) -> AuthResult<Role> {
        let session = AuthService::browser().login(&credentials).await?;
        let role = Role::resolve(Some(&session.user));
        self.state.update(|state| state.sign_in(session));
        Ok(role)
    }

    /// Register a customer. The user still has to sign in afterwards.
    ///
    /// # Errors
    ///
    /// Returns the `AuthError` from the service.
    pub async fn register(self, user_data: RegisterRequest) -> AuthResult<serde_json::Value> {
        AuthService::browser().register(&user_data).await
    }

    pub fn logout(self) {
        AuthService::browser().logout();
        self.state.update(AuthState::sign_out);
    }

    pub fn auth_header(self) -> Option<String> {
        AuthService::browser().auth_header()
    }
}

/// The `AuthContext` provided by `App`.
///
/// # Panics
///
/// Panics when called outside the application tree.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
