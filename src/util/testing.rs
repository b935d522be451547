//! In-memory cookie jar for session and guard tests.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use cookie::Cookie;
use time::{Duration, OffsetDateTime};

use super::cookie::{CookieStore, DEFAULT_TTL_DAYS, MAX_LIFETIME_DAYS, format_set_cookie, read_cookie};

#[derive(Debug)]
struct Entry {
    value: String,
    expires_at: OffsetDateTime,
}

#[derive(Debug, Default)]
struct Jar {
    entries: BTreeMap<String, Entry>,
    skew: Duration,
}

impl Jar {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc() + self.skew
    }
}

/// Cookie jar with browser-like expiry.
///
/// Writes go through `format_set_cookie` and reads through `read_cookie`, so
/// this jar exercises the same codec as `BrowserCookies`. Clones share the
/// same underlying jar.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    jar: Arc<Mutex<Jar>>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a `document.cookie` style assignment such as
    /// `auth_token=abc; Max-Age=604800; Path=/`. `Max-Age` wins over
    /// `Expires`; with neither the cookie lives for the default lifetime.
    /// Unparseable assignments are ignored.
    pub fn apply(&self, assignment: &str) {
        let Ok(cookie) = Cookie::parse_encoded(assignment) else {
            return;
        };
        let mut jar = self.jar.lock().unwrap_or_else(PoisonError::into_inner);
        let now = jar.now();
        let cap = now + Duration::days(MAX_LIFETIME_DAYS);
        let expires_at = match (cookie.max_age(), cookie.expires_datetime()) {
            (Some(max_age), _) => now + max_age,
            (None, Some(at)) => at,
            (None, None) => now + Duration::days(DEFAULT_TTL_DAYS),
        }
        .min(cap);

        if expires_at <= now {
            jar.entries.remove(cookie.name());
        } else {
            let entry = Entry { value: cookie.value().to_owned(), expires_at };
            jar.entries.insert(cookie.name().to_owned(), entry);
        }
    }

    /// The jar rendered the way `document.cookie` reads: live cookies only,
    /// values encoded.
    pub fn document_cookie(&self) -> String {
        let jar = self.jar.lock().unwrap_or_else(PoisonError::into_inner);
        let now = jar.now();
        jar.entries
            .iter()
            .filter(|(_, entry)| entry.expires_at > now)
            .map(|(name, entry)| Cookie::new(name.as_str(), entry.value.as_str()).encoded().to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Move the jar's clock forward, expiring cookies whose lifetime ends.
    pub fn advance(&self, by: Duration) {
        let mut jar = self.jar.lock().unwrap_or_else(PoisonError::into_inner);
        jar.skew += by;
    }
}

impl CookieStore for MemoryCookies {
    fn get(&self, name: &str) -> String {
        read_cookie(&self.document_cookie(), name)
    }

    fn set(&self, name: &str, value: &str, ttl_days: i64) {
        self.apply(&format_set_cookie(name, value, ttl_days));
    }
}
