//! Cookie-backed key/value persistence for the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token and the stored user profile live in two cookies. Every
//! read and write goes through `CookieStore` so the auth service and the
//! route guards share one codec. In the browser that store is
//! `document.cookie`; during server rendering `BrowserCookies` is inert and
//! the session is read only after hydration.
//!
//! TRADE-OFFS
//! ==========
//! Values are percent-encoded but not encrypted. The stored user profile
//! (including its role list) is readable and editable by the user, so it is
//! only ever used to choose which screens to show.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::{Cookie, SameSite};
use time::Duration;

/// Lifetime applied by `set_default`.
pub const DEFAULT_TTL_DAYS: i64 = 7;

// Browsers cap cookie lifetimes at 400 days.
pub(crate) const MAX_LIFETIME_DAYS: i64 = 400;

/// Read/write access to a cookie jar.
///
/// `get` never fails: a missing cookie reads as the empty string.
pub trait CookieStore {
    /// Decoded value of `name`, or `""` when absent or expired.
    fn get(&self, name: &str) -> String;

    /// Store `value` under `name` for `ttl_days` days. Zero or negative
    /// lifetimes expire the cookie immediately.
    fn set(&self, name: &str, value: &str, ttl_days: i64);

    /// Store `value` with the default seven-day lifetime.
    fn set_default(&self, name: &str, value: &str) {
        self.set(name, value, DEFAULT_TTL_DAYS);
    }

    /// Expire `name` immediately.
    fn delete(&self, name: &str) {
        self.set(name, "", -1);
    }
}

/// Decode a stored cookie value. Malformed escapes yield the raw text.
pub fn decode_value(raw: &str) -> String {
    Cookie::parse_encoded(format!("v={raw}")).map_or_else(|_| raw.to_owned(), |cookie| cookie.value().to_owned())
}

/// Build the `document.cookie` assignment for `name`.
///
/// Cookies are scoped to the whole origin, sent only over TLS and never on
/// cross-site requests.
pub fn format_set_cookie(name: &str, value: &str, ttl_days: i64) -> String {
    let ttl_days = ttl_days.clamp(-MAX_LIFETIME_DAYS, MAX_LIFETIME_DAYS);
    Cookie::build((name, value))
        .path("/")
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::days(ttl_days))
        .build()
        .encoded()
        .to_string()
}

/// Find `name` in a `document.cookie` string (`a=1; b=2`) and decode it.
///
/// When a name appears more than once the last occurrence wins.
pub fn read_cookie(cookie_header: &str, name: &str) -> String {
    Cookie::split_parse(cookie_header)
        .filter_map(Result::ok)
        .filter(|cookie| cookie.name() == name)
        .last()
        .map(|cookie| decode_value(cookie.value()))
        .unwrap_or_default()
}

/// Cookie store bound to `document.cookie`.
///
/// Outside the browser (server rendering, native tests) reads are empty and
/// writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl CookieStore for BrowserCookies {
    fn get(&self, name: &str) -> String {
        #[cfg(feature = "hydrate")]
        {
            html_document()
                .and_then(|doc| doc.cookie().ok())
                .map(|header| read_cookie(&header, name))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            String::new()
        }
    }

    fn set(&self, name: &str, value: &str, ttl_days: i64) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = html_document() else {
                return;
            };
            if doc.set_cookie(&format_set_cookie(name, value, ttl_days)).is_err() {
                log::warn!("failed to write cookie {name}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, value, ttl_days);
        }
    }
}
