//! Login, registration and logout against `/api/auth/*`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthService` is the only writer of the session cookies. The auth context
//! (`state::auth`) calls it and mirrors the outcome into reactive state; pages
//! call `auth_header` to sign their own backend requests.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (network, backend rejection, unexpected body) comes back as
//! an `AuthError` whose `Display` text is fit for a form message. Each call
//! is a single attempt, and a failed call leaves the cookies untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize as _;

use super::transport::{ApiRequest, BrowserTransport, HttpTransport, TransportError};
use super::types::{LoginRequest, RegisterRequest, UserRecord};
use crate::config::ApiConfig;
use crate::state::session::{Session, TOKEN_COOKIE, clear_session, write_session};
use crate::util::cookie::{BrowserCookies, CookieStore};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected response from server: {0}")]
    Decode(String),
    #[error("login response did not include a token")]
    MissingToken,
}

/// Bearer header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Auth calls bound to a transport and a cookie jar.
#[derive(Clone, Debug)]
pub struct AuthService<T, C> {
    transport: T,
    cookies: C,
}

impl AuthService<BrowserTransport, BrowserCookies> {
    /// Service wired to `fetch` and `document.cookie`.
    pub fn browser() -> Self {
        Self::new(BrowserTransport::new(ApiConfig::from_env()), BrowserCookies)
    }
}

impl<T: HttpTransport, C: CookieStore> AuthService<T, C> {
    pub fn new(transport: T, cookies: C) -> Self {
        Self { transport, cookies }
    }

    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sign in and persist the session.
    ///
    /// The whole response body is stored as `user_data`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the call fails, the backend rejects the
    /// credentials, or the response lacks a token or a readable profile.
    pub async fn login(&self, credentials: &LoginRequest) -> AuthResult<Session> {
        let request = ApiRequest::post(LOGIN_ENDPOINT)
            .json(credentials)
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        let resp = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("login request failed: {e}");
        })?;
        if !resp.is_success() {
            log::warn!("login rejected with status {}", resp.status);
            return Err(AuthError::Rejected { status: resp.status, message: resp.error_message() });
        }

        let body: serde_json::Value = resp.json().map_err(|e| AuthError::Decode(e.to_string()))?;
        let token = body
            .get("token")
            .and_then(serde_json::Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?
            .to_owned();
        let user = UserRecord::deserialize(&body).map_err(|e| AuthError::Decode(e.to_string()))?;

        write_session(&self.cookies, &token, &body.to_string());
        log::info!("signed in as {}", user.display_name());
        Ok(Session { token, user })
    }

    /// Create a customer account. Does not sign in.
    ///
    /// Returns the backend's reply: JSON when it sent JSON, otherwise the
    /// body text as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` with the backend's `message` when it rejects the
    /// registration, or the transport error when the call fails.
    pub async fn register(&self, user_data: &RegisterRequest) -> AuthResult<serde_json::Value> {
        let request = ApiRequest::post(REGISTER_ENDPOINT)
            .json(user_data)
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        let resp = self.transport.send(request).await.inspect_err(|e| {
            log::warn!("registration request failed: {e}");
        })?;
        if !resp.is_success() {
            return Err(AuthError::Rejected { status: resp.status, message: resp.error_message() });
        }
        Ok(resp
            .json::<serde_json::Value>()
            .unwrap_or_else(|_| serde_json::Value::String(resp.body.clone())))
    }

    /// Forget the session locally. The backend keeps no session to end.
    pub fn logout(&self) {
        clear_session(&self.cookies);
        log::info!("signed out");
    }

    /// `Authorization` header value for the stored token, if any.
    pub fn auth_header(&self) -> Option<String> {
        let token = self.cookies.get(TOKEN_COOKIE);
        (!token.is_empty()).then(|| bearer(&token))
    }
}
