//! Session state shared across the app.
//!
//! DESIGN
//! ======
//! `AuthState` is the single source of truth for who is signed in. Cookies
//! are read once at startup and written only through the auth service, so
//! components never look at cookies directly.

pub mod auth;
pub mod role;
pub mod session;
