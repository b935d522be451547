//! Route access decisions applied by the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards are pure functions of `AuthState` so every route applies the same
//! redirect policy and the policy can be tested without a browser:
//!
//! - while the session is being read, show a placeholder;
//! - portal routes need a signed-in user whose role owns the section;
//!   anonymous visitors go to `/login`, other roles go to `/`;
//! - public routes (`/login`, `/signup`) send signed-in users to their
//!   portal, and send visitors whose stored session was unreadable to
//!   `/login`.
//!
//! These redirects are a convenience, not a security boundary; the backend
//! checks the bearer token on every call.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;
use crate::state::role::{Role, Section};

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const LANDING_ROUTE: &str = "/";

/// Outcome of a guard for the current navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Session not read yet; render a placeholder.
    Pending,
    /// Render the guarded content.
    Render,
    /// Replace the current history entry with this route.
    Redirect(&'static str),
}

/// Signed-in users only.
pub fn authenticated_gate(state: &AuthState) -> Gate {
    if state.loading {
        Gate::Pending
    } else if state.is_authenticated() {
        Gate::Render
    } else {
        Gate::Redirect(LOGIN_ROUTE)
    }
}

/// Signed-in users whose role owns `section`.
pub fn section_gate(state: &AuthState, section: Section) -> Gate {
    match authenticated_gate(state) {
        Gate::Render if state.role() != Some(section.role()) => Gate::Redirect(LANDING_ROUTE),
        gate => gate,
    }
}

/// Visitors without a session only. `path` is the public route being shown.
pub fn public_gate(state: &AuthState, path: &str) -> Gate {
    if state.loading {
        return Gate::Pending;
    }
    if state.is_authenticated() {
        return Gate::Redirect(Role::resolve(state.user()).home());
    }
    if state.rejected && path != LOGIN_ROUTE {
        return Gate::Redirect(LOGIN_ROUTE);
    }
    Gate::Render
}

/// Router segment for a top-level route constant (`/login` -> `login`).
pub fn segment(route: &'static str) -> &'static str {
    route.trim_start_matches('/')
}

/// Whether `path` is a public-only route.
pub fn is_public_route(path: &str) -> bool {
    matches!(path, LOGIN_ROUTE | SIGNUP_ROUTE)
}

/// Decision for navigating to `path`. `NavigationGuard` applies this on
/// every location change.
pub fn resolve_navigation(path: &str, state: &AuthState) -> Gate {
    let path = normalize_path(path);
    if let Some(section) = Section::for_path(path) {
        section_gate(state, section)
    } else if is_public_route(path) {
        public_gate(state, path)
    } else {
        Gate::Render
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => LANDING_ROUTE,
        trimmed => trimmed,
    }
}
