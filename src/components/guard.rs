//! Router-level navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NavigationGuard` wraps the route table. On every navigation it resolves
//! the current path against `AuthState` through `util::guard`, follows
//! redirects with a history replace, and renders the routes only on
//! `Gate::Render`. While the session is still being read a placeholder is
//! shown; while a redirect is pending nothing is.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::use_auth;
use crate::util::guard::{Gate, resolve_navigation};

/// Applies the access policy for the current location to `children`.
/// Must sit inside the `Router`.
#[component]
pub fn NavigationGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let gate = Memo::new(move |_| {
        let path = pathname.get();
        auth.state.with(|state| resolve_navigation(&path, state))
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if let Gate::Redirect(to) = gate.get() {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || gate.get() == Gate::Render
            fallback=move || {
                (gate.get() == Gate::Pending)
                    .then(|| view! { <div class="guard-pending">"Loading..."</div> })
            }
        >
            {children()}
        </Show>
    }
}
