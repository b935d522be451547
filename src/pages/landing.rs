//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;
use crate::state::role::Role;
use crate::util::guard::{LOGIN_ROUTE, SIGNUP_ROUTE};

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();
    let portal = move || {
        auth.role()
            .and_then(Role::section)
            .map(|section| section.root())
    };

    view! {
        <div class="landing">
            <header class="landing__hero">
                <h1>"BankABC"</h1>
                <p>"Accounts, transfers and loans in one place."</p>
            </header>
            <div class="landing__actions">
                {move || match portal() {
                    Some(href) => view! { <A href=href>"Go to your portal"</A> }.into_any(),
                    None => {
                        view! {
                            <A href=LOGIN_ROUTE>"Sign in"</A>
                            <A href=SIGNUP_ROUTE>"Open an account"</A>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
