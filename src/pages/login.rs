//! Sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded as a public route: once the login call publishes a session the
//! navigation guard redirects to the signed-in role's portal, so this page
//! never navigates on success itself.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::LoginRequest;
#[cfg(feature = "hydrate")]
use crate::state::auth::use_auth;
use crate::util::guard::SIGNUP_ROUTE;

pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = use_auth();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = auth.login(credentials).await {
                error.set(e.to_string());
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <p class="auth-switch">
                    "New to BankABC? "
                    <A href=SIGNUP_ROUTE>"Create an account"</A>
                </p>
            </form>
        </div>
    }
}
