//! Customer self-registration page.
//!
//! Field rules mirror the backend's registration validation so most
//! mistakes are reported before a request is sent. Backend rejections are
//! still shown verbatim.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use super::forms::{is_email, is_iso_date};
use crate::net::types::RegisterRequest;
#[cfg(feature = "hydrate")]
use crate::state::auth::use_auth;
use crate::util::guard::LOGIN_ROUTE;

pub(crate) const PASSWORD_MIN_CHARS: usize = 8;
pub(crate) const PASSWORD_MAX_CHARS: usize = 40;

/// Raw signup form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub phone: String,
    pub date_of_birth: String,
}

pub(crate) fn validate_signup(form: &SignupForm) -> Result<RegisterRequest, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    let date_of_birth = form.date_of_birth.trim();

    if name.is_empty() {
        return Err("Enter your full name.");
    }
    if !is_email(email) {
        return Err("Enter a valid email address.");
    }
    let password_len = form.password.chars().count();
    if !(PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&password_len) {
        return Err("Password must be 8 to 40 characters.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    if phone.is_empty() {
        return Err("Enter your phone number.");
    }
    if !is_iso_date(date_of_birth) {
        return Err("Enter your date of birth as YYYY-MM-DD.");
    }
    Ok(RegisterRequest {
        customer_name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        phone: phone.to_owned(),
        date_of_birth: date_of_birth.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = use_auth();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(validate_signup) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.register(request).await {
                    Ok(_) => navigate(LOGIN_ROUTE, NavigateOptions::default()),
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&SignupForm) -> String, set: fn(&mut SignupForm, String)| {
        view! {
            <label class="auth-label">
                {label}
                <input
                    class="auth-input"
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Open an account"</h1>
                {field("Full name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                {field("Confirm password", "password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
                {field("Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                {field("Date of birth", "date", |f| f.date_of_birth.clone(), |f, v| f.date_of_birth = v)}
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create account" }}
                </button>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-error">{move || error.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already a customer? "
                    <A href=LOGIN_ROUTE>"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
