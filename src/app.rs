//! Root application component with routing and the auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `NavigationGuard` wraps the route table, so every navigation is
//! checked by `resolve_navigation` before a page mounts: portal subtrees
//! admit only the matching role and the sign-in routes send signed-in users
//! to their portal. Route segments come from the same constants the guard
//! matches on.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guard::NavigationGuard;
use crate::components::layout::{AdminPortal, CustomerPortal, EmployeePortal};
use crate::pages::admin::{AdminDashboard, ManageBranchesPage, ManageCustomersPage, ManageEmployeesPage};
use crate::pages::customer::{CreateAccountPage, CustomerDashboard, CustomerTransactionsPage, LoanPage};
use crate::pages::employee::{EmployeeDashboard, EmployeeLoansPage, ViewAccountPage, ViewTransactionsPage};
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::signup::SignupPage;
use crate::state::auth::AuthContext;
use crate::state::role::Section;
use crate::util::guard::{LOGIN_ROUTE, SIGNUP_ROUTE, segment};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the `AuthContext`, reads the session cookies once after
/// hydration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new();
    provide_context(auth);

    // Effects only run in the browser, so the server renders the
    // loading placeholder and hydration sees the same markup.
    Effect::new(move || auth.mount());

    view! {
        <Stylesheet id="leptos" href="/pkg/bankabc.css"/>
        <Title text="BankABC"/>

        <Router>
            <NavigationGuard>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment(segment(LOGIN_ROUTE)) view=LoginPage/>
                    <Route path=StaticSegment(segment(SIGNUP_ROUTE)) view=SignupPage/>
                    <ParentRoute path=StaticSegment(segment(Section::Customer.root())) view=CustomerPortal>
                        <Route path=StaticSegment("") view=CustomerDashboard/>
                        <Route path=StaticSegment("create-account") view=CreateAccountPage/>
                        <Route path=StaticSegment("transactions") view=CustomerTransactionsPage/>
                        <Route path=StaticSegment("loan") view=LoanPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment(segment(Section::Employee.root())) view=EmployeePortal>
                        <Route path=StaticSegment("") view=EmployeeDashboard/>
                        <Route path=StaticSegment("loans") view=EmployeeLoansPage/>
                        <Route path=StaticSegment("view-account") view=ViewAccountPage/>
                        <Route path=StaticSegment("view-transactions") view=ViewTransactionsPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment(segment(Section::Admin.root())) view=AdminPortal>
                        <Route path=StaticSegment("") view=AdminDashboard/>
                        <Route path=StaticSegment("manage-employees") view=ManageEmployeesPage/>
                        <Route path=StaticSegment("manage-branches") view=ManageBranchesPage/>
                        <Route path=StaticSegment("manage-customers") view=ManageCustomersPage/>
                    </ParentRoute>
                </Routes>
            </NavigationGuard>
        </Router>
    }
}
