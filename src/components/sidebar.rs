//! Role-specific portal navigation.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::state::role::Section;
use crate::util::guard::LOGIN_ROUTE;

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const CUSTOMER_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/customer" },
    NavItem { label: "Open Account", href: "/customer/create-account" },
    NavItem { label: "Transactions", href: "/customer/transactions" },
    NavItem { label: "Apply for Loan", href: "/customer/loan" },
];

const EMPLOYEE_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/employee" },
    NavItem { label: "Loan Requests", href: "/employee/loans" },
    NavItem { label: "View Account", href: "/employee/view-account" },
    NavItem { label: "View Transactions", href: "/employee/view-transactions" },
];

const ADMIN_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/admin" },
    NavItem { label: "Employees", href: "/admin/manage-employees" },
    NavItem { label: "Branches", href: "/admin/manage-branches" },
    NavItem { label: "Customers", href: "/admin/manage-customers" },
];

pub fn nav_items(section: Section) -> &'static [NavItem] {
    match section {
        Section::Customer => CUSTOMER_NAV,
        Section::Employee => EMPLOYEE_NAV,
        Section::Admin => ADMIN_NAV,
    }
}

#[component]
pub fn Sidebar(section: Section) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"BankABC"</div>
            <p class="sidebar__role">{section.role().label()}</p>
            <ul class="sidebar__links">
                {nav_items(section)
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <A href=item.href>{item.label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="sidebar__logout" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
