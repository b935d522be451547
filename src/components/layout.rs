//! Portal layout shells.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each role subtree renders inside one shell: the sidebar, a header with
//! breadcrumbs and the signed-in name, and an `Outlet` for the nested page.
//! Access is checked before the shell mounts, by `NavigationGuard`.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::sidebar::Sidebar;
use crate::state::auth::use_auth;
use crate::state::role::Section;
use crate::util::breadcrumbs::breadcrumbs;

#[component]
pub fn PortalLayout(section: Section) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let greeting = move || {
        auth.user()
            .map(|user| user.display_name().to_owned())
            .unwrap_or_default()
    };

    view! {
        <div class="portal">
            <Sidebar section=section />
            <main class="portal__main">
                <header class="portal__header">
                    <ol class="breadcrumbs">
                        <li>{section.role().label()}</li>
                        {move || {
                            breadcrumbs(&pathname.get())
                                .into_iter()
                                .map(|crumb| view! { <li>{crumb}</li> })
                                .collect_view()
                        }}
                    </ol>
                    <span class="portal__user">{greeting}</span>
                </header>
                <section class="portal__content">
                    <Outlet />
                </section>
            </main>
        </div>
    }
}

#[component]
pub fn CustomerPortal() -> impl IntoView {
    view! { <PortalLayout section=Section::Customer /> }
}

#[component]
pub fn EmployeePortal() -> impl IntoView {
    view! { <PortalLayout section=Section::Employee /> }
}

#[component]
pub fn AdminPortal() -> impl IntoView {
    view! { <PortalLayout section=Section::Admin /> }
}
