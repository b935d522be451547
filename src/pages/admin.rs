//! Admin portal pages: headline stats and management of employees,
//! branches and customers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Management pages fetch the whole collection once and filter it in the
//! browser as the admin types. Deletes remove the row locally after the
//! backend confirms.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use super::forms::{is_email, is_iso_date, parse_id};
use crate::net::types::{BranchDto, CustomerDto, DashboardStats, EmployeeCreateRequest, EmployeeDto};
use crate::state::auth::use_auth;
use crate::util::filter::filter_items;

/// Raw new-employee form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub date_of_birth: String,
    pub branch_id: String,
}

pub(crate) fn validate_employee(form: &EmployeeForm) -> Result<EmployeeCreateRequest, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Enter the employee's name.");
    }
    let email = form.email.trim();
    if !is_email(email) {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    let phone = form.phone.trim();
    if phone.is_empty() {
        return Err("Enter a phone number.");
    }
    let date_of_birth = form.date_of_birth.trim();
    if !is_iso_date(date_of_birth) {
        return Err("Enter the date of birth as YYYY-MM-DD.");
    }
    let branch_id = parse_id(&form.branch_id).map_err(|_| "Choose a branch.")?;
    Ok(EmployeeCreateRequest {
        email: email.to_owned(),
        password: form.password.clone(),
        employee_name: name.to_owned(),
        date_of_birth: date_of_birth.to_owned(),
        phone: phone.to_owned(),
        branch_id,
    })
}

pub(crate) fn validate_branch(name: &str, address: &str) -> Result<BranchDto, &'static str> {
    let (name, address) = (name.trim(), address.trim());
    if name.is_empty() || address.is_empty() {
        return Err("Enter the branch name and address.");
    }
    Ok(BranchDto { branch_id: None, branch_name: name.to_owned(), branch_addr: address.to_owned() })
}

#[component]
fn SearchBox(query: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            class="form-input search-box"
            placeholder=placeholder
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
        />
    }
}

#[component]
fn PageMessage(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="page__info">{move || message.get()}</p>
        </Show>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let auth = use_auth();
    let stats = RwSignal::new(DashboardStats::default());
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let header = auth.auth_header();
        leptos::task::spawn_local(async move {
            match crate::net::bank::PortalApi::browser(header).stats().await {
                Ok(loaded) => stats.set(loaded),
                Err(e) => error.set(e.to_string()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;

    let card = move |label: &'static str, value: fn(DashboardStats) -> u64| {
        view! {
            <div class="stat-card">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">{move || value(stats.get())}</span>
            </div>
        }
    };

    view! {
        <div class="page admin-dashboard">
            <h2>"Admin dashboard"</h2>
            <PageMessage message=error />
            <div class="stat-grid">
                {card("Customers", |s| s.total_customers)}
                {card("Active customers", |s| s.active_customers)}
                {card("Branches", |s| s.total_branches)}
                {card("Employees", |s| s.total_employees)}
            </div>
        </div>
    }
}

#[component]
pub fn ManageEmployeesPage() -> impl IntoView {
    let auth = use_auth();
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
    let employees = RwSignal::new(Vec::<EmployeeDto>::new());
    let branches = RwSignal::new(Vec::<BranchDto>::new());
    let query = RwSignal::new(String::new());
    let form = RwSignal::new(EmployeeForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                let api = crate::net::bank::PortalApi::browser(header);
                match api.employees().await {
                    Ok(list) => employees.set(list),
                    Err(e) => info.set(e.to_string()),
                }
                match api.branches().await {
                    Ok(list) => branches.set(list),
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
    };
    reload();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(validate_employee) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).create_employee(&request).await {
                    Ok(_) => {
                        info.set(format!("{} added.", request.employee_name));
                        form.set(EmployeeForm::default());
                        reload();
                    }
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_delete = move |employee_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).delete_employee(employee_id).await {
                    Ok(_) => employees.update(|list| list.retain(|e| e.emp_id != employee_id)),
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = employee_id;
    };

    let branch_name = move |branch_id: Option<i64>| {
        branches.with(|list| {
            list.iter()
                .find(|b| b.branch_id.is_some() && b.branch_id == branch_id)
                .map(|b| b.branch_name.clone())
                .unwrap_or_default()
        })
    };

    let field = move |placeholder: &'static str, kind: &'static str, get: fn(&EmployeeForm) -> String, set: fn(&mut EmployeeForm, String)| {
        view! {
            <input
                class="form-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    let visible = move || employees.with(|list| filter_items(list, &query.get()));

    view! {
        <div class="page">
            <h2>"Employees"</h2>
            <form class="card" on:submit=on_create>
                <h3>"Add employee"</h3>
                {field("Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {field("Temporary password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                {field("Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                {field("Date of birth", "date", |f| f.date_of_birth.clone(), |f, v| f.date_of_birth = v)}
                <select
                    class="form-select"
                    prop:value=move || form.with(|f| f.branch_id.clone())
                    on:change=move |ev| form.update(|f| f.branch_id = event_target_value(&ev))
                >
                    <option value="">"Choose a branch"</option>
                    <For
                        each=move || branches.get()
                        key=|branch| branch.branch_id
                        children=|branch| {
                            view! {
                                <option value=branch.branch_id.map(|id| id.to_string()).unwrap_or_default()>
                                    {branch.branch_name}
                                </option>
                            }
                        }
                    />
                </select>
                <button class="btn" type="submit" disabled=move || busy.get()>"Add"</button>
            </form>
            <PageMessage message=info />
            <SearchBox query=query placeholder="Search employees" />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Branch"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|employee| employee.emp_id
                        children=move |employee| {
                            let employee_id = employee.emp_id;
                            view! {
                                <tr>
                                    <td>{employee.emp_id}</td>
                                    <td>{employee.emp_name}</td>
                                    <td>{employee.email}</td>
                                    <td>{employee.phone}</td>
                                    <td>{move || branch_name(employee.branch_id)}</td>
                                    <td>
                                        <button class="btn btn--danger" on:click=move |_| on_delete(employee_id)>
                                            "Remove"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn ManageBranchesPage() -> impl IntoView {
    let auth = use_auth();
    let branches = RwSignal::new(Vec::<BranchDto>::new());
    let query = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let header = auth.auth_header();
        leptos::task::spawn_local(async move {
            match crate::net::bank::PortalApi::browser(header).branches().await {
                Ok(list) => branches.set(list),
                Err(e) => info.set(e.to_string()),
            }
        });
    }

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let branch = match validate_branch(&name.get(), &address.get()) {
            Ok(branch) => branch,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).create_branch(&branch).await {
                    Ok(created) => {
                        info.set(format!("{} created.", created.branch_name));
                        branches.update(|list| list.push(created));
                        name.set(String::new());
                        address.set(String::new());
                    }
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (branch, auth);
    };

    let on_delete = move |branch_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).delete_branch(branch_id).await {
                    Ok(_) => branches.update(|list| list.retain(|b| b.branch_id != Some(branch_id))),
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = branch_id;
    };

    let visible = move || branches.with(|list| filter_items(list, &query.get()));

    view! {
        <div class="page">
            <h2>"Branches"</h2>
            <form class="card" on:submit=on_create>
                <h3>"Add branch"</h3>
                <input
                    class="form-input"
                    placeholder="Branch name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    placeholder="Address"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Add"</button>
            </form>
            <PageMessage message=info />
            <SearchBox query=query placeholder="Search branches" />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Name"</th>
                        <th>"Address"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|branch| (branch.branch_id, branch.branch_name.clone())
                        children=move |branch| {
                            let branch_id = branch.branch_id;
                            view! {
                                <tr>
                                    <td>{branch.branch_id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                    <td>{branch.branch_name}</td>
                                    <td>{branch.branch_addr}</td>
                                    <td>
                                        <button
                                            class="btn btn--danger"
                                            disabled=branch_id.is_none()
                                            on:click=move |_| {
                                                if let Some(id) = branch_id {
                                                    on_delete(id);
                                                }
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn ManageCustomersPage() -> impl IntoView {
    let auth = use_auth();
    let customers = RwSignal::new(Vec::<CustomerDto>::new());
    let query = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let header = auth.auth_header();
        leptos::task::spawn_local(async move {
            match crate::net::bank::PortalApi::browser(header).customers().await {
                Ok(list) => customers.set(list),
                Err(e) => info.set(e.to_string()),
            }
        });
    }

    let on_delete = move |customer_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).delete_customer(customer_id).await {
                    Ok(_) => customers.update(|list| list.retain(|c| c.cust_id != customer_id)),
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (customer_id, auth);
    };

    let visible = move || customers.with(|list| filter_items(list, &query.get()));

    view! {
        <div class="page">
            <h2>"Customers"</h2>
            <PageMessage message=info />
            <SearchBox query=query placeholder="Search customers" />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Date of birth"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|customer| customer.cust_id
                        children=move |customer| {
                            let customer_id = customer.cust_id;
                            view! {
                                <tr>
                                    <td>{customer.cust_id}</td>
                                    <td>{customer.cust_name}</td>
                                    <td>{customer.email}</td>
                                    <td>{customer.phone}</td>
                                    <td>{customer.dob.unwrap_or_default()}</td>
                                    <td>
                                        <button class="btn btn--danger" on:click=move |_| on_delete(customer_id)>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
