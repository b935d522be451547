//! Employee portal pages: loan review and account servicing.

#[cfg(test)]
#[path = "employee_test.rs"]
mod employee_test;

use leptos::prelude::*;

use super::customer::{ACCOUNT_TYPES, TransactionTable};
use super::forms::{format_money, parse_id};
use crate::net::types::{AccountDto, AccountUpdateRequest, LoanDto, TransactionDto};
use crate::state::auth::{AuthContext, use_auth};
use crate::util::filter::filter_items;

pub(crate) const LOAN_PENDING: &str = "PENDING";
pub(crate) const LOAN_APPROVED: &str = "APPROVED";
pub(crate) const LOAN_REJECTED: &str = "REJECTED";
pub(crate) const ACCOUNT_STATUSES: [&str; 3] = ["ACTIVE", "FROZEN", "CLOSED"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LoanCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub(crate) fn loan_counts(loans: &[LoanDto]) -> LoanCounts {
    loans.iter().fold(LoanCounts::default(), |mut counts, loan| {
        match loan.loan_status.to_ascii_uppercase().as_str() {
            LOAN_PENDING => counts.pending += 1,
            LOAN_APPROVED => counts.approved += 1,
            LOAN_REJECTED => counts.rejected += 1,
            _ => {}
        }
        counts
    })
}

pub(crate) fn is_pending(loan: &LoanDto) -> bool {
    loan.loan_status.eq_ignore_ascii_case(LOAN_PENDING)
}

/// Update body carrying only the fields the employee changed.
pub(crate) fn account_update(current: &AccountDto, name: &str, kind: &str) -> Option<AccountUpdateRequest> {
    let name = name.trim();
    let update = AccountUpdateRequest {
        acc_name: (!name.is_empty() && name != current.acc_name).then(|| name.to_owned()),
        acc_type: (ACCOUNT_TYPES.contains(&kind) && kind != current.acc_type).then(|| kind.to_owned()),
        ..AccountUpdateRequest::default()
    };
    (update != AccountUpdateRequest::default()).then_some(update)
}

fn load_loans(auth: AuthContext, loans: RwSignal<Vec<LoanDto>>, error: RwSignal<String>) {
    #[cfg(feature = "hydrate")]
    {
        let header = auth.auth_header();
        leptos::task::spawn_local(async move {
            match crate::net::bank::PortalApi::browser(header).loans().await {
                Ok(list) => loans.set(list),
                Err(e) => error.set(e.to_string()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, loans, error);
}

#[component]
pub fn EmployeeDashboard() -> impl IntoView {
    let auth = use_auth();
    let loans = RwSignal::new(Vec::<LoanDto>::new());
    let error = RwSignal::new(String::new());
    load_loans(auth, loans, error);

    let counts = Memo::new(move |_| loans.with(|list| loan_counts(list)));

    view! {
        <div class="page employee-dashboard">
            <h2>"Employee dashboard"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__label">"Pending loans"</span>
                    <span class="stat-card__value">{move || counts.get().pending}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Approved"</span>
                    <span class="stat-card__value">{move || counts.get().approved}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Rejected"</span>
                    <span class="stat-card__value">{move || counts.get().rejected}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EmployeeLoansPage() -> impl IntoView {
    let auth = use_auth();
    let loans = RwSignal::new(Vec::<LoanDto>::new());
    let error = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());
    load_loans(auth, loans, error);

    let decide = move |loan_id: i64, status: &'static str| {
        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).set_loan_status(loan_id, status).await {
                    Ok(updated) => loans.update(|list| {
                        if let Some(loan) = list.iter_mut().find(|l| l.loan_id == updated.loan_id) {
                            loan.loan_status = updated.loan_status;
                        }
                    }),
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (loan_id, status);
    };

    let visible = move || loans.with(|list| filter_items(list, &query.get()));

    view! {
        <div class="page">
            <h2>"Loan requests"</h2>
            <input
                class="form-input"
                placeholder="Search loans"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Loan"</th>
                        <th>"Account"</th>
                        <th>"Type"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|loan| (loan.loan_id, loan.loan_status.clone())
                        children=move |loan| {
                            let pending = is_pending(&loan);
                            let loan_id = loan.loan_id;
                            view! {
                                <tr>
                                    <td>{loan.loan_id}</td>
                                    <td>{loan.account_id}</td>
                                    <td>{loan.loan_type}</td>
                                    <td>{format_money(loan.loan_amount)}</td>
                                    <td>{loan.loan_status}</td>
                                    <td>
                                        <Show when=move || pending>
                                            <button class="btn" on:click=move |_| decide(loan_id, LOAN_APPROVED)>
                                                "Approve"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| decide(loan_id, LOAN_REJECTED)
                                            >
                                                "Reject"
                                            </button>
                                        </Show>
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
pub fn ViewAccountPage() -> impl IntoView {
    let auth = use_auth();
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
    let lookup = RwSignal::new(String::new());
    let account = RwSignal::new(None::<AccountDto>);
    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let show = move |found: AccountDto| {
        name.set(found.acc_name.clone());
        kind.set(found.acc_type.clone());
        status.set(found.status.clone());
        account.set(Some(found));
    };

    let on_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let account_id = match parse_id(&lookup.get()) {
            Ok(id) => id,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        account.set(None);

        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).account(account_id).await {
                    Ok(found) => show(found),
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (account_id, show);
    };

    let on_save = move |_| {
        let Some(current) = account.get() else {
            return;
        };
        let Some(update) = account_update(&current, &name.get(), &kind.get()) else {
            info.set("Nothing to save.".to_owned());
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).update_account(current.acc_id, &update).await {
                    Ok(saved) => {
                        info.set("Account updated.".to_owned());
                        show(saved);
                    }
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = update;
    };

    let on_status = move |_| {
        let Some(current) = account.get() else {
            return;
        };
        let next = status.get();
        if next == current.status {
            info.set("Status unchanged.".to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).set_account_status(current.acc_id, &next).await {
                    Ok(saved) => {
                        info.set(format!("Account is now {}.", saved.status));
                        show(saved);
                    }
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
    };

    view! {
        <div class="page">
            <h2>"View account"</h2>
            <form class="card" on:submit=on_lookup>
                <input
                    class="form-input"
                    placeholder="Account id"
                    prop:value=move || lookup.get()
                    on:input=move |ev| lookup.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Look up"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="page__info">{move || info.get()}</p>
            </Show>
            <Show when=move || account.with(Option::is_some)>
                <div class="card">
                    <p>
                        "Holder: "
                        {move || account.with(|a| a.as_ref().and_then(|a| a.account_holder_name.clone()).unwrap_or_default())}
                    </p>
                    <p>
                        "Balance: "
                        {move || account.with(|a| a.as_ref().map(|a| format_money(a.balance)).unwrap_or_default())}
                    </p>
                    <input
                        class="form-input"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <select
                        class="form-select"
                        prop:value=move || kind.get()
                        on:change=move |ev| kind.set(event_target_value(&ev))
                    >
                        {ACCOUNT_TYPES.into_iter().map(|k| view! { <option value=k>{k}</option> }).collect_view()}
                    </select>
                    <button class="btn" on:click=on_save>"Save details"</button>
                    <select
                        class="form-select"
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        {ACCOUNT_STATUSES.into_iter().map(|s| view! { <option value=s>{s}</option> }).collect_view()}
                    </select>
                    <button class="btn btn--secondary" on:click=on_status>"Set status"</button>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ViewTransactionsPage() -> impl IntoView {
    let auth = use_auth();
    let lookup = RwSignal::new(String::new());
    let transactions = RwSignal::new(Vec::<TransactionDto>::new());
    let query = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let account_id = match parse_id(&lookup.get()) {
            Ok(id) => id,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).account_transactions(account_id).await {
                    Ok(list) => transactions.set(list),
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (account_id, auth);
    };

    let visible = move || transactions.with(|list| filter_items(list, &query.get()));

    view! {
        <div class="page">
            <h2>"Account transactions"</h2>
            <form class="card" on:submit=on_lookup>
                <input
                    class="form-input"
                    placeholder="Account id"
                    prop:value=move || lookup.get()
                    on:input=move |ev| lookup.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Load"</button>
            </form>
            <input
                class="form-input"
                placeholder="Search transactions"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <TransactionTable rows=Signal::derive(visible) />
        </div>
    }
}
