//! Customer portal pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered under `/customer` behind the customer section guard. Every page
//! reads the customer's own accounts first and lets the user pick one by id;
//! the backend scopes `/api/user/*` to the bearer token's owner.

#[cfg(test)]
#[path = "customer_test.rs"]
mod customer_test;

use leptos::prelude::*;

use super::forms::{format_money, parse_amount, parse_id};
use crate::net::types::{AccountCreateRequest, AccountDto, LoanApplication, TransactionDto, TransactionRequest};
use crate::state::auth::{AuthContext, use_auth};
use crate::util::filter::filter_items;

pub(crate) const ACCOUNT_TYPES: [&str; 2] = ["SAVINGS", "CHECKING"];
pub(crate) const LOAN_TYPES: [&str; 4] = ["PERSONAL", "HOME", "AUTO", "EDUCATION"];
pub(crate) const DEPOSIT: &str = "DEPOSIT";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Movement {
    Deposit,
    Withdraw,
}

pub(crate) fn transaction_request(
    account_id: &str,
    amount: &str,
    movement: Movement,
) -> Result<TransactionRequest, &'static str> {
    let account_id = parse_id(account_id).map_err(|_| "Choose an account.")?;
    let amount = parse_amount(amount)?;
    let kind = match movement {
        Movement::Deposit => Some(DEPOSIT.to_owned()),
        Movement::Withdraw => None,
    };
    Ok(TransactionRequest { account_id, amount, kind })
}

pub(crate) fn account_create_request(
    customer_id: Option<i64>,
    account_name: &str,
    account_type: &str,
    branch_name: &str,
    initial_deposit: &str,
) -> Result<AccountCreateRequest, &'static str> {
    let customer_id = customer_id.ok_or("Your profile is missing a customer id. Sign in again.")?;
    let account_name = account_name.trim();
    if account_name.is_empty() {
        return Err("Enter an account name.");
    }
    if !ACCOUNT_TYPES.contains(&account_type) {
        return Err("Choose an account type.");
    }
    let branch_name = branch_name.trim();
    if branch_name.is_empty() {
        return Err("Enter a branch name.");
    }
    let initial_deposit = match initial_deposit.trim() {
        "" => 0.0,
        raw => parse_amount(raw)?,
    };
    Ok(AccountCreateRequest {
        customer_id,
        branch_name: branch_name.to_owned(),
        account_name: account_name.to_owned(),
        account_type: account_type.to_owned(),
        initial_deposit,
        email: None,
        phone: None,
    })
}

pub(crate) fn loan_application(account_id: &str, loan_type: &str, amount: &str) -> Result<LoanApplication, &'static str> {
    let account_id = parse_id(account_id).map_err(|_| "Choose an account.")?;
    if !LOAN_TYPES.contains(&loan_type) {
        return Err("Choose a loan type.");
    }
    let loan_amount = parse_amount(amount)?;
    Ok(LoanApplication { account_id, loan_type: loan_type.to_owned(), loan_amount })
}

/// Fetch the signed-in customer's accounts into `accounts`.
fn load_accounts(auth: AuthContext, accounts: RwSignal<Vec<AccountDto>>, error: RwSignal<String>) {
    #[cfg(feature = "hydrate")]
    {
        let header = auth.auth_header();
        leptos::task::spawn_local(async move {
            match crate::net::bank::PortalApi::browser(header).my_accounts().await {
                Ok(list) => accounts.set(list),
                Err(e) => error.set(e.to_string()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, accounts, error);
}

#[component]
fn AccountPicker(accounts: RwSignal<Vec<AccountDto>>, selected: RwSignal<String>) -> impl IntoView {
    view! {
        <select
            class="form-select"
            prop:value=move || selected.get()
            on:change=move |ev| selected.set(event_target_value(&ev))
        >
            <option value="">"Choose an account"</option>
            <For
                each=move || accounts.get()
                key=|account| account.acc_id
                children=|account| {
                    view! {
                        <option value=account.acc_id.to_string()>
                            {format!("{} ({}) #{}", account.acc_name, account.acc_type, account.acc_id)}
                        </option>
                    }
                }
            />
        </select>
    }
}

#[component]
pub fn CustomerDashboard() -> impl IntoView {
    let auth = use_auth();
    let accounts = RwSignal::new(Vec::<AccountDto>::new());
    let error = RwSignal::new(String::new());
    let selected = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    load_accounts(auth, accounts, error);

    let total = move || accounts.with(|list| list.iter().map(|account| account.balance).sum::<f64>());

    let submit = move |movement: Movement| {
        if busy.get() {
            return;
        }
        let request = match transaction_request(&selected.get(), &amount.get(), movement) {
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
                let api = crate::net::bank::PortalApi::browser(header);
                let result = match movement {
                    Movement::Deposit => api.deposit(&request).await,
                    Movement::Withdraw => api.withdraw(&request).await,
                };
                match result {
                    Ok(updated) => {
                        accounts.update(|list| {
                            if let Some(account) = list.iter_mut().find(|a| a.acc_id == updated.acc_id) {
                                account.balance = updated.balance;
                            }
                        });
                        amount.set(String::new());
                        info.set(format!("New balance: {}", format_money(updated.balance)));
                    }
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="page customer-dashboard">
            <h2>{move || format!("Welcome, {}", auth.user().map(|u| u.display_name().to_owned()).unwrap_or_default())}</h2>
            <p class="page__summary">"Total balance: " {move || format_money(total())}</p>
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Account"</th>
                        <th>"Type"</th>
                        <th>"Status"</th>
                        <th>"Balance"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || accounts.get()
                        key=|account| (account.acc_id, account.balance.to_bits())
                        children=|account| {
                            view! {
                                <tr>
                                    <td>{format!("{} #{}", account.acc_name, account.acc_id)}</td>
                                    <td>{account.acc_type}</td>
                                    <td>{account.status}</td>
                                    <td>{format_money(account.balance)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <div class="card">
                <h3>"Move money"</h3>
                <AccountPicker accounts=accounts selected=selected />
                <input
                    class="form-input"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <button class="btn" disabled=move || busy.get() on:click=move |_| submit(Movement::Deposit)>
                    "Deposit"
                </button>
                <button class="btn btn--secondary" disabled=move || busy.get() on:click=move |_| submit(Movement::Withdraw)>
                    "Withdraw"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="page__info">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn CreateAccountPage() -> impl IntoView {
    let auth = use_auth();
    let account_name = RwSignal::new(String::new());
    let account_type = RwSignal::new(ACCOUNT_TYPES[0].to_owned());
    let branch_name = RwSignal::new(String::new());
    let initial_deposit = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let customer_id = auth.user().and_then(|user| user.id);
        let request = match account_create_request(
            customer_id,
            &account_name.get(),
            &account_type.get(),
            &branch_name.get(),
            &initial_deposit.get(),
        ) {
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
                match crate::net::bank::PortalApi::browser(header).create_account(&request).await {
                    Ok(account) => {
                        info.set(format!("Account #{} opened.", account.acc_id));
                        account_name.set(String::new());
                        initial_deposit.set(String::new());
                    }
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="page">
            <h2>"Open a new account"</h2>
            <form class="card" on:submit=on_submit>
                <input
                    class="form-input"
                    placeholder="Account name"
                    prop:value=move || account_name.get()
                    on:input=move |ev| account_name.set(event_target_value(&ev))
                />
                <select
                    class="form-select"
                    prop:value=move || account_type.get()
                    on:change=move |ev| account_type.set(event_target_value(&ev))
                >
                    {ACCOUNT_TYPES.into_iter().map(|kind| view! { <option value=kind>{kind}</option> }).collect_view()}
                </select>
                <input
                    class="form-input"
                    placeholder="Branch"
                    prop:value=move || branch_name.get()
                    on:input=move |ev| branch_name.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Initial deposit"
                    prop:value=move || initial_deposit.get()
                    on:input=move |ev| initial_deposit.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Open account"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="page__info">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}

#[component]
pub fn CustomerTransactionsPage() -> impl IntoView {
    let auth = use_auth();
    let accounts = RwSignal::new(Vec::<AccountDto>::new());
    let transactions = RwSignal::new(Vec::<TransactionDto>::new());
    let selected = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    load_accounts(auth, accounts, error);

    Effect::new(move || {
        let Ok(account_id) = parse_id(&selected.get()) else {
            transactions.set(Vec::new());
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let header = auth.auth_header();
            leptos::task::spawn_local(async move {
                match crate::net::bank::PortalApi::browser(header).my_transactions(account_id).await {
                    Ok(list) => transactions.set(list),
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = account_id;
    });

    let visible = move || transactions.with(|list| filter_items(list, &query.get()));

    view! {
        <div class="page">
            <h2>"Transactions"</h2>
            <AccountPicker accounts=accounts selected=selected />
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

/// Read-only transaction list shared with the employee portal.
#[component]
pub fn TransactionTable(#[prop(into)] rows: Signal<Vec<TransactionDto>>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Id"</th>
                    <th>"Date"</th>
                    <th>"Type"</th>
                    <th>"Amount"</th>
                    <th>"Description"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|row| row.trans_id
                    children=|row| {
                        view! {
                            <tr>
                                <td>{row.trans_id}</td>
                                <td>{row.timestamp}</td>
                                <td>{row.transaction_type}</td>
                                <td>{format_money(row.amount)}</td>
                                <td>{row.description.unwrap_or_default()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
pub fn LoanPage() -> impl IntoView {
    let auth = use_auth();
    let accounts = RwSignal::new(Vec::<AccountDto>::new());
    let selected = RwSignal::new(String::new());
    let loan_type = RwSignal::new(LOAN_TYPES[0].to_owned());
    let amount = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    load_accounts(auth, accounts, info);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let application = match loan_application(&selected.get(), &loan_type.get(), &amount.get()) {
            Ok(application) => application,
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
                match crate::net::bank::PortalApi::browser(header).apply_for_loan(&application).await {
                    Ok(loan) => {
                        info.set(format!("Loan #{} submitted ({}).", loan.loan_id, loan.loan_status));
                        amount.set(String::new());
                    }
                    Err(e) => info.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = application;
    };

    view! {
        <div class="page">
            <h2>"Apply for a loan"</h2>
            <form class="card" on:submit=on_submit>
                <AccountPicker accounts=accounts selected=selected />
                <select
                    class="form-select"
                    prop:value=move || loan_type.get()
                    on:change=move |ev| loan_type.set(event_target_value(&ev))
                >
                    {LOAN_TYPES.into_iter().map(|kind| view! { <option value=kind>{kind}</option> }).collect_view()}
                </select>
                <input
                    class="form-input"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Submit application"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="page__info">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
