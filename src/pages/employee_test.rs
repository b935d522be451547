use super::*;

fn loan(id: i64, status: &str) -> LoanDto {
    LoanDto { loan_id: id, loan_status: status.to_owned(), ..LoanDto::default() }
}

#[test]
fn loan_counts_group_by_status() {
    let loans = vec![loan(1, "PENDING"), loan(2, "pending"), loan(3, "APPROVED"), loan(4, "REJECTED"), loan(5, "?")];
    assert_eq!(loan_counts(&loans), LoanCounts { pending: 2, approved: 1, rejected: 1 });
}

#[test]
fn only_pending_loans_can_be_decided() {
    assert!(is_pending(&loan(1, "Pending")));
    assert!(!is_pending(&loan(1, "APPROVED")));
}

fn account() -> AccountDto {
    AccountDto { acc_id: 8, acc_name: "Rainy day".to_owned(), acc_type: "SAVINGS".to_owned(), ..AccountDto::default() }
}

#[test]
fn unchanged_details_produce_no_update() {
    assert_eq!(account_update(&account(), " Rainy day ", "SAVINGS"), None);
    assert_eq!(account_update(&account(), "", "SAVINGS"), None);
}

#[test]
fn update_carries_only_changed_fields() {
    let update = account_update(&account(), "Holiday", "SAVINGS").expect("changed");
    assert_eq!(update.acc_name.as_deref(), Some("Holiday"));
    assert_eq!(update.acc_type, None);

    let update = account_update(&account(), "Rainy day", "CHECKING").expect("changed");
    assert_eq!(update.acc_name, None);
    assert_eq!(update.acc_type.as_deref(), Some("CHECKING"));
}

#[test]
fn unknown_account_type_is_ignored() {
    assert_eq!(account_update(&account(), "Rainy day", "CRYPTO"), None);
}
