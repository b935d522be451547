use super::*;

#[test]
fn user_record_reads_login_response_body() {
    let body = r#"{"token":"t1","type":"Bearer","id":7,"username":"a@b.com","roles":["ROLE_USER"]}"#;
    let user: UserRecord = serde_json::from_str(body).unwrap();
    assert_eq!(user.id, Some(7));
    assert_eq!(user.username.as_deref(), Some("a@b.com"));
    assert_eq!(user.roles, vec!["ROLE_USER".to_owned()]);
}

#[test]
fn user_record_accepts_full_name_alias() {
    let user: UserRecord = serde_json::from_str(r#"{"fullName":"Jane Doe","roles":[]}"#).unwrap();
    assert_eq!(user.display_name(), "Jane Doe");
}

#[test]
fn user_record_missing_fields_default() {
    let user: UserRecord = serde_json::from_str("{}").unwrap();
    assert_eq!(user, UserRecord::default());
    assert_eq!(user.display_name(), "Account holder");
}

#[test]
fn user_record_rejects_non_object() {
    assert!(serde_json::from_str::<UserRecord>("{not json").is_err());
    assert!(serde_json::from_str::<UserRecord>("null").is_err());
}

#[test]
fn register_request_serializes_camel_case() {
    let request = RegisterRequest {
        customer_name: "Jane".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret123".to_owned(),
        phone: "5551234567".to_owned(),
        date_of_birth: "1990-04-01".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "customerName": "Jane",
            "email": "jane@example.com",
            "password": "secret123",
            "phone": "5551234567",
            "dateOfBirth": "1990-04-01",
        })
    );
}

#[test]
fn transaction_request_renames_kind_to_type() {
    let deposit = TransactionRequest { account_id: 3, amount: 25.5, kind: Some("DEPOSIT".to_owned()) };
    assert_eq!(
        serde_json::to_value(&deposit).unwrap(),
        serde_json::json!({ "accountId": 3, "amount": 25.5, "type": "DEPOSIT" })
    );

    let withdrawal = TransactionRequest { account_id: 3, amount: 10.0, kind: None };
    assert_eq!(
        serde_json::to_value(&withdrawal).unwrap(),
        serde_json::json!({ "accountId": 3, "amount": 10.0 })
    );
}

#[test]
fn account_dto_tolerates_missing_columns() {
    let account: AccountDto =
        serde_json::from_str(r#"{"accId":12,"accName":"Main","balance":150.25,"status":"ACTIVE"}"#).unwrap();
    assert_eq!(account.acc_id, 12);
    assert_eq!(account.acc_type, "");
    assert_eq!(account.branch_name, None);
}

#[test]
fn account_update_skips_unset_fields() {
    let update = AccountUpdateRequest { status: Some("INACTIVE".to_owned()), ..AccountUpdateRequest::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "status": "INACTIVE" }));
}

#[test]
fn dashboard_stats_reads_camel_case() {
    let stats: DashboardStats = serde_json::from_str(
        r#"{"totalCustomers":10,"activeCustomers":8,"totalBranches":2,"totalEmployees":5}"#,
    )
    .unwrap();
    assert_eq!(
        stats,
        DashboardStats { total_customers: 10, active_customers: 8, total_branches: 2, total_employees: 5 }
    );
}
