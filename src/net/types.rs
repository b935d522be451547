//! Wire DTOs for the banking REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Response types default
//! missing fields so a backend that omits an optional column does not take a
//! whole page down; request types serialize exactly what the backend
//! validates.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials posted to `/api/auth/login`. The backend treats the email
/// address as the username.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Customer self-registration posted to `/api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub customer_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
}

/// Signed-in identity as stored in the `user_data` cookie.
///
/// The cookie holds the whole login response, so the token and token type
/// are present too; only the identity fields are modelled here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, alias = "fullName")]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Backend role claims such as `ROLE_USER`. Only the first is used.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserRecord {
    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Account holder")
    }
}

/// A customer bank account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDto {
    pub acc_id: i64,
    pub acc_name: String,
    pub acc_type: String,
    pub balance: f64,
    pub status: String,
    pub account_holder_name: Option<String>,
    pub branch_name: Option<String>,
}

/// Opening a new account (`POST /api/user/accounts`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreateRequest {
    pub customer_id: i64,
    pub branch_name: String,
    pub account_name: String,
    /// `SAVINGS` or `CHECKING`.
    pub account_type: String,
    pub initial_deposit: f64,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Employee edit of account details (`PUT /api/employee/accounts/{id}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Deposit or withdrawal against an account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub account_id: i64,
    pub amount: f64,
    /// `DEPOSIT` or `LOAN_REPAYMENT` for deposits; omitted for withdrawals.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A posted account transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionDto {
    pub trans_id: i64,
    pub amount: f64,
    pub transaction_type: String,
    /// ISO-8601 local timestamp.
    pub timestamp: String,
    pub description: Option<String>,
}

/// Loan application (`POST /api/user/loans/apply`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub account_id: i64,
    pub loan_type: String,
    pub loan_amount: f64,
}

/// A loan as listed for employees.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanDto {
    pub loan_id: i64,
    pub loan_type: String,
    pub loan_amount: f64,
    /// `PENDING`, `APPROVED` or `REJECTED`.
    pub loan_status: String,
    pub account_id: i64,
}

/// Loan decision body for `PUT /api/employee/loans/{id}/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanStatusUpdate {
    pub status: String,
}

/// Headline numbers for the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_customers: u64,
    pub active_customers: u64,
    pub total_branches: u64,
    pub total_employees: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDto {
    pub emp_id: i64,
    pub emp_name: String,
    pub email: String,
    pub dob: Option<String>,
    pub phone: String,
    pub branch_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreateRequest {
    pub email: String,
    pub password: String,
    pub employee_name: String,
    pub date_of_birth: String,
    pub phone: String,
    pub branch_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdateRequest {
    pub emp_name: String,
    pub phone: String,
    pub branch_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    pub branch_name: String,
    pub branch_addr: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDto {
    pub cust_id: i64,
    pub cust_name: String,
    pub email: String,
    pub dob: Option<String>,
    pub phone: String,
}
