//! Portal REST calls for customers, employees and admins.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages build a `PortalApi` from the signed-in bearer header and call the
//! endpoint helpers below. Endpoint paths are produced by small functions so
//! they can be checked without a backend.
//!
//! ERROR HANDLING
//! ==============
//! A missing token short-circuits with `ApiError::Unauthenticated` before
//! any request is sent. Backend rejections carry the backend's message so
//! pages can show it inline. Nothing is retried.

#[cfg(test)]
#[path = "bank_test.rs"]
mod bank_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, BrowserTransport, HttpTransport, TransportError};
use super::types::{
    AccountCreateRequest, AccountDto, AccountUpdateRequest, BranchDto, CustomerDto, DashboardStats, EmployeeCreateRequest,
    EmployeeDto, EmployeeUpdateRequest, LoanApplication, LoanDto, LoanStatusUpdate, TransactionDto, TransactionRequest,
};
use crate::config::ApiConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("you are not signed in")]
    Unauthenticated,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response from server: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================
// Endpoint paths
// =============================================================

pub const USER_ACCOUNTS: &str = "/api/user/accounts";
pub const USER_DEPOSIT: &str = "/api/user/accounts/deposit";
pub const USER_WITHDRAW: &str = "/api/user/accounts/withdraw";
pub const USER_LOAN_APPLY: &str = "/api/user/loans/apply";
pub const EMPLOYEE_LOANS: &str = "/api/employee/loans";
pub const ADMIN_STATS: &str = "/api/admin/stats";
pub const ADMIN_EMPLOYEES: &str = "/api/admin/employees";
pub const ADMIN_BRANCHES: &str = "/api/admin/branches";
pub const ADMIN_CUSTOMERS: &str = "/api/admin/customers";

fn user_account_transactions_path(account_id: i64) -> String {
    format!("/api/user/accounts/{account_id}/transactions")
}

fn employee_account_path(account_id: i64) -> String {
    format!("/api/employee/accounts/{account_id}")
}

fn employee_account_status_path(account_id: i64, status: &str) -> String {
    format!("/api/employee/accounts/{account_id}/status/{}", urlencoding::encode(status))
}

fn employee_account_transactions_path(account_id: i64) -> String {
    format!("/api/employee/accounts/{account_id}/transactions")
}

fn employee_loan_status_path(loan_id: i64) -> String {
    format!("/api/employee/loans/{loan_id}/status")
}

fn admin_item_path(collection: &str, id: i64) -> String {
    format!("{collection}/{id}")
}

// =============================================================
// Client
// =============================================================

/// Backend calls signed with one bearer header.
#[derive(Clone, Debug)]
pub struct PortalApi<T> {
    transport: T,
    authorization: Option<String>,
}

impl PortalApi<BrowserTransport> {
    /// Client wired to `fetch`, signed with `authorization`.
    pub fn browser(authorization: Option<String>) -> Self {
        Self::new(BrowserTransport::new(ApiConfig::from_env()), authorization)
    }
}

impl<T: HttpTransport> PortalApi<T> {
    pub fn new(transport: T, authorization: Option<String>) -> Self {
        Self { transport, authorization }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<String> {
        let Some(authorization) = self.authorization.clone() else {
            return Err(ApiError::Unauthenticated);
        };
        let path = request.path.clone();
        let resp = self.transport.send(request.authorized(Some(authorization))).await?;
        if !resp.is_success() {
            log::warn!("{path} failed with status {}", resp.status);
            return Err(ApiError::Status { status: resp.status, message: resp.error_message() });
        }
        Ok(resp.body)
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_with<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        body: &B,
    ) -> ApiResult<R> {
        let request = request.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.fetch(request).await
    }

    /// Calls whose reply body is a bare confirmation string.
    async fn execute(&self, request: ApiRequest) -> ApiResult<String> {
        self.send(request).await
    }

    // ---- customer -------------------------------------------------------

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn my_accounts(&self) -> ApiResult<Vec<AccountDto>> {
        self.fetch(ApiRequest::get(USER_ACCOUNTS)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn create_account(&self, request: &AccountCreateRequest) -> ApiResult<AccountDto> {
        self.fetch_with(ApiRequest::post(USER_ACCOUNTS), request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn deposit(&self, request: &TransactionRequest) -> ApiResult<AccountDto> {
        self.fetch_with(ApiRequest::post(USER_DEPOSIT), request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn withdraw(&self, request: &TransactionRequest) -> ApiResult<AccountDto> {
        self.fetch_with(ApiRequest::post(USER_WITHDRAW), request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn my_transactions(&self, account_id: i64) -> ApiResult<Vec<TransactionDto>> {
        self.fetch(ApiRequest::get(user_account_transactions_path(account_id))).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn apply_for_loan(&self, application: &LoanApplication) -> ApiResult<LoanDto> {
        self.fetch_with(ApiRequest::post(USER_LOAN_APPLY), application).await
    }

    // ---- employee -------------------------------------------------------

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn account(&self, account_id: i64) -> ApiResult<AccountDto> {
        self.fetch(ApiRequest::get(employee_account_path(account_id))).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn update_account(&self, account_id: i64, update: &AccountUpdateRequest) -> ApiResult<AccountDto> {
        self.fetch_with(ApiRequest::put(employee_account_path(account_id)), update).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn set_account_status(&self, account_id: i64, status: &str) -> ApiResult<AccountDto> {
        self.fetch(ApiRequest::put(employee_account_status_path(account_id, status))).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn account_transactions(&self, account_id: i64) -> ApiResult<Vec<TransactionDto>> {
        self.fetch(ApiRequest::get(employee_account_transactions_path(account_id))).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn loans(&self) -> ApiResult<Vec<LoanDto>> {
        self.fetch(ApiRequest::get(EMPLOYEE_LOANS)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn set_loan_status(&self, loan_id: i64, status: &str) -> ApiResult<LoanDto> {
        let body = LoanStatusUpdate { status: status.to_owned() };
        self.fetch_with(ApiRequest::put(employee_loan_status_path(loan_id)), &body).await
    }

    // ---- admin ----------------------------------------------------------

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        self.fetch(ApiRequest::get(ADMIN_STATS)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn employees(&self) -> ApiResult<Vec<EmployeeDto>> {
        self.fetch(ApiRequest::get(ADMIN_EMPLOYEES)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn create_employee(&self, request: &EmployeeCreateRequest) -> ApiResult<String> {
        let request = ApiRequest::post(ADMIN_EMPLOYEES)
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(request).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn update_employee(&self, employee_id: i64, update: &EmployeeUpdateRequest) -> ApiResult<EmployeeDto> {
        self.fetch_with(ApiRequest::put(admin_item_path(ADMIN_EMPLOYEES, employee_id)), update).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn delete_employee(&self, employee_id: i64) -> ApiResult<String> {
        self.execute(ApiRequest::delete(admin_item_path(ADMIN_EMPLOYEES, employee_id))).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn branches(&self) -> ApiResult<Vec<BranchDto>> {
        self.fetch(ApiRequest::get(ADMIN_BRANCHES)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn create_branch(&self, branch: &BranchDto) -> ApiResult<BranchDto> {
        self.fetch_with(ApiRequest::post(ADMIN_BRANCHES), branch).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn delete_branch(&self, branch_id: i64) -> ApiResult<String> {
        self.execute(ApiRequest::delete(admin_item_path(ADMIN_BRANCHES, branch_id))).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn customers(&self) -> ApiResult<Vec<CustomerDto>> {
        self.fetch(ApiRequest::get(ADMIN_CUSTOMERS)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the call is unauthenticated, fails, or is rejected.
    pub async fn delete_customer(&self, customer_id: i64) -> ApiResult<String> {
        self.execute(ApiRequest::delete(admin_item_path(ADMIN_CUSTOMERS, customer_id))).await
    }
}
