//! Client-side search over already-fetched lists.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::{BranchDto, CustomerDto, EmployeeDto, LoanDto, TransactionDto};

/// Text a list row can be searched by.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;
}

/// Rows where any field contains `query`, ignoring case. A blank query
/// keeps every row.
pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

impl Searchable for BranchDto {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.branch_name.clone(), self.branch_addr.clone()];
        fields.extend(self.branch_id.map(|id| id.to_string()));
        fields
    }
}

impl Searchable for EmployeeDto {
    fn search_fields(&self) -> Vec<String> {
        vec![self.emp_name.clone(), self.email.clone(), self.phone.clone(), self.emp_id.to_string()]
    }
}

impl Searchable for CustomerDto {
    fn search_fields(&self) -> Vec<String> {
        vec![self.cust_name.clone(), self.email.clone(), self.phone.clone(), self.cust_id.to_string()]
    }
}

impl Searchable for LoanDto {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.loan_type.clone(),
            self.loan_status.clone(),
            self.loan_id.to_string(),
            self.account_id.to_string(),
        ]
    }
}

impl Searchable for TransactionDto {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.transaction_type.clone(), self.trans_id.to_string(), self.timestamp.clone()];
        fields.extend(self.description.clone());
        fields
    }
}
