//! DTOs exposed by the `/customers` endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::customer::Customer;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Query parameters accepted by the `/customers` service.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomersQuery {
    /// Optional substring matched against name and email, ignoring case.
    pub search: Option<String>,
    /// Optional exact state filter.
    pub state: Option<String>,
    /// Optional exact country filter.
    pub country: Option<String>,
    /// 1-based page number.
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: usize,
    /// Maximum number of customers per page.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "page_size must be greater than or equal to 1"))]
    pub page_size: usize,
}

impl Default for CustomersQuery {
    fn default() -> Self {
        Self {
            search: None,
            state: None,
            country: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Public projection of a [`Customer`]. The date of birth is not exposed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub state: String,
    pub country: String,
}

impl From<Customer> for CustomerSummary {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.get(),
            name: customer.name.into_inner(),
            email: customer.email.into_inner(),
            state: customer.state.into_inner(),
            country: customer.country.into_inner(),
        }
    }
}

/// Result payload returned by [`crate::services::customers::list_customers`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomersResponse {
    /// Page of customers requested by the caller.
    pub data: Vec<CustomerSummary>,
    /// Total number of customers matching the filter.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Body returned when a request is rejected.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
