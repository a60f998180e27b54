use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CountryCode, CustomerEmail, CustomerId, CustomerName, StateCode, TypeConstraintError,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: CustomerName,
    pub email: CustomerEmail,
    pub state: StateCode,
    pub country: CountryCode,
    pub dob: NaiveDate,
}

/// Payload used to insert a customer. The store assigns the identifier.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub email: CustomerEmail,
    pub state: StateCode,
    pub country: CountryCode,
    pub dob: NaiveDate,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        name: CustomerName,
        email: CustomerEmail,
        state: StateCode,
        country: CountryCode,
        dob: NaiveDate,
    ) -> Self {
        Self {
            name,
            email,
            state,
            country,
            dob,
        }
    }

    /// Builds a payload from raw strings, validating every field.
    pub fn try_new(
        name: impl Into<String>,
        email: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        dob: NaiveDate,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(
            CustomerName::new(name)?,
            CustomerEmail::new(email)?,
            StateCode::new(state)?,
            CountryCode::new(country)?,
            dob,
        ))
    }
}
