use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};
use crate::domain::types::{CountryCode, CustomerEmail, CustomerId, CustomerName, StateCode};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub state: String,
    pub country: String,
    pub dob: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub dob: NaiveDate,
}

// Stored rows are returned as-is so a single odd row cannot fail a listing.
impl From<Customer> for DomainCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            id: CustomerId::from_stored(customer.id),
            name: CustomerName::from_stored(customer.name),
            email: CustomerEmail::from_stored(customer.email),
            state: StateCode::from_stored(customer.state),
            country: CountryCode::from_stored(customer.country),
            dob: customer.dob,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            name: customer.name.as_str(),
            email: customer.email.as_str(),
            state: customer.state.as_str(),
            country: customer.country.as_str(),
            dob: customer.dob,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1985, 7, 3).unwrap()
    }

    #[test]
    fn from_domain_new_creates_newcustomer() {
        let domain =
            DomainNewCustomer::try_new("John", "john@example.com", "Texas", "USA", dob()).unwrap();
        let new: NewCustomer = (&domain).into();
        assert_eq!(new.name, "John");
        assert_eq!(new.email, "john@example.com");
        assert_eq!(new.state, "Texas");
        assert_eq!(new.country, "USA");
        assert_eq!(new.dob, dob());
    }

    #[test]
    fn customer_into_domain() {
        let db_customer = Customer {
            id: 1,
            name: "n".to_string(),
            email: "e@example.com".to_string(),
            state: "Quebec".to_string(),
            country: "Canada".to_string(),
            dob: dob(),
        };
        let domain: DomainCustomer = db_customer.into();
        assert_eq!(domain.id.get(), 1);
        assert_eq!(domain.name.as_str(), "n");
        assert_eq!(domain.email.as_str(), "e@example.com");
        assert_eq!(domain.state.as_str(), "Quebec");
        assert_eq!(domain.country.as_str(), "Canada");
        assert_eq!(domain.dob, dob());
    }

    #[test]
    fn unusual_stored_row_still_converts() {
        let db_customer = Customer {
            id: 9,
            name: String::new(),
            email: "zed at example".to_string(),
            state: " Texas ".to_string(),
            country: "USA".to_string(),
            dob: dob(),
        };
        let domain: DomainCustomer = db_customer.into();
        assert_eq!(domain.name.as_str(), "");
        assert_eq!(domain.email.as_str(), "zed at example");
        assert_eq!(domain.state.as_str(), " Texas ");
    }
}
