//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
        fn count_customers(&self) -> RepositoryResult<usize>;
    }

    impl CustomerWriter for Repository {
        fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize>;
    }
}
