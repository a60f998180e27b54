use crate::{
    db::DbPool,
    domain::customer::{Customer, NewCustomer},
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows to skip, saturating instead of overflowing.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// Filter set accepted by [`CustomerReader::list_customers`].
///
/// Every populated field narrows the result; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListQuery {
    /// Case-insensitive substring matched against name or email.
    pub search: Option<String>,
    /// Exact, case-sensitive state match.
    pub state: Option<String>,
    /// Exact, case-sensitive country match.
    pub country: Option<String>,
    pub pagination: Option<Pagination>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CustomerReader {
    /// Returns the number of matching customers and the requested window of them.
    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
    /// Returns the number of stored customers.
    fn count_customers(&self) -> RepositoryResult<usize>;
}

pub trait CustomerWriter {
    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize>;
}

/// Diesel-backed store shared by every request handler.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_filter() {
        let query = CustomerListQuery::new()
            .search("smith")
            .state("CA")
            .country("USA")
            .paginate(3, 10);

        assert_eq!(query.search.as_deref(), Some("smith"));
        assert_eq!(query.state.as_deref(), Some("CA"));
        assert_eq!(query.country.as_deref(), Some("USA"));
        assert_eq!(
            query.pagination,
            Some(Pagination {
                page: 3,
                per_page: 10
            })
        );
    }

    #[test]
    fn offset_skips_previous_pages() {
        let first = Pagination {
            page: 1,
            per_page: 10,
        };
        let third = Pagination {
            page: 3,
            per_page: 10,
        };
        assert_eq!(first.offset(), 0);
        assert_eq!(third.offset(), 20);
    }

    #[test]
    fn offset_saturates_on_overflow() {
        let huge = Pagination {
            page: usize::MAX,
            per_page: usize::MAX,
        };
        assert_eq!(huge.offset(), usize::MAX);
    }
}
