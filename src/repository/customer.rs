use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::get_connection;
use crate::domain::customer::{Customer, NewCustomer};
use crate::models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository};
use crate::schema::customers;

const LIKE_ESCAPE: char = '\\';

/// Escapes LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// Applies the filters of `query` to the customers table. Pagination and
/// ordering are left to the caller so the same filter can feed the count.
fn filtered(query: &CustomerListQuery) -> customers::BoxedQuery<'_, Sqlite> {
    let mut items = customers::table.into_boxed();

    if let Some(term) = &query.search {
        // SQLite LIKE ignores ASCII case.
        let pattern = format!("%{}%", escape_like(term));
        items = items.filter(
            customers::name
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(customers::email.like(pattern).escape(LIKE_ESCAPE)),
        );
    }

    if let Some(state) = &query.state {
        items = items.filter(customers::state.eq(state.as_str()));
    }

    if let Some(country) = &query.country {
        items = items.filter(customers::country.eq(country.as_str()));
    }

    items
}

impl CustomerReader for DieselRepository {
    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        let mut conn = get_connection(self.pool())?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let mut items = filtered(&query).order(customers::id.asc());

        if let Some(pagination) = &query.pagination {
            let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            items = items.limit(limit).offset(offset);
        }

        let customers = items
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Customer::from)
            .collect::<Vec<_>>();

        Ok((total as usize, customers))
    }

    fn count_customers(&self) -> RepositoryResult<usize> {
        let mut conn = get_connection(self.pool())?;

        let total: i64 = customers::table.count().get_result(&mut conn)?;

        Ok(total as usize)
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize> {
        let mut conn = get_connection(self.pool())?;

        let insertables: Vec<DbNewCustomer> = new_customers.iter().map(Into::into).collect();

        let affected = diesel::insert_into(customers::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("smith"), "smith");
    }
}
