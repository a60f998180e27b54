use validator::{Validate, ValidationErrors};

use crate::dto::api::{CustomersQuery, CustomersResponse};
use crate::repository::{CustomerListQuery, CustomerReader};
use crate::services::{ServiceError, ServiceResult};

/// Treats an empty filter as absent. Any other value, whitespace included,
/// is matched verbatim.
fn non_empty_filter(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Flattens validation failures into a single stable message.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Returns one page of customers matching the supplied filters together with
/// the total number of matches.
pub fn list_customers<R>(repo: &R, params: CustomersQuery) -> ServiceResult<CustomersResponse>
where
    R: CustomerReader + ?Sized,
{
    if let Err(err) = params.validate() {
        return Err(ServiceError::InvalidParameter(describe(&err)));
    }

    let mut query = CustomerListQuery::new().paginate(params.page, params.page_size);

    if let Some(term) = non_empty_filter(params.search) {
        query = query.search(term);
    }
    if let Some(state) = non_empty_filter(params.state) {
        query = query.state(state);
    }
    if let Some(country) = non_empty_filter(params.country) {
        query = query.country(country);
    }

    let (total, customers) = repo.list_customers(query).map_err(ServiceError::from)?;

    Ok(CustomersResponse {
        data: customers.into_iter().map(Into::into).collect(),
        total,
        page: params.page,
        page_size: params.page_size,
    })
}


#[cfg(test)]
mod describe_tests {
    use super::*;

    #[test]
    fn only_empty_filters_are_absent() {
        assert_eq!(non_empty_filter(None), None);
        assert_eq!(non_empty_filter(Some(String::new())), None);
        assert_eq!(non_empty_filter(Some(" ".to_string())).as_deref(), Some(" "));
        assert_eq!(
            non_empty_filter(Some(" Texas ".to_string())).as_deref(),
            Some(" Texas ")
        );
    }

    #[test]
    fn describe_joins_sorted_messages() {
        let params = CustomersQuery {
            page: 0,
            page_size: 0,
            ..CustomersQuery::default()
        };
        let errors = params.validate().expect_err("both fields are invalid");

        assert_eq!(
            describe(&errors),
            "page must be greater than or equal to 1; page_size must be greater than or equal to 1"
        );
    }
}
