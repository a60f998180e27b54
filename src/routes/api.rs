use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::dto::api::{CustomersQuery, ErrorResponse};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, customers as customers_service};

#[get("/customers")]
pub async fn list_customers(
    params: web::Query<CustomersQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customers_service::list_customers(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::InvalidParameter(detail)) => {
            HttpResponse::UnprocessableEntity().json(ErrorResponse { detail })
        }
        Err(err) => {
            log::error!("Failed to list customers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Rejects query strings that do not deserialize (e.g. `page=abc` or
/// `page=-1`) with the same 422 body used for range violations.
fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(ErrorResponse { detail }),
    )
    .into()
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}
