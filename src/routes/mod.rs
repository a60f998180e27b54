//! HTTP handlers exposed by the customer service.

use actix_web::web;

pub mod api;

/// Registers every route together with the shared extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(api::query_config())
        .service(api::list_customers);
}
