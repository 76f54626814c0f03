//! HTTP inbound adapter exposing REST endpoints.

pub mod categories;
pub mod error;
pub mod events;
pub mod health;
pub mod schemas;
pub mod state;
pub mod tags;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register every catalogue endpoint on `cfg`.
///
/// Mount inside a `/api/v1` scope; extractor failures are rendered as
/// `invalid_request` envelopes.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use eventshop::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    validation::configure_extractors(cfg);
    cfg.service(categories::list_categories)
        .service(categories::get_category)
        .service(categories::list_category_events)
        .service(events::search_events)
        .service(events::get_event)
        .service(events::event_exists)
        .service(tags::list_tags)
        .service(tags::create_tag)
        .service(tags::get_tag_name)
        .service(tags::create_and_attach_tag)
        .service(tags::attach_tag)
        .service(tags::detach_tag);
}
