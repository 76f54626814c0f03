//! Event catalogue backend.
//!
//! A hexagonal service exposing categories, events, price tiers, and tags
//! over JSON/HTTP. [`domain`] holds the validated model, the [`Outcome`]
//! envelope, and the application services; [`inbound`] and [`outbound`]
//! hold the Actix and Diesel adapters.
//!
//! [`Outcome`]: domain::Outcome

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
