//! Domain primitives, services, and ports.
//!
//! Purpose: define the validated catalogue entities, the [`Outcome`]
//! envelope, and the application services behind the inbound ports. Types
//! here are transport agnostic; adapters live under `inbound` and
//! `outbound`.
//!
//! Public surface:
//! - Catalogue entities (`Category`, `City`, `Venue`, `Event`, `PriceTier`,
//!   `Tag`) and read projections (`EventDto`, `PriceTierDto`).
//! - `Outcome`: success/failure envelope returned by every use-case.
//! - `Error` / `ErrorCode`: domain error payload and stable codes.
//! - `EventSearchCriteria` / `EventFilter`: event search input.
//! - `CategoryService`, `EventCatalogService`, `TagService`: use-case
//!   implementations.

pub mod catalog;
pub mod category_service;
pub mod error;
pub mod event_catalog_service;
pub mod event_search;
pub mod outcome;
pub mod ports;
mod slug;
pub mod tag_service;
pub mod trace_id;

pub use self::catalog::{
    CatalogValidationError, Category, CategoryDraft, CategoryId, City, CityDraft, CityId,
    Currency, DEFAULT_CURRENCY, Event, EventDraft, EventDto, EventId, EventNames,
    InvalidIdError, MAX_TAG_NAME_CHARS, PriceTier, PriceTierDraft, PriceTierDto, PriceTierId,
    Tag, TagDraft, TagId, TagName, Venue, VenueDraft, VenueId,
};
pub use self::category_service::CategoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::event_catalog_service::EventCatalogService;
pub use self::event_search::{
    DEFAULT_SEARCH_LIMIT, EventFilter, EventSearchCriteria, EventSearchError, MAX_SEARCH_LIMIT,
};
pub use self::outcome::{DEFAULT_SUCCESS_MESSAGE, Outcome, OutcomeValidationError};
pub use self::tag_service::{ALREADY_ATTACHED_MESSAGE, TagService};
pub use self::trace_id::TraceId;
