//! Catalogue domain types.
//!
//! Entities are validated on construction from `*Draft` payloads and are
//! immutable afterwards. Read projections for transport live in [`dto`].

use std::fmt;

use rust_decimal::Decimal;

mod category;
mod city;
pub mod dto;
mod event;
mod ids;
mod price_tier;
mod tag;
mod validation;
mod venue;


pub use category::{Category, CategoryDraft};
pub use city::{City, CityDraft};
pub use dto::{EventDto, EventNames, PriceTierDto};
pub use event::{Event, EventDraft};
pub use ids::{CategoryId, CityId, EventId, InvalidIdError, PriceTierId, TagId, VenueId};
pub use price_tier::{Currency, DEFAULT_CURRENCY, PriceTier, PriceTierDraft};
pub use tag::{MAX_TAG_NAME_CHARS, Tag, TagDraft, TagName};
pub use venue::{Venue, VenueDraft};

/// Validation errors returned by catalogue constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValidationError {
    EmptyField {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
    },
    InvalidSlug {
        field: &'static str,
    },
    NegativePrice {
        field: &'static str,
        value: Decimal,
    },
    ExcessPrecision {
        field: &'static str,
        value: Decimal,
    },
    InvalidCurrency {
        value: String,
    },
    EndBeforeStart,
    MetadataNotObject,
    ForeignPriceTier {
        tier: PriceTierId,
        event: EventId,
    },
}

impl fmt::Display for CatalogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max } => {
                write!(f, "{field} must be at most {max} characters")
            }
            Self::InvalidSlug { field } => write!(
                f,
                "{field} must contain lowercase ASCII letters, digits, and hyphens"
            ),
            Self::NegativePrice { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::ExcessPrecision { field, value } => {
                write!(f, "{field} must have at most two decimal places (got {value})")
            }
            Self::InvalidCurrency { value } => write!(
                f,
                "currency must be a three-letter uppercase ISO 4217 code (got {value:?})"
            ),
            Self::EndBeforeStart => write!(f, "event end time must not precede its start time"),
            Self::MetadataNotObject => write!(f, "event metadata must be a JSON object"),
            Self::ForeignPriceTier { tier, event } => {
                write!(f, "price tier {tier} does not belong to event {event}")
            }
        }
    }
}

impl std::error::Error for CatalogValidationError {}
