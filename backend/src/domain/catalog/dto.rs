//! Flattened read projections for transport.
//!
//! DTOs resolve identifiers to display names so clients need no further
//! lookups. They are built from validated entities and carry no invariants
//! of their own beyond ordering.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::event::Event;
use super::ids::{CategoryId, CityId, EventId, PriceTierId, VenueId};
use super::price_tier::PriceTier;

/// Read projection of a [`PriceTier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTierDto {
    pub price_tier_id: PriceTierId,
    pub tier_name: String,
    pub event_id: EventId,
    pub price: Decimal,
    pub currency: String,
}

impl From<&PriceTier> for PriceTierDto {
    fn from(tier: &PriceTier) -> Self {
        Self {
            price_tier_id: tier.id(),
            tier_name: tier.tier_name().to_owned(),
            event_id: tier.event_id(),
            price: tier.price(),
            currency: tier.currency().to_string(),
        }
    }
}

/// Display names resolved for an event's references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventNames {
    pub city: String,
    pub venue: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Read projection of an [`Event`].
///
/// `tags` is sorted alphabetically; `price_tiers` is ordered by price, then
/// by tier id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub event_id: EventId,
    pub title: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    pub city_id: CityId,
    pub city_name: String,
    pub venue_id: VenueId,
    pub venue_name: String,
    pub category_id: CategoryId,
    pub category_name: String,
    pub tags: Vec<String>,
    pub price_tiers: Vec<PriceTierDto>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl EventDto {
    /// Project an event and its resolved names into a DTO.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use eventshop::domain::{
    ///     CategoryId, CityId, Event, EventDraft, EventDto, EventId, EventNames, VenueId,
    /// };
    ///
    /// let event = Event::new(EventDraft {
    ///     id: EventId::new(3).expect("id"),
    ///     title: "Derby".to_owned(),
    ///     start_time: Utc.with_ymd_and_hms(2026, 3, 14, 18, 0, 0).single().expect("time"),
    ///     end_time: None,
    ///     city_id: CityId::new(1).expect("id"),
    ///     venue_id: VenueId::new(2).expect("id"),
    ///     category_id: CategoryId::new(4).expect("id"),
    ///     tag_ids: Vec::new(),
    ///     price_tiers: Vec::new(),
    ///     metadata: None,
    /// })
    /// .expect("valid event");
    /// let dto = EventDto::project(
    ///     &event,
    ///     EventNames {
    ///         city: "Toronto".into(),
    ///         venue: "Arena".into(),
    ///         category: "Sports".into(),
    ///         tags: vec!["outdoor".into(), "Family".into()],
    ///     },
    /// );
    /// assert_eq!(dto.tags, ["Family", "outdoor"]);
    /// ```
    pub fn project(event: &Event, names: EventNames) -> Self {
        let EventNames {
            city,
            venue,
            category,
            mut tags,
        } = names;
        tags.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));

        let mut price_tiers: Vec<PriceTierDto> =
            event.price_tiers().iter().map(PriceTierDto::from).collect();
        price_tiers.sort_by(|a, b| {
            a.price
                .cmp(&b.price)
                .then_with(|| a.price_tier_id.cmp(&b.price_tier_id))
        });

        Self {
            event_id: event.id(),
            title: event.title().to_owned(),
            start_time: event.start_time(),
            end_time: event.end_time(),
            city_id: event.city_id(),
            city_name: city,
            venue_id: event.venue_id(),
            venue_name: venue,
            category_id: event.category_id(),
            category_name: category,
            tags,
            price_tiers,
            metadata: event.metadata().cloned(),
        }
    }
}
