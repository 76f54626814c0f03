//! Event entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CatalogValidationError;
use super::ids::{CategoryId, CityId, EventId, TagId, VenueId};
use super::price_tier::{PriceTier, PriceTierDraft};
use super::validation::validate_bounded_field;

const MAX_EVENT_TITLE_CHARS: usize = 200;

/// Input payload for [`Event::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct EventDraft {
    pub id: EventId,
    pub title: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    pub city_id: CityId,
    pub venue_id: VenueId,
    pub category_id: CategoryId,
    #[serde(default)]
    pub tag_ids: Vec<TagId>,
    #[serde(default)]
    pub price_tiers: Vec<PriceTierDraft>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Scheduled event held at a venue.
///
/// ## Invariants
/// - `title` is trimmed, non-empty and at most 200 characters.
/// - `end_time`, when present, is not before `start_time`.
/// - `metadata`, when present, is a JSON object.
/// - Every price tier references this event.
/// - `tag_ids` is sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: EventId,
    title: String,
    start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    city_id: CityId,
    venue_id: VenueId,
    category_id: CategoryId,
    tag_ids: Vec<TagId>,
    price_tiers: Vec<PriceTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
}

impl Event {
    /// Validate and construct an event.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use eventshop::domain::{CategoryId, CityId, Event, EventDraft, EventId, VenueId};
    ///
    /// let start = Utc.with_ymd_and_hms(2026, 5, 1, 19, 0, 0).unwrap();
    /// let draft = EventDraft {
    ///     id: EventId::new(1).unwrap(),
    ///     title: "Spring Gala".to_owned(),
    ///     start_time: start,
    ///     end_time: Some(start - chrono::Duration::hours(1)),
    ///     city_id: CityId::new(1).unwrap(),
    ///     venue_id: VenueId::new(1).unwrap(),
    ///     category_id: CategoryId::new(1).unwrap(),
    ///     tag_ids: Vec::new(),
    ///     price_tiers: Vec::new(),
    ///     metadata: None,
    /// };
    /// assert!(Event::new(draft).is_err());
    /// ```
    pub fn new(draft: EventDraft) -> Result<Self, CatalogValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> EventId {
        self.id
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }
    pub fn city_id(&self) -> CityId {
        self.city_id
    }
    pub fn venue_id(&self) -> VenueId {
        self.venue_id
    }
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }
    pub fn tag_ids(&self) -> &[TagId] {
        &self.tag_ids
    }
    pub fn price_tiers(&self) -> &[PriceTier] {
        &self.price_tiers
    }
    pub fn metadata(&self) -> Option<&Value> {
        self.metadata.as_ref()
    }

    /// Whether the event carries the given tag.
    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tag_ids.binary_search(&tag_id).is_ok()
    }
}

impl TryFrom<EventDraft> for Event {
    type Error = CatalogValidationError;

    fn try_from(draft: EventDraft) -> Result<Self, Self::Error> {
        let title = validate_bounded_field(draft.title, "event.title", MAX_EVENT_TITLE_CHARS)?;
        if draft.end_time.is_some_and(|end| end < draft.start_time) {
            return Err(CatalogValidationError::EndBeforeStart);
        }
        if draft.metadata.as_ref().is_some_and(|value| !value.is_object()) {
            return Err(CatalogValidationError::MetadataNotObject);
        }

        let price_tiers = draft
            .price_tiers
            .into_iter()
            .map(|tier| {
                if tier.event_id != draft.id {
                    return Err(CatalogValidationError::ForeignPriceTier {
                        tier: tier.id,
                        event: draft.id,
                    });
                }
                PriceTier::new(tier)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut tag_ids = draft.tag_ids;
        tag_ids.sort_unstable();
        tag_ids.dedup();

        Ok(Self {
            id: draft.id,
            title,
            start_time: draft.start_time,
            end_time: draft.end_time,
            city_id: draft.city_id,
            venue_id: draft.venue_id,
            category_id: draft.category_id,
            tag_ids,
            price_tiers,
            metadata: draft.metadata,
        })
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        EventDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
