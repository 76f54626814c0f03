//! Venue entity.

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::ids::{CityId, VenueId};
use super::validation::{validate_bounded_field, validate_optional_field};

const MAX_VENUE_NAME_CHARS: usize = 150;

/// Input payload for [`Venue::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct VenueDraft {
    pub id: VenueId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city_id: CityId,
}

/// Place where events are held; belongs to one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    id: VenueId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    city_id: CityId,
}

impl Venue {
    /// Validate and construct a venue.
    pub fn new(draft: VenueDraft) -> Result<Self, CatalogValidationError> {
        let name = validate_bounded_field(draft.name, "venue.name", MAX_VENUE_NAME_CHARS)?;
        let address = validate_optional_field(draft.address, "venue.address")?;
        Ok(Self {
            id: draft.id,
            name,
            address,
            city_id: draft.city_id,
        })
    }

    pub fn id(&self) -> VenueId {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
    pub fn city_id(&self) -> CityId {
        self.city_id
    }
}

impl<'de> Deserialize<'de> for Venue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::new(VenueDraft::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}
