//! City entity referenced by venues and events.

use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::ids::CityId;
use super::validation::validate_bounded_field;

const MAX_CITY_NAME_CHARS: usize = 100;

/// Input payload for [`City::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CityDraft {
    pub id: CityId,
    pub name: String,
}

/// City hosting venues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    id: CityId,
    name: String,
}

impl City {
    /// Validate and construct a city.
    pub fn new(draft: CityDraft) -> Result<Self, CatalogValidationError> {
        let name = validate_bounded_field(draft.name, "city.name", MAX_CITY_NAME_CHARS)?;
        Ok(Self { id: draft.id, name })
    }

    pub fn id(&self) -> CityId {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::new(CityDraft::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}
