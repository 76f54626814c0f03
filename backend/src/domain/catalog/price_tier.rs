//! Price tier entity and currency code.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CatalogValidationError;
use super::ids::{EventId, PriceTierId};
use super::validation::{validate_bounded_field, validate_price};

/// Currency applied when a tier does not name one.
pub const DEFAULT_CURRENCY: &str = "CAD";

const MAX_TIER_NAME_CHARS: usize = 80;

/// Three-letter uppercase ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    /// Validate a currency code.
    ///
    /// # Examples
    /// ```
    /// use eventshop::domain::Currency;
    ///
    /// assert!(Currency::new("EUR").is_ok());
    /// assert!(Currency::new("eur").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogValidationError> {
        let value = value.into();
        if value.len() == 3 && value.chars().all(|ch| ch.is_ascii_uppercase()) {
            Ok(Self(value))
        } else {
            Err(CatalogValidationError::InvalidCurrency { value })
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_owned())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Currency {
    type Error = CatalogValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

/// Input payload for [`PriceTier::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct PriceTierDraft {
    pub id: PriceTierId,
    pub event_id: EventId,
    pub tier_name: String,
    pub price: Decimal,
    #[serde(default)]
    pub currency: Currency,
}

/// Named price level for an event, such as "Floor" or "Balcony".
///
/// ## Invariants
/// - `tier_name` is trimmed and non-empty.
/// - `price` is non-negative with at most two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTier {
    id: PriceTierId,
    event_id: EventId,
    tier_name: String,
    price: Decimal,
    currency: Currency,
}

impl PriceTier {
    /// Validate and construct a price tier.
    pub fn new(draft: PriceTierDraft) -> Result<Self, CatalogValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> PriceTierId {
        self.id
    }
    pub fn event_id(&self) -> EventId {
        self.event_id
    }
    pub fn tier_name(&self) -> &str {
        self.tier_name.as_str()
    }
    pub fn price(&self) -> Decimal {
        self.price
    }
    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl TryFrom<PriceTierDraft> for PriceTier {
    type Error = CatalogValidationError;

    fn try_from(draft: PriceTierDraft) -> Result<Self, Self::Error> {
        let tier_name =
            validate_bounded_field(draft.tier_name, "price_tier.tier_name", MAX_TIER_NAME_CHARS)?;
        let price = validate_price(draft.price, "price_tier.price")?;
        Ok(Self {
            id: draft.id,
            event_id: draft.event_id,
            tier_name,
            price,
            currency: draft.currency,
        })
    }
}

impl<'de> Deserialize<'de> for PriceTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        PriceTierDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
