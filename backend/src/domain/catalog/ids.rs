//! Database-assigned identifiers for catalogue entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when an identifier is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} must be a positive integer (got {value})")]
pub struct InvalidIdError {
    kind: &'static str,
    value: i64,
}

impl InvalidIdError {
    /// Name of the identifier type that rejected the value.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected value.
    pub fn value(&self) -> i64 {
        self.value
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Validate and wrap a raw identifier.
            pub fn new(value: i32) -> Result<Self, InvalidIdError> {
                if value <= 0 {
                    return Err(InvalidIdError {
                        kind: $kind,
                        value: i64::from(value),
                    });
                }
                Ok(Self(value))
            }

            /// Raw value as stored in the database.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl TryFrom<i32> for $name {
            type Error = InvalidIdError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = InvalidIdError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                i32::try_from(value)
                    .map_err(|_| InvalidIdError { kind: $kind, value })
                    .and_then(Self::new)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let parsed: i64 = s.trim().parse().map_err(|_| InvalidIdError {
                    kind: $kind,
                    value: 0,
                })?;
                Self::try_from(parsed)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`super::Category`].
    CategoryId,
    "category id"
);
define_id!(
    /// Identifier of a [`super::City`].
    CityId,
    "city id"
);
define_id!(
    /// Identifier of a [`super::Venue`].
    VenueId,
    "venue id"
);
define_id!(
    /// Identifier of an [`super::Event`].
    EventId,
    "event id"
);
define_id!(
    /// Identifier of a [`super::PriceTier`].
    PriceTierId,
    "price tier id"
);
define_id!(
    /// Identifier of a [`super::Tag`].
    TagId,
    "tag id"
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-4)]
    fn rejects_non_positive_values(#[case] value: i32) {
        let err = EventId::new(value).expect_err("non-positive id");
        assert_eq!(err.kind(), "event id");
        assert_eq!(err.value(), i64::from(value));
    }

    #[rstest]
    fn rejects_values_beyond_i32() {
        assert!(TagId::try_from(i64::from(i32::MAX) + 1).is_err());
    }

    #[rstest]
    #[case("7", Some(7))]
    #[case(" 12 ", Some(12))]
    #[case("abc", None)]
    #[case("-1", None)]
    fn parses_path_segments(#[case] raw: &str, #[case] expected: Option<i32>) {
        let parsed = raw.parse::<CategoryId>().ok().map(CategoryId::get);
        assert_eq!(parsed, expected);
    }

    #[rstest]
    fn serde_uses_bare_numbers() {
        let id = VenueId::new(3).expect("valid id");
        assert_eq!(serde_json::to_value(id).expect("serialise"), serde_json::json!(3));
        assert!(serde_json::from_value::<VenueId>(serde_json::json!(0)).is_err());
    }
}
