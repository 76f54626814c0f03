//! Validation helpers shared by catalogue entities.

use rust_decimal::Decimal;

use super::CatalogValidationError;
use crate::domain::slug::is_valid_slug;

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, CatalogValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogValidationError::EmptyField { field });
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_owned())
    }
}

pub(super) fn validate_bounded_field(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, CatalogValidationError> {
    let value = validate_non_empty_field(value, field)?;
    if value.chars().count() > max {
        return Err(CatalogValidationError::TooLong { field, max });
    }
    Ok(value)
}

pub(super) fn validate_optional_field(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, CatalogValidationError> {
    value
        .map(|inner| validate_non_empty_field(inner, field))
        .transpose()
}

pub(super) fn validate_optional_slug(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<String>, CatalogValidationError> {
    match value {
        Some(slug) if !is_valid_slug(&slug) => Err(CatalogValidationError::InvalidSlug { field }),
        other => Ok(other),
    }
}

pub(super) fn validate_price(
    value: Decimal,
    field: &'static str,
) -> Result<Decimal, CatalogValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CatalogValidationError::NegativePrice { field, value });
    }
    if value.round_dp(2) != value {
        return Err(CatalogValidationError::ExcessPrecision { field, value });
    }
    Ok(value)
}
