//! Shared helpers for the Diesel repository implementations.

use diesel::define_sql_function;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Text;
use tracing::debug;

define_sql_function! {
    /// PostgreSQL `lower(text)`; matches the case-folding of the tag name
    /// unique index.
    fn lower(value: Text) -> Text;
}

/// Map a Diesel error onto a port's query or connection constructor.
///
/// Closed connections surface as connection failures; everything else is a
/// query failure. The raw driver message is logged at debug level and
/// returned so callers can include it in the port error.
pub fn map_basic_diesel_error<E>(
    error: DieselError,
    operation: &str,
    query: impl FnOnce(String) -> E,
    connection: impl FnOnce(String) -> E,
) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        other => debug!(error = %other, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection(format!("{operation}: database connection closed"))
        }
        DieselError::NotFound => query(format!("{operation}: record not found")),
        other => query(format!("{operation}: {other}")),
    }
}

/// Whether the error is a unique constraint violation.
pub fn is_unique_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

/// Collect row conversion results, mapping the first error through `map_err`.
pub fn collect_rows<T, E>(
    results: impl Iterator<Item = Result<T, String>>,
    map_err: impl FnOnce(String) -> E,
) -> Result<Vec<T>, E> {
    results.collect::<Result<Vec<_>, _>>().map_err(map_err)
}

/// Convert a stored identifier into its domain newtype.
pub fn parse_id<T>(value: i32) -> Result<T, String>
where
    T: TryFrom<i32>,
    T::Error: std::fmt::Display,
{
    T::try_from(value).map_err(|err| err.to_string())
}
