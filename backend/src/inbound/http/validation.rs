//! Shared validation helpers for inbound HTTP adapters.
//!
//! Malformed path segments, query strings, and JSON bodies are reported as
//! `invalid_request` envelopes listing one message per rejected field, the
//! same shape application services use for domain validation failures.

use std::str::FromStr;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use chrono::NaiveDate;
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidPath,
    InvalidQuery,
    InvalidBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            ValidationCode::InvalidPath => "invalid_path",
            ValidationCode::InvalidQuery => "invalid_query",
            ValidationCode::InvalidBody => "invalid_body",
        }
    }

    fn message(self) -> &'static str {
        match self {
            ValidationCode::InvalidPath => "invalid path parameters",
            ValidationCode::InvalidQuery => "invalid query parameters",
            ValidationCode::InvalidBody => "invalid request body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Accumulates field problems so a request reports all of them at once.
#[derive(Debug)]
pub(crate) struct FieldProblems {
    code: ValidationCode,
    problems: Vec<String>,
}

impl FieldProblems {
    pub(crate) fn new(code: ValidationCode) -> Self {
        Self {
            code,
            problems: Vec::new(),
        }
    }

    /// Record the error of `result`, yielding its value otherwise.
    pub(crate) fn check<T>(&mut self, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(problem) => {
                self.problems.push(problem);
                None
            }
        }
    }

    /// Finish validation, failing when any problem was recorded.
    pub(crate) fn finish(self) -> Result<(), Error> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(validation_error(self.code, self.problems))
        }
    }
}

fn validation_error(code: ValidationCode, problems: Vec<String>) -> Error {
    Error::invalid_request(code.message()).with_details(json!({
        "code": code.as_str(),
        "errors": problems,
    }))
}

/// Parse an optional numeric parameter such as `categoryId`.
pub(crate) fn parse_optional<T: FromStr>(
    raw: Option<&str>,
    field: FieldName,
) -> Result<Option<T>, String> {
    raw.map(|value| {
        value
            .trim()
            .parse()
            .map_err(|_| format!("{} must be a positive integer (got {value:?})", field.as_str()))
    })
    .transpose()
}

/// Parse a comma-separated identifier list; blank entries are skipped.
pub(crate) fn parse_id_list<T: FromStr>(
    raw: Option<&str>,
    field: FieldName,
) -> Result<Vec<T>, String> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .enumerate()
        .map(|(index, item)| {
            item.parse().map_err(|_| {
                format!(
                    "{}[{index}] must be a positive integer (got {item:?})",
                    field.as_str()
                )
            })
        })
        .collect()
}

/// Parse an optional `YYYY-MM-DD` calendar date.
pub(crate) fn parse_optional_date(
    raw: Option<&str>,
    field: FieldName,
) -> Result<Option<NaiveDate>, String> {
    raw.map(|value| {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| format!("{} must be a YYYY-MM-DD date (got {value:?})", field.as_str()))
    })
    .transpose()
}

/// Error handler for [`web::PathConfig`].
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(ValidationCode::InvalidPath, vec![err.to_string()]).into()
}

/// Error handler for [`web::QueryConfig`].
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(ValidationCode::InvalidQuery, vec![err.to_string()]).into()
}

/// Error handler for [`web::JsonConfig`].
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    validation_error(ValidationCode::InvalidBody, vec![err.to_string()]).into()
}

/// Register extractor configuration that reports failures as envelopes.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use eventshop::inbound::http::validation::configure_extractors;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_extractors));
/// ```
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler));
}

#[cfg(test)]
mod tests {
    //! Regression coverage for request parsing helpers.
    use super::*;
    use crate::domain::{ErrorCode, TagId};
    use rstest::rstest;

    const TAGS: FieldName = FieldName::new("tagIds");
    const FROM: FieldName = FieldName::new("from");

    #[rstest]
    #[case(None, vec![])]
    #[case(Some("3"), vec![3])]
    #[case(Some("3, 5,,7"), vec![3, 5, 7])]
    fn parses_comma_separated_ids(#[case] raw: Option<&str>, #[case] expected: Vec<i32>) {
        let parsed: Vec<TagId> = parse_id_list(raw, TAGS).expect("valid list");
        assert_eq!(parsed.into_iter().map(TagId::get).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn reports_offending_list_entry() {
        let err = parse_id_list::<TagId>(Some("3,zero,0"), TAGS).expect_err("bad entry");
        assert!(err.starts_with("tagIds[1]"), "unexpected message: {err}");
    }

    #[rstest]
    #[case("2026-05-01", true)]
    #[case("2026-13-01", false)]
    #[case("01/05/2026", false)]
    fn parses_calendar_dates(#[case] raw: &str, #[case] valid: bool) {
        assert_eq!(parse_optional_date(Some(raw), FROM).is_ok(), valid);
    }

    #[rstest]
    fn collects_every_problem() {
        let mut problems = FieldProblems::new(ValidationCode::InvalidQuery);
        let from = problems.check(parse_optional_date(Some("later"), FROM));
        let tags = problems.check(parse_id_list::<TagId>(Some("x"), TAGS));
        assert!(from.is_none());
        assert!(tags.is_none());

        let err = problems.finish().expect_err("two problems recorded");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.detail_messages().len(), 2);
        assert_eq!(
            err.details().and_then(|d| d.get("code")),
            Some(&json!("invalid_query"))
        );
    }

    #[rstest]
    fn no_problems_finish_cleanly() {
        let mut problems = FieldProblems::new(ValidationCode::InvalidQuery);
        assert_eq!(problems.check(Ok::<_, String>(4)), Some(4));
        assert!(problems.finish().is_ok());
    }
}
