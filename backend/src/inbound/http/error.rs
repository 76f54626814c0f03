//! HTTP adapter mapping for domain errors and outcomes.
//!
//! Purpose: keep the domain types HTTP-agnostic while letting Actix handlers
//! turn failures into consistent `Outcome` envelopes and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode, Outcome, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of internal error details.
pub const REDACTED_MESSAGE: &str = "Internal server error";

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal(REDACTED_MESSAGE);
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(Outcome::<()>::from_error(&redact_if_internal(self)))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}

/// Render an application outcome.
///
/// Successes are written with `status`; failures are turned back into a
/// domain [`Error`] so the status code follows the envelope's error code and
/// internal messages are redacted by [`ResponseError`].
pub fn respond<T: Serialize>(outcome: Outcome<T>, status: StatusCode) -> ApiResult<HttpResponse> {
    if outcome.is_success() {
        return Ok(HttpResponse::build(status).json(outcome));
    }
    match outcome.into_result() {
        Err(err) => Err(err),
        Ok(_) => Err(Error::internal("failed outcome carried a payload")),
    }
}

/// Render an application outcome with `200 OK` on success.
pub fn respond_ok<T: Serialize>(outcome: Outcome<T>) -> ApiResult<HttpResponse> {
    respond(outcome, StatusCode::OK)
}
