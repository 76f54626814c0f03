//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use crate::domain::ports::{MockCategoryApplication, MockEventService, MockTagApplication};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::configure_extractors;
use crate::middleware::Trace;

/// Mocked application ports; unconfigured mocks panic when called.
#[derive(Default)]
pub(crate) struct StatePorts {
    pub(crate) categories: MockCategoryApplication,
    pub(crate) events: MockEventService,
    pub(crate) tags: MockTagApplication,
}

impl From<StatePorts> for HttpState {
    fn from(ports: StatePorts) -> Self {
        Self::new(
            Arc::new(ports.categories),
            Arc::new(ports.events),
            Arc::new(ports.tags),
        )
    }
}

/// Build a test service mounting `configure` under `/api/v1`.
pub(crate) async fn init_app<F>(
    ports: StatePorts,
    configure: F,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>
where
    F: FnOnce(&mut web::ServiceConfig),
{
    let state = HttpState::from(ports);
    test::init_service(
        App::new().app_data(web::Data::new(state)).wrap(Trace).service(
            web::scope("/api/v1")
                .configure(configure_extractors)
                .configure(configure),
        ),
    )
    .await
}

/// Send `req` and decode the JSON envelope, returning `Null` for empty bodies.
pub(crate) async fn call<S, B>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req).await;
    let status = res.status();
    let bytes = test::read_body(res).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}

/// Issue a GET request against `uri`.
pub(crate) async fn call_get<S, B>(app: &S, uri: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    call(app, test::TestRequest::get().uri(uri).to_request()).await
}
