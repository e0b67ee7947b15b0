//! Router helpers for driving the API without a network socket

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use engine::{RngChoiceSource, TemplateCatalog};
use shared::WebServerConfig;
use webserver::{InMemoryOrderStore, OrderStore, WebServer};

use super::fixtures::TestFixtures;

/// Test helper utilities
pub struct TestHelpers;

impl TestHelpers {
    pub fn server_with_store<O>(store: O) -> WebServer<O, RngChoiceSource>
    where
        O: OrderStore + Clone + 'static,
    {
        WebServer::new(
            WebServerConfig::default(),
            Arc::new(TemplateCatalog::builtin().unwrap()),
            store,
            || RngChoiceSource::seeded(TestFixtures::SEED),
        )
    }

    pub fn memory_server() -> WebServer<InMemoryOrderStore, RngChoiceSource> {
        Self::server_with_store(InMemoryOrderStore::new())
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Self::json_request(Method::POST, uri, body)
    }

    /// Send one request through the router and decode the JSON body
    pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}
