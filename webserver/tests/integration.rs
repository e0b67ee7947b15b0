//! Integration tests for the site builder HTTP API
//!
//! Requests go through the real router with `tower::ServiceExt::oneshot`,
//! backed by the in-memory order store and a seeded choice source.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use serde_json::json;

use engine::{RngChoiceSource, TemplateCatalog};
use shared::{Category, PriceTiers, TemplateDescriptor, WebServerConfig};
use webserver::traits::MockOrderStore;
use webserver::{InMemoryOrderStore, WebServer, WebServerError};

mod common;
use common::{TestFixtures, TestHelpers};

/// A classification turn advances the session and echoes the category
#[tokio::test]
async fn test_chat_classifies_business_type() {
    // Arrange
    let router = TestHelpers::memory_server().build_router();
    let body = TestFixtures::chat("أريد موقع مطعم", TestFixtures::welcome_state());

    // Act
    let (status, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["success"], true);
    assert_eq!(reply["chatState"]["step"], "business_name");
    assert_eq!(reply["chatState"]["businessType"], "مطعم");
    assert_eq!(reply["response"]["action"], "request_info");
    assert_eq!(reply["response"]["templateCategory"], "restaurant");
    assert!(reply["preview"].is_null());
}

/// Unmatched text re-prompts without a category
#[tokio::test]
async fn test_chat_unmatched_text_holds_step() {
    let router = TestHelpers::memory_server().build_router();
    let body = TestFixtures::chat("hello", TestFixtures::welcome_state());

    let (status, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["chatState"]["step"], "welcome");
    assert_eq!(reply["response"]["action"], "none");
    assert!(reply["response"].get("templateCategory").is_none());
    assert_eq!(reply["response"]["delay"], 1000);
}

/// Missing session state starts a fresh conversation
#[tokio::test]
async fn test_chat_without_state_starts_at_welcome() {
    let router = TestHelpers::memory_server().build_router();

    let (status, reply) =
        TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &json!({ "message": "clinic" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["chatState"]["step"], "business_name");
    assert_eq!(reply["chatState"]["businessType"], "عيادة");
}

/// Empty or missing messages are rejected before reaching the engine
#[tokio::test]
async fn test_chat_requires_message() {
    let router = TestHelpers::memory_server().build_router();

    for body in [
        json!({ "chatState": TestFixtures::welcome_state() }),
        TestFixtures::chat("   ", TestFixtures::welcome_state()),
    ] {
        let (status, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["success"], false);
        assert_eq!(reply["error"], "البيانات المطلوبة مفقودة");
    }
}

/// Malformed JSON is a bad request with the standard error body
#[tokio::test]
async fn test_chat_rejects_malformed_json() {
    let router = TestHelpers::memory_server().build_router();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{ message: "))
        .unwrap();

    let (status, reply) = TestHelpers::send(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["success"], false);
}

/// Unknown steps are never coerced to a default
#[tokio::test]
async fn test_chat_unknown_step_is_bad_request() {
    let router = TestHelpers::memory_server().build_router();
    let body = TestFixtures::chat("مطعم", json!({ "step": "checkout" }));

    let (status, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(reply["error"].as_str().unwrap().contains("checkout"));
}

/// The description turn returns a rendered preview and records the template
#[tokio::test]
async fn test_chat_description_turn_includes_preview() {
    let server = TestHelpers::memory_server();
    let router = server.build_router();
    let body = TestFixtures::chat("أشهى المأكولات", TestFixtures::description_state("مطعم"));

    let (status, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["response"]["action"], "show_template");
    assert_eq!(reply["chatState"]["step"], "customization");
    assert_eq!(reply["chatState"]["selectedTemplate"], "restaurant-001");

    let preview = &reply["preview"];
    assert_eq!(preview["templateId"], "restaurant-001");
    assert_eq!(preview["title"], "مطعم الذوق");
    assert_eq!(preview["fellBack"], false);
    let html = preview["document"]["html"].as_str().unwrap();
    assert!(html.contains("مطعم الذوق"));
    assert!(html.contains("أشهى المأكولات"));
    assert!(!html.contains("{{"));
    assert!(reply.get("previewUnavailable").is_none());
}

/// Unknown business types fall back to the default category
#[tokio::test]
async fn test_chat_preview_falls_back_to_default() {
    let router = TestHelpers::memory_server().build_router();
    let body = TestFixtures::chat("وصف", TestFixtures::description_state("مدونة"));

    let (_, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;

    assert_eq!(reply["preview"]["category"], "restaurant");
    assert_eq!(reply["preview"]["fellBack"], true);
}

/// With no default template the turn still succeeds, flagged as unavailable
#[tokio::test]
async fn test_chat_preview_unavailable_is_not_an_error() {
    let shop = TemplateDescriptor {
        id: "shop-only".to_string(),
        name: "shop".to_string(),
        category: Category::Shop,
        description: String::new(),
        preview: String::new(),
        thumbnail: String::new(),
        sections: vec![],
        features: vec![],
        price: PriceTiers { basic: 5, advanced: 10, pro: 20 },
        colors: vec![],
        html: "<h1>{{businessName}}</h1>".to_string(),
        css: String::new(),
        is_active: true,
    };
    let server = WebServer::new(
        WebServerConfig::default(),
        Arc::new(TemplateCatalog::new(vec![shop]).unwrap()),
        InMemoryOrderStore::new(),
        || RngChoiceSource::seeded(TestFixtures::SEED),
    );
    let router = server.build_router();
    let body = TestFixtures::chat("وصف", TestFixtures::description_state("عيادة"));

    let (status, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["success"], true);
    assert!(reply["preview"].is_null());
    assert_eq!(reply["previewUnavailable"], true);
    assert_eq!(reply["chatState"]["step"], "customization");
}

/// Quick actions classify with their canned reply
#[tokio::test]
async fn test_chat_quick_action() {
    let router = TestHelpers::memory_server().build_router();
    let body = json!({ "quickAction": "online_store", "chatState": TestFixtures::welcome_state() });

    let (status, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["chatState"]["step"], "business_name");
    assert_eq!(reply["chatState"]["businessType"], "متجر");
    assert_eq!(reply["response"]["templateCategory"], "shop");
    assert_eq!(reply["response"]["delay"], 1500);
}

/// Each chat turn draws from its own choice source, so turns neither block
/// nor perturb each other
#[tokio::test]
async fn test_chat_turns_use_independent_choice_sources() {
    // Arrange
    let router = TestHelpers::memory_server().build_router();
    let body = TestFixtures::chat("أريد موقع مطعم", TestFixtures::welcome_state());

    // Act
    let (first, second) = tokio::join!(
        TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)),
        TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)),
    );
    let (_, third) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;

    // Assert
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);
    assert_eq!(first.1["response"], second.1["response"]);
    assert_eq!(first.1["response"], third["response"]);
}

/// A whole conversation replayed through the API reaches finalize and stays
#[tokio::test]
async fn test_full_conversation_round_trip() {
    let router = TestHelpers::memory_server().build_router();
    let mut state = TestFixtures::welcome_state();
    let mut steps = Vec::new();

    for message in ["مرحبا", "شركة", "الريادة", "حلول برمجية", "نعم", "تم", "مطعم"] {
        let body = TestFixtures::chat(message, state.clone());
        let (status, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;
        assert_eq!(status, StatusCode::OK);
        state = reply["chatState"].clone();
        steps.push(state["step"].as_str().unwrap().to_string());
    }

    assert_eq!(
        steps,
        vec!["welcome", "business_name", "description", "customization", "finalize", "finalize", "finalize"]
    );
    assert_eq!(state["businessType"], "شركة");
    assert_eq!(state["selectedTemplate"], "business-001");
}

/// Template listing and lookup
#[tokio::test]
async fn test_templates_queries() {
    let router = TestHelpers::memory_server().build_router();

    let (status, all) = TestHelpers::send(&router, TestHelpers::get("/api/templates")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["templates"].as_array().unwrap().len(), 5);

    let (_, explicit_all) = TestHelpers::send(&router, TestHelpers::get("/api/templates?category=all")).await;
    assert_eq!(explicit_all["templates"], all["templates"]);

    let (_, shops) = TestHelpers::send(&router, TestHelpers::get("/api/templates?category=shop")).await;
    let shops = shops["templates"].as_array().unwrap();
    assert_eq!(shops.len(), 1);
    assert_eq!(shops[0]["id"], "shop-001");
    assert_eq!(shops[0]["price"]["advanced"], 150);

    let (status, unknown) = TestHelpers::send(&router, TestHelpers::get("/api/templates?category=blog")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(unknown["templates"].as_array().unwrap().is_empty());

    let (status, clinic) = TestHelpers::send(&router, TestHelpers::get("/api/templates?id=clinic-001")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(clinic["template"]["category"], "clinic");
    assert_eq!(clinic["template"]["isActive"], true);
}

#[tokio::test]
async fn test_unknown_template_id_is_not_found() {
    let router = TestHelpers::memory_server().build_router();

    let (status, reply) = TestHelpers::send(&router, TestHelpers::get("/api/templates?id=nope-999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(reply["success"], false);
    assert_eq!(reply["error"], "القالب غير موجود");
}

/// Orders are validated, stored, listed and updated
#[tokio::test]
async fn test_order_lifecycle() {
    let server = TestHelpers::memory_server();
    let router = server.build_router();

    let (status, created) = TestHelpers::send(&router, TestHelpers::post_json("/api/orders", &TestFixtures::order())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], true);
    assert_eq!(created["order"]["id"], "ORDER001");
    assert_eq!(created["order"]["status"], "pending");
    assert_eq!(created["order"]["currency"], "SAR");
    assert_eq!(created["order"]["websiteData"]["customizations"]["font"], "Cairo");

    let (_, listed) = TestHelpers::send(&router, TestHelpers::get("/api/orders")).await;
    assert_eq!(listed["orders"].as_array().unwrap().len(), 1);

    let (status, updated) = TestHelpers::send(
        &router,
        TestHelpers::json_request(Method::PATCH, "/api/orders/ORDER001", &json!({ "status": "paid" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["order"]["status"], "paid");

    let (status, _) = TestHelpers::send(
        &router,
        TestHelpers::json_request(Method::PATCH, "/api/orders/ORDER404", &json!({ "status": "paid" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(server.state().orders_created(), 1);
}

/// Payment and delivery details sent with a status change are stored
#[tokio::test]
async fn test_order_update_stores_payment_and_delivery() {
    // Arrange
    let router = TestHelpers::memory_server().build_router();
    TestHelpers::send(&router, TestHelpers::post_json("/api/orders", &TestFixtures::order())).await;
    let update = json!({
        "status": "paid",
        "paymentId": "pi_1",
        "deliveredAt": "2026-01-01T00:00:00Z"
    });

    // Act
    let (status, updated) =
        TestHelpers::send(&router, TestHelpers::json_request(Method::PATCH, "/api/orders/ORDER001", &update)).await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["order"]["status"], "paid");
    assert_eq!(updated["order"]["paymentId"], "pi_1");
    assert!(updated["order"]["deliveredAt"].as_str().unwrap().starts_with("2026-01-01T00:00:00"));

    let (_, listed) = TestHelpers::send(&router, TestHelpers::get("/api/orders")).await;
    let stored = &listed["orders"][0];
    assert_eq!(stored["paymentId"], "pi_1");
    assert_eq!(stored["deliveredAt"], updated["order"]["deliveredAt"]);

    // A later status-only update keeps the payment id
    let (_, cancelled) = TestHelpers::send(
        &router,
        TestHelpers::json_request(Method::PATCH, "/api/orders/ORDER001", &json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(cancelled["order"]["status"], "cancelled");
    assert_eq!(cancelled["order"]["paymentId"], "pi_1");
}

/// Invalid orders come back with field details
#[tokio::test]
async fn test_invalid_order_is_rejected() {
    let router = TestHelpers::memory_server().build_router();
    let mut order = TestFixtures::order();
    order["customerName"] = json!("س");
    order["email"] = json!("nope");

    let (status, reply) = TestHelpers::send(&router, TestHelpers::post_json("/api/orders", &order)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["error"], "بيانات غير صحيحة");
    assert!(reply["details"].get("customer_name").is_some());
    assert!(reply["details"].get("email").is_some());

    let (_, listed) = TestHelpers::send(&router, TestHelpers::get("/api/orders")).await;
    assert!(listed["orders"].as_array().unwrap().is_empty());
}

/// Storage failures surface as a generic server error
#[tokio::test]
async fn test_order_store_failure_is_internal_error() {
    let mut store = MockOrderStore::new();
    store
        .expect_list()
        .returning(|| Err(WebServerError::storage("disk unavailable")));
    let router = TestHelpers::server_with_store(Arc::new(store)).build_router();

    let (status, reply) = TestHelpers::send(&router, TestHelpers::get("/api/orders")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply["success"], false);
    assert!(!reply["error"].as_str().unwrap().contains("disk"));
}

#[tokio::test]
async fn test_quick_actions_listing() {
    let router = TestHelpers::memory_server().build_router();

    let (status, reply) = TestHelpers::send(&router, TestHelpers::get("/api/quick-actions")).await;

    assert_eq!(status, StatusCode::OK);
    let actions = reply["quickActions"].as_array().unwrap();
    assert_eq!(actions.len(), 6);
    assert_eq!(actions[0]["id"], "company_site");
    assert_eq!(actions[0]["category"], "business");
}

#[tokio::test]
async fn test_health_reports_counters() {
    let server = TestHelpers::memory_server();
    let router = server.build_router();
    let body = TestFixtures::chat("متجر", TestFixtures::welcome_state());
    TestHelpers::send(&router, TestHelpers::post_json("/api/chat", &body)).await;

    let (status, health) = TestHelpers::send(&router, TestHelpers::get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["templates"], 5);
    assert_eq!(health["chatTurns"], 1);
}

/// The server stops when the shutdown sender fires
#[tokio::test]
async fn test_graceful_shutdown() {
    let server = TestHelpers::memory_server();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let shutdown = server.get_shutdown_sender();

    let running = server.clone();
    let handle = tokio::spawn(async move { running.serve(listener).await });

    shutdown.send(()).await.unwrap();
    let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());

    // The shutdown receiver is consumed by the first run
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    assert!(matches!(server.serve(listener).await, Err(WebServerError::ServerStartup(_))));
}
