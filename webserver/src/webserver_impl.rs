//! Main webserver implementation
//!
//! The WebServer struct wires the engine and the order store into an axum
//! router using dependency injection. The dialogue itself is stateless: each
//! chat request carries the caller's session and gets the next one back, and
//! draws its phrases and delays from a choice source built for that request.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, mpsc};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use engine::{ChoiceSource, DialogueController, Previewer, TemplateCatalog, TemplateResolver};
use shared::{ComponentId, WebServerConfig, component_info};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::OrderStore;
use crate::web::handlers::{chat, health, orders, quick_actions, templates};

/// Main webserver struct with dependency injection
pub struct WebServer<O, C>
where
    O: OrderStore,
    C: ChoiceSource,
{
    state: Arc<WebServerState>,
    controller: DialogueController,
    previewer: Arc<Previewer>,
    orders: O,
    choices: Arc<dyn Fn() -> C + Send + Sync>,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: Arc<Mutex<Option<mpsc::Receiver<()>>>>,
}

impl<O, C> Clone for WebServer<O, C>
where
    O: OrderStore + Clone,
    C: ChoiceSource,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            controller: self.controller,
            previewer: self.previewer.clone(),
            orders: self.orders.clone(),
            choices: self.choices.clone(),
            shutdown_tx: self.shutdown_tx.clone(),
            shutdown_rx: self.shutdown_rx.clone(),
        }
    }
}

impl<O, C> WebServer<O, C>
where
    O: OrderStore + Clone + 'static,
    C: ChoiceSource + Send + 'static,
{
    /// Create a new webserver with dependency injection
    ///
    /// `choices` builds a fresh choice source for every chat turn.
    pub fn new<F>(config: WebServerConfig, catalog: Arc<TemplateCatalog>, orders: O, choices: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
    {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        Self {
            state: Arc::new(WebServerState::new(config)),
            controller: DialogueController::new(),
            previewer: Arc::new(Previewer::new(TemplateResolver::new(catalog))),
            orders,
            choices: Arc::new(choices),
            shutdown_tx,
            shutdown_rx: Arc::new(Mutex::new(Some(shutdown_rx))),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Conversation
            .route("/api/chat", post(chat::chat_handler::<O, C>))
            .route("/api/quick-actions", get(quick_actions::quick_actions_handler))

            // Catalog
            .route("/api/templates", get(templates::templates_handler::<O, C>))

            // Orders
            .route(
                "/api/orders",
                get(orders::list_orders_handler::<O, C>).post(orders::create_order_handler::<O, C>),
            )
            .route("/api/orders/:id", patch(orders::update_order_handler::<O, C>))

            // Health check
            .route("/health", get(health::health_check::<O, C>))

            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Bind the configured address and serve until shutdown
    pub async fn run(&self) -> WebServerResult<()> {
        let address = self.state.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {address}: {e}")))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until a shutdown signal arrives
    pub async fn serve(&self, listener: TcpListener) -> WebServerResult<()> {
        let mut shutdown_rx = self
            .shutdown_rx
            .lock()
            .await
            .take()
            .ok_or_else(|| WebServerError::ServerStartup("server is already running".to_string()))?;

        let address = listener.local_addr()?;
        component_info!(ComponentId::WebServer, "🌐 Site builder listening on http://{}", address);
        component_info!(
            ComponentId::WebServer,
            templates = self.catalog().len(),
            store = %self.state.config.store,
            "Serving chat, templates and orders"
        );

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(async move {
                shutdown_rx.recv().await;
            })
            .await?;

        Ok(())
    }

    /// Sender that stops a running server
    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn controller(&self) -> &DialogueController {
        &self.controller
    }

    pub fn previewer(&self) -> &Previewer {
        &self.previewer
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        self.previewer.resolver().catalog()
    }

    pub fn orders(&self) -> &O {
        &self.orders
    }

    pub fn choice_source(&self) -> C {
        (self.choices)()
    }
}
