//! Site builder web server entry point

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;

use engine::{RngChoiceSource, TemplateCatalog};
use shared::{ComponentId, StoreKind, WebServerConfig, component_info, logging};
use webserver::{InMemoryOrderStore, JsonFileOrderStore, OrderStore, WebServer, WebServerError};

/// Command line arguments, also readable from `SITEBUILDER_*` variables
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Guided conversational website builder")]
struct Args {
    /// Port for HTTP server
    #[arg(long, env = "SITEBUILDER_PORT", default_value = "8080")]
    port: u16,

    /// Host address to bind
    #[arg(long, env = "SITEBUILDER_BIND_HOST", default_value = "127.0.0.1")]
    bind_host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SITEBUILDER_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Directory holding orders.json
    #[arg(long, env = "SITEBUILDER_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Order store backend (json, memory)
    #[arg(long, env = "SITEBUILDER_STORE", default_value = "json")]
    store: StoreKind,

    /// JSON template catalog replacing the built-in templates
    #[arg(long, env = "SITEBUILDER_CATALOG")]
    catalog: Option<PathBuf>,
}

impl From<Args> for WebServerConfig {
    fn from(args: Args) -> Self {
        Self {
            bind_host: args.bind_host,
            bind_port: args.port,
            data_dir: args.data_dir,
            store: args.store,
            catalog_path: args.catalog,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let args = Args::parse();
    logging::init_tracing(ComponentId::WebServer, Some(&args.log_level));

    let config = WebServerConfig::from(args);
    logging::log_startup(ComponentId::WebServer, &format!("site builder on {}", config.bind_address()));

    let catalog = match &config.catalog_path {
        Some(path) => {
            component_info!(ComponentId::WebServer, path = %path.display(), "Loading template catalog");
            TemplateCatalog::from_json_file(path)
        }
        None => TemplateCatalog::builtin(),
    }
    .map_err(WebServerError::from)?;
    let catalog = Arc::new(catalog);

    match config.store {
        StoreKind::Json => {
            let store = JsonFileOrderStore::new(&config.data_dir);
            component_info!(ComponentId::WebServer, path = %store.path().display(), "Using JSON order store");
            serve(config, catalog, store).await?;
        }
        StoreKind::Memory => {
            component_info!(ComponentId::WebServer, "Using in-memory order store");
            serve(config, catalog, InMemoryOrderStore::new()).await?;
        }
    }

    logging::log_success(ComponentId::WebServer, "WebServer stopped gracefully");
    Ok(())
}

async fn serve<O>(config: WebServerConfig, catalog: Arc<TemplateCatalog>, store: O) -> Result<(), WebServerError>
where
    O: OrderStore + Clone + 'static,
{
    let webserver = WebServer::new(config, catalog, store, RngChoiceSource::from_entropy);

    // Set up graceful shutdown
    let shutdown_sender = webserver.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(ComponentId::WebServer, "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(ComponentId::WebServer, "Signal handling", &err);
            }
        }
    });

    webserver.run().await
}
