//! Entity Registry HTTP Server
//!
//! A standalone server binary exposing the in-memory entity store over REST.

use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use entity_registry::{
    create_rest_router, seed_entities, EntityStore, InMemoryEntityStore, LaunchMode,
    RegistryResult, RestApiConfig, ServerConfig,
};

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> RegistryResult<()> {
    let config = match ServerConfig::from_env_and_args()? {
        LaunchMode::Serve(config) => config,
        LaunchMode::Help => {
            println!("{}", entity_registry::config::USAGE);
            return Ok(());
        }
    };

    init_tracing(&config.log_level);

    let store: Arc<dyn EntityStore> = if config.seed {
        Arc::new(InMemoryEntityStore::with_entities(seed_entities()))
    } else {
        Arc::new(InMemoryEntityStore::new())
    };

    let api_config = RestApiConfig {
        enable_cors: config.enable_cors,
        ..RestApiConfig::default()
    };
    let app = create_rest_router(Arc::clone(&store), &api_config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.addr,
        entities = store.len()?,
        "entity registry listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(err) = signal::ctrl_c().await {
                error!(error = %err, "failed to listen for shutdown signal");
            }
        })
        .await?;

    info!("shut down");
    Ok(())
}
