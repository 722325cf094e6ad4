//! farepath cheapest-route HTTP service.
//!
//! # Endpoints
//!
//! - `GET /best-route?origin=GRU&destination=CDG` - cheapest route as text
//! - `POST /register` - register an edge (`{"origin","destination","cost"}`)
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live`, `GET /health/ready` - probes
//!
//! # Configuration
//!
//! - `FAREPATH_EDGES_PATH` - edge-list file to load and append to (default: `routes.csv`)
//! - `SERVICE_HOST` - bind address (default: `127.0.0.1`)
//! - `SERVICE_PORT` - HTTP port (default: 5000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` - set to `false` to disable metrics

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use tracing::{error, info, warn};

use farepath_service_shared::{
    init_logging, init_metrics, router, AppState, LoggingConfig, MetricsConfig,
};

const DEFAULT_EDGES_PATH: &str = "routes.csv";
const DEFAULT_PORT: u16 = 5000;

/// Settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
struct ServiceConfig {
    edges_path: PathBuf,
    host: IpAddr,
    port: u16,
}

impl ServiceConfig {
    fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let edges_path = lookup("FAREPATH_EDGES_PATH")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_EDGES_PATH.to_string())
            .into();
        let host = lookup("SERVICE_HOST")
            .and_then(|h| h.parse().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port = lookup("SERVICE_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            edges_path,
            host,
            port,
        }
    }

    fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("farepath");
    init_logging(&logging_config);

    if let Err(e) = init_metrics(&MetricsConfig::from_env()) {
        warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ServiceConfig::from_env();
    info!(
        edges_path = %config.edges_path.display(),
        addr = %config.addr(),
        "starting farepath service"
    );

    let state = AppState::load(&config.edges_path).map_err(|e| {
        error!(error = %e, path = %config.edges_path.display(), "failed to load application state");
        e
    })?;

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!(addr = %config.addr(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("farepath service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
