//! Salary calculator HTTP service.
//!
//! Reads configuration from the directory named by `SALARY_CONFIG_DIR`
//! (default `./config/default`). `SALARY_BIND_ADDR` overrides the configured
//! bind address and `RUST_LOG` the log filter.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use salary_calculator::api::{AppState, create_router};
use salary_calculator::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("salary_calculator=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    let config_dir =
        std::env::var("SALARY_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

    let mut config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    if let Ok(bind_address) = std::env::var("SALARY_BIND_ADDR") {
        config = config.with_bind_address(bind_address);
    }

    let service_name = config.server().name.clone();
    let bind_address = config.server().bind_address.clone();

    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_address = %bind_address, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(service = %service_name, bind_address = %bind_address, "Server listening");

    let router = create_router(AppState::new(config));
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
