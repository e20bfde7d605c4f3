//! HTTP server for the car rental desk.
//!
//! ```text
//! car_rental_server --config config/car_rental.toml
//! ```

use anyhow::Context;
use car_rental::api::rest::{AppState, create_router};
use car_rental::application::services::RentalService;
use car_rental::config::AppConfig;
use car_rental::infrastructure::persistence::JsonFileCarRepository;
use car_rental::telemetry;
use clap::Parser;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::Arc;

/// Ages the desk expects to price.
const ADULT_AGES: RangeInclusive<u32> = 18..=100;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "car_rental_server", version, about = "Car rental quoting server")]
struct Args {
    /// Configuration file (TOML, YAML or JSON).
    #[arg(short, long, env = "CAR_RENTAL_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    telemetry::init_tracing(&config.logging)?;

    let cars = JsonFileCarRepository::new(&config.store.cars_file);
    let service = RentalService::new(
        Arc::new(cars),
        config.pricing.tax_brackets.clone(),
        config.pricing.format(),
    );
    if let Err(e) = service.tax_table().ensure_covers(ADULT_AGES) {
        tracing::warn!(error = %e, "tax table leaves adult ages unpriced");
    }
    tracing::info!(
        cars_file = %config.store.cars_file.display(),
        format = %service.format(),
        brackets = service.tax_table().brackets().len(),
        selector = service.selector_name(),
        "rental service ready"
    );

    let router = create_router(AppState::new(Arc::new(service)));
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    tracing::info!(%address, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
