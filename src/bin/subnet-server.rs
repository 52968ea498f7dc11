// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subnet Server
//!
//! Serves the subnet create/get/update/delete operations over NATS
//! request/reply, backed by the in-memory subnet store.
//!
//! Run with: cargo run --bin subnet-server
//!
//! Environment:
//! - `NATS_URL` (default: nats://localhost:4222)
//! - `NATS_CLIENT_NAME`, `NATS_CONNECT_TIMEOUT_SECS`, `NATS_REQUEST_TIMEOUT_SECS`
//! - `SUBNET_SUBJECT_ROOT` (default: opi)
//! - `RUST_LOG` for log filtering

use anyhow::{Context, Result};
use cim_subnet::{
    nats::serve, InMemorySubnetService, NatsClient, SubnetRequestHandler, SubnetServerConfig,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting subnet server");

    let config = SubnetServerConfig::from_env().context("Invalid configuration")?;
    info!("Configuration loaded:");
    info!("  - NATS servers: {:?}", config.nats.servers);
    info!("  - Client name: {}", config.nats.name);
    info!("  - Subject root: {}", config.subject_root);

    let client = NatsClient::new(&config.nats)
        .await
        .context("Failed to connect to NATS")?;

    let service = Arc::new(InMemorySubnetService::in_memory());
    let handler = Arc::new(SubnetRequestHandler::new(service, config.subject_root.clone()));
    info!("Serving subnet requests on {}", handler.subscription());

    tokio::select! {
        result = serve(client, handler) => {
            result.context("Subnet request loop failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Subnet server stopped");
    Ok(())
}
