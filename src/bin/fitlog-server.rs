// ABOUTME: Server binary for the fitlog fitness tracking backend
// ABOUTME: Loads configuration, initializes storage and logging, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

//! # Fitlog Server Binary
//!
//! Starts the fitlog REST API with environment-driven configuration. Startup
//! faults (unparseable configuration, unreachable storage) are fatal; once
//! serving, no single request failure terminates the process.

use anyhow::Result;
use clap::Parser;
use fitlog::{
    config::environment::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    server::{HttpServer, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitlog-server")]
#[command(about = "Fitlog - personal fitness tracking REST API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url);
    }

    logging::init_from_env()?;

    info!("Starting Fitlog API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized: {}", config.database.url);

    let resources = Arc::new(ServerResources::new(database, config.clone()));
    let server = HttpServer::new(resources);

    display_available_endpoints(&config);

    info!("Ready to serve fitness data!");

    if let Err(e) = server.run(config.http_port).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    for resource in ["exercises", "meals", "weights"] {
        info!("{resource}:");
        info!("   Create:  POST   http://{host}:{port}/{resource}");
        info!("   List:    GET    http://{host}:{port}/{resource}");
        info!("   Get:     GET    http://{host}:{port}/{resource}/{{id}}");
        info!("   Update:  PUT    http://{host}:{port}/{resource}/{{id}}");
        info!("   Delete:  DELETE http://{host}:{port}/{resource}/{{id}}");
    }
    info!("Monitoring:");
    info!("   Health Check: GET http://{host}:{port}/health");
    info!("Static assets:  GET http://{host}:{port}/static/");
    info!("=== End of Endpoint List ===");
}
