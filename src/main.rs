//! # Legal QA Engine Main Driver
//!
//! ## Purpose
//! Main entry point for the legal QA server. Orchestrates initialization of
//! all system components and starts the web server for handling questions.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files, command line arguments, environment variables
//! - **Output**: Running web server with question-answering endpoints
//! - **Initialization**: Loads knowledge base, starts API server
//!
//! ## Architecture Flow
//! 1. Parse command line arguments and load configuration
//! 2. Initialize logging and tracing
//! 3. Load the knowledge base (built-in fallback on failure)
//! 4. Initialize the query responder
//! 5. Answer a one-shot query, or start the web API server
//! 6. Handle shutdown signals gracefully

use clap::{Arg, Command};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use legal_qa_engine::{
    api::ApiServer,
    config::Config,
    errors::{QaError, Result},
    knowledge::KnowledgeStore,
    responder::QueryResponder,
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("legal-qa-server")
        .version("2.0")
        .author("Legal QA Team")
        .about("Keyword-overlap legal question answering engine with a REST API")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Server port")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("knowledge-base")
                .short('k')
                .long("knowledge-base")
                .value_name("FILE")
                .help("Knowledge base JSON file path"),
        )
        .arg(
            Arg::new("ask")
                .long("ask")
                .value_name("QUERY")
                .help("Answer a single question, print the result as JSON, and exit"),
        )
        .arg(
            Arg::new("check-health")
                .long("check-health")
                .help("Run health checks and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Load configuration
    let config_path = matches.get_one::<String>("config").unwrap();
    let mut config = Config::from_file(config_path)?;

    // Apply CLI overrides
    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }
    if let Some(kb_path) = matches.get_one::<String>("knowledge-base") {
        config.knowledge.path = PathBuf::from(kb_path);
    }

    let config = Arc::new(config);

    // Initialize logging
    init_logging(&config)?;

    info!("Starting Legal QA Engine v{}", legal_qa_engine::SYSTEM_VERSION);
    info!("Configuration loaded from: {}", config_path);

    // Run health checks if requested
    if matches.get_flag("check-health") {
        return run_health_checks(&config);
    }

    // Initialize application components
    let app_state = initialize_components(config.clone());

    // One-shot query mode
    if let Some(query) = matches.get_one::<String>("ask") {
        let result = app_state.responder.answer(query);
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    // Start the API server
    let server = ApiServer::new(app_state).await?;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run().await {
            error!(category = e.category(), "Server error: {}", e);
        }
    });

    info!(
        "Legal QA Engine started successfully on {}:{}",
        config.server.host, config.server.port
    );

    // Wait for shutdown signal
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = server_handle => {
            warn!("Server stopped unexpectedly");
        }
    }

    info!("Legal QA Engine shut down successfully");

    Ok(())
}

/// Initialize logging and tracing
fn init_logging(config: &Config) -> Result<()> {
    let log_level: tracing::Level = config.logging.level.parse().map_err(|_| QaError::Config {
        message: format!("Invalid log level: {}", config.logging.level),
    })?;
    let filter = tracing_subscriber::filter::LevelFilter::from_level(log_level);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(fmt_layer.json().with_filter(filter))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt_layer.with_filter(filter))
            .init();
    }

    info!("Logging initialized with level: {}", config.logging.level);
    Ok(())
}

/// Initialize all application components
fn initialize_components(config: Arc<Config>) -> AppState {
    info!("Initializing application components...");

    let store = Arc::new(KnowledgeStore::load(&config.knowledge.path));
    let responder = Arc::new(QueryResponder::new(store.clone(), &config.responder));

    info!("All components initialized successfully");

    AppState {
        config,
        store,
        responder,
    }
}

/// Run health checks against the configuration
fn run_health_checks(config: &Config) -> Result<()> {
    info!("Running health checks...");

    info!("✓ Configuration is valid");

    if config.knowledge.path.exists() {
        info!("✓ Knowledge base file exists: {:?}", config.knowledge.path);
    } else {
        warn!(
            "Knowledge base file missing: {:?} (built-in documents will be used)",
            config.knowledge.path
        );
    }

    let store = KnowledgeStore::load(&config.knowledge.path);
    if store.is_empty() {
        warn!("Knowledge base is empty; every query will take the fallback path");
    } else {
        info!("✓ Knowledge base ready with {} documents", store.len());
    }

    info!("All health checks passed!");
    Ok(())
}
