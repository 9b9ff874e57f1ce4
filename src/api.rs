//! # API Server Module
//!
//! ## Purpose
//! REST API server exposing the query responder to web frontends, with
//! health and statistics endpoints for system monitoring.
//!
//! ## Input/Output Specification
//! - **Input**: HTTP requests with legal questions
//! - **Output**: JSON query results, health status, knowledge base statistics
//! - **Endpoints**: Ask, health, stats, index page
//!
//! ## Key Features
//! - Single answer interface shared by every rendering frontend
//! - CORS support for web frontends
//! - Per-request ids in structured logs
//! - Structured error responses

use crate::errors::{QaError, Result};
use crate::responder::QueryResult;
use crate::utils::TextUtils;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Example questions surfaced to frontends, mirroring the quick-pick
/// buttons of the original web interface.
const EXAMPLE_QUERIES: [&str; 5] = [
    "Section 302 IPC punishment",
    "How to file FIR?",
    "Divorce under Hindu Marriage Act",
    "Cheque bounce Section 138",
    "Consumer rights protection",
];

/// API server over the shared application state
pub struct ApiServer {
    app_state: crate::AppState,
}

/// Ask request payload
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub knowledge_base: String,
    pub documents: usize,
}

/// Knowledge base statistics response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub knowledge_base_size: usize,
    pub total_words: usize,
    pub domain: String,
    pub system_version: String,
    pub example_queries: Vec<String>,
}

impl ApiServer {
    /// Create new API server
    pub async fn new(app_state: crate::AppState) -> Result<Self> {
        Ok(Self { app_state })
    }

    /// Run the API server
    pub async fn run(self) -> Result<()> {
        let server_config = self.app_state.config.server.clone();
        let bind_addr = format!("{}:{}", server_config.host, server_config.port);

        tracing::info!("Starting API server on {}", bind_addr);

        let app_state = self.app_state;
        let enable_cors = server_config.enable_cors;

        let server = HttpServer::new(move || {
            let cors = if enable_cors {
                Cors::permissive()
            } else {
                Cors::default()
            };

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(app_state.clone()))
                .route("/ask", web::post().to(ask_handler))
                .route("/health", web::get().to(health_handler))
                .route("/stats", web::get().to(stats_handler))
                .route("/", web::get().to(index_handler))
        })
        .workers(server_config.workers)
        .bind(&bind_addr)
        .map_err(|e| QaError::Internal {
            message: format!("Failed to bind server to {}: {}", bind_addr, e),
        })?
        .run();

        server.await.map_err(|e| QaError::Internal {
            message: format!("Server error: {}", e),
        })?;

        Ok(())
    }
}

/// Ask endpoint handler
async fn ask_handler(
    app_state: web::Data<crate::AppState>,
    request: web::Json<AskRequest>,
) -> ActixResult<HttpResponse> {
    let request_id = Uuid::new_v4();

    tracing::info!(
        %request_id,
        query = %TextUtils::truncate(&request.query, 80),
        "handling ask request"
    );

    let result: QueryResult = app_state.responder.answer(&request.query);

    tracing::info!(
        %request_id,
        confidence = result.confidence,
        grade = %result.quality_grade,
        "ask request answered"
    );

    Ok(HttpResponse::Ok().json(result))
}

/// Health check endpoint handler
async fn health_handler(app_state: web::Data<crate::AppState>) -> ActixResult<HttpResponse> {
    let documents = app_state.store.len();
    let knowledge_base = if documents > 0 { "ready" } else { "empty" };

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: crate::SYSTEM_VERSION.to_string(),
        knowledge_base: knowledge_base.to_string(),
        documents,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Statistics endpoint handler
async fn stats_handler(app_state: web::Data<crate::AppState>) -> ActixResult<HttpResponse> {
    let response = StatsResponse {
        knowledge_base_size: app_state.store.len(),
        total_words: app_state.store.total_words(),
        domain: crate::responder::DOMAIN.to_string(),
        system_version: crate::SYSTEM_VERSION.to_string(),
        example_queries: EXAMPLE_QUERIES.iter().map(|q| q.to_string()).collect(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Index page handler
async fn index_handler() -> ActixResult<HttpResponse> {
    let html = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Legal QA Engine</title>
        <style>
            body { font-family: Arial, sans-serif; margin: 40px; }
            .header { color: #2c3e50; }
            .endpoint { margin: 20px 0; padding: 15px; background: #f8f9fa; border-radius: 5px; }
            .method { font-weight: bold; color: #27ae60; }
        </style>
    </head>
    <body>
        <h1 class="header">Legal QA Engine API</h1>
        <p>Welcome to the Legal QA Engine API. This service answers free-text legal questions from a curated knowledge base.</p>

        <h2>Available Endpoints</h2>

        <div class="endpoint">
            <span class="method">POST</span> /ask
            <p>Answer a legal question and return the structured result.</p>
        </div>

        <div class="endpoint">
            <span class="method">GET</span> /health
            <p>Check the health status of the engine and knowledge base.</p>
        </div>

        <div class="endpoint">
            <span class="method">GET</span> /stats
            <p>Get knowledge base statistics and example queries.</p>
        </div>

        <h2>Example Ask Request</h2>
        <pre>{
  "query": "What is Section 302 IPC and what is the punishment for murder?"
}</pre>
    </body>
    </html>
    "#;

    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
