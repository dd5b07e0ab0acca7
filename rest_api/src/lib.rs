// rest_api/src/lib.rs

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use anyhow::Context;
use lib::{RecordStore, StorageError};
use models::{validate, HealthRecord, PatientId, ValidationError};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

mod config;
pub use crate::config::{
    load_rest_api_config, load_rest_api_config_with_env, EnvVars, RestApiConfig, DEFAULT_REST_API_HOST, DEFAULT_REST_API_PORT,
    REST_API_ENV_PREFIX,
};

// Define the REST API error enum
#[derive(Debug, Error)]
pub enum RestApiError {
    #[error("Invalid record: {0}")]
    Validation(#[from] ValidationError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RestApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestApiError::Validation(_) | RestApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RestApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Implement IntoResponse for RestApiError to convert it into an HTTP response
impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (self.status_code(), body).into_response()
    }
}

// Shared state for the Axum application
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
}

#[derive(Debug, Deserialize)]
struct RecordQuery {
    patient_id: Option<String>,
}

// Handler for POST /health-records
async fn create_record_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<HealthRecord>), RestApiError> {
    let Json(payload) = payload.map_err(|e| RestApiError::InvalidInput(e.body_text()))?;

    let record = validate(payload).inspect_err(|e| warn!("Rejected health record: {}", e))?;
    let stored = state.store.insert(record).await?;
    info!(
        "Stored {} record for patient {}",
        stored.record_type(),
        stored.patient_id()
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

// Handler for GET /health-records?patient_id=<id>
async fn list_records_handler(
    State(state): State<AppState>,
    params: Result<Query<RecordQuery>, QueryRejection>,
) -> Result<Json<Vec<HealthRecord>>, RestApiError> {
    let Query(params) = params.map_err(|e| RestApiError::InvalidInput(e.body_text()))?;
    let patient_id = params
        .patient_id
        .map(PatientId::from)
        .ok_or_else(|| RestApiError::InvalidInput("patient_id query parameter is required".to_string()))?;

    debug!("Listing records for patient {}", patient_id);
    let records = state.store.query(&patient_id).await?;
    Ok(Json(records))
}

// Handler for DELETE /health-records/{patient_id}
async fn delete_records_handler(
    State(state): State<AppState>,
    patient_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, RestApiError> {
    let Path(patient_id) = patient_id.map_err(|e| RestApiError::InvalidInput(e.body_text()))?;
    let patient_id = PatientId::from(patient_id);
    let deleted = state.store.delete_all(&patient_id).await?;
    info!("Deleted {} record(s) for patient {}", deleted, patient_id);
    Ok(Json(json!({
        "status": "success",
        "patient_id": patient_id,
        "deleted": deleted,
    })))
}

// Handler for the /health endpoint
async fn health_check_handler(State(state): State<AppState>) -> Result<Json<Value>, RestApiError> {
    Ok(Json(json!({
        "status": "ok",
        "storage": state.store.get_type(),
        "patients": state.store.patient_count().await?,
        "records": state.store.record_count().await?,
    })))
}

// Handler for the /version endpoint
async fn version_handler() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "version": env!("CARGO_PKG_VERSION") })))
}

/// Builds the application router around an injected record store.
pub fn router(store: Arc<dyn RecordStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(Any);

    Router::new()
        .route(
            "/health-records",
            get(list_records_handler).post(create_record_handler),
        )
        .route("/health-records/:patient_id", delete(delete_records_handler))
        .route("/health", get(health_check_handler))
        .route("/version", get(version_handler))
        .with_state(AppState { store })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// A running REST API server.
///
/// The listener is bound before this handle exists, so requests can be sent
/// to [`RestApiServer::local_addr`] as soon as `start_server` returns.
/// Dropping the handle also shuts the server down.
pub struct RestApiServer {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<std::io::Result<()>>,
}

impl RestApiServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stops accepting connections, lets in-flight requests finish and waits
    /// for the serving task to exit.
    pub async fn shutdown(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let local_addr = self.local_addr;
        self.task
            .await
            .context("REST API server task panicked")?
            .context("REST API server failed while running")?;
        info!("REST API server on {} stopped.", local_addr);
        Ok(())
    }
}

// Starts the REST API server and returns once it is accepting connections
pub async fn start_server(
    config: &RestApiConfig,
    store: Arc<dyn RecordStore>,
) -> anyhow::Result<RestApiServer> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind to address: {}:{}", config.host, config.port))?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read bound address")?;

    let app = router(store);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(async move {
                // A dropped sender counts as a shutdown request too.
                let _ = shutdown_rx.await;
            })
            .await
    });

    info!("REST API server listening on {}", local_addr);
    Ok(RestApiServer {
        local_addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
