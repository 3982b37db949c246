//! HTTP front end: the upload page and the JSON endpoints it calls.

mod handlers;
mod page;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::diagnosis::Diagnoser;
use crate::gemini::GenerativeModel;

pub struct AppState {
    model: Arc<dyn GenerativeModel>,
    diagnoser: Diagnoser,
}

impl AppState {
    pub fn new(model: Arc<dyn GenerativeModel>, jpeg_quality: u8) -> Self {
        let diagnoser = Diagnoser::new(model.clone(), jpeg_quality);
        Self { model, diagnoser }
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/diagnose", post(handlers::diagnose))
        .route("/api/probe", post(handlers::probe))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(state))
}
