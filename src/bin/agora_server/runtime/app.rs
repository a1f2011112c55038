use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tokio::sync::RwLock;

use super::super::handlers_system::healthz;
use super::super::persistence::load_applications_from_disk;
use super::super::routes::api_router;
use super::super::types::AppState;
use super::Args;

pub(super) fn build_state(args: &Args) -> Result<Arc<AppState>> {
    let applications = load_applications_from_disk(&args.data_dir)?;
    tracing::info!(count = applications.len(), "applications loaded");
    Ok(Arc::new(AppState {
        data_dir: args.data_dir.clone(),
        applications: Arc::new(RwLock::new(applications)),
        dev_token: args.dev_token.clone(),
    }))
}

pub(super) fn build_app_router(state: Arc<AppState>) -> Router {
    let api = api_router(state.clone());
    Router::new()
        .route("/healthz", get(healthz))
        .merge(api)
        .with_state(state)
}
