//! HTTP route registration for the agora server.

use super::*;

pub(super) fn api_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/applications",
            get(list_applications).post(save_application),
        )
        .route(
            "/api/applications/:name",
            get(get_application)
                .put(put_application)
                .delete(delete_application),
        )
        .layer(middleware::from_fn_with_state(state, require_bearer))
}
