use agora::validate;

use super::*;

/// Stored form of an application: ports and env sorted by key, component order kept.
pub(crate) fn canonicalize(mut app: Application) -> Application {
    for component in app.components.values_mut() {
        component.ports.sort_keys();
        component.env.sort_keys();
    }
    app
}

pub(crate) async fn list_applications(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<Application>> {
    let apps = state.applications.read().await;
    Json(apps.values().cloned().collect())
}

pub(crate) async fn get_application(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Application>, Response> {
    let apps = state.applications.read().await;
    let app = apps.get(&name).ok_or_else(not_found)?;
    Ok(Json(app.clone()))
}

pub(crate) async fn save_application(
    State(state): State<Arc<AppState>>,
    Json(app): Json<Application>,
) -> Result<Json<Application>, Response> {
    store_application(&state, app).await.map(Json)
}

pub(crate) async fn put_application(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(app): Json<Application>,
) -> Result<Json<Application>, Response> {
    if app.name != name {
        return Err(bad_request(anyhow::anyhow!(
            "body name '{}' does not match path name '{}'",
            app.name,
            name
        )));
    }
    store_application(&state, app).await.map(Json)
}

pub(crate) async fn delete_application(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<StatusCode, Response> {
    let mut apps = state.applications.write().await;
    if !apps.contains_key(&name) {
        return Err(not_found());
    }

    let mut next = apps.clone();
    next.shift_remove(&name);
    persist_applications(state.as_ref(), &next).map_err(internal_error)?;
    *apps = next;

    tracing::info!(application = %name, "application removed");
    Ok(StatusCode::NO_CONTENT)
}

async fn store_application(state: &AppState, app: Application) -> Result<Application, Response> {
    let issues = validate::application(&app);
    if !issues.is_empty() {
        tracing::debug!(application = %app.name, issues = issues.len(), "rejecting invalid application");
        return Err(invalid_application(issues));
    }
    let app = canonicalize(app);

    let mut apps = state.applications.write().await;
    let mut next = apps.clone();
    let created = next.insert(app.name.clone(), app.clone()).is_none();
    persist_applications(state, &next).map_err(internal_error)?;
    *apps = next;

    tracing::info!(application = %app.name, created, "application stored");
    Ok(app)
}

#[cfg(test)]
#[path = "../../tests/bin/agora_server/handlers_applications_tests.rs"]
mod tests;
