use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::SettingsUpdateRequest};
use axum::{extract::State, routing::get, Json, Router};
use finboard_core::{settings::UserSettings, Error};

// Reads go through resolve so the defaults record gets a stable id.
#[utoipa::path(
    get,
    path = "/api/settings",
    responses((status = 200, description = "Settings for the default user"))
)]
pub async fn get_settings(State(state): State<Arc<AppState>>) -> ApiResult<Json<UserSettings>> {
    let settings = state.store.resolve_user_settings(&state.default_user).await?;
    Ok(Json(settings))
}

#[utoipa::path(
    patch,
    path = "/api/settings",
    request_body = SettingsUpdateRequest,
    responses(
        (status = 200, description = "Merged settings"),
        (status = 400, description = "Invalid settings data"),
    )
)]
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SettingsUpdateRequest>,
) -> ApiResult<Json<UserSettings>> {
    let update = payload.validate().map_err(Error::from)?;
    let settings = state
        .store
        .update_user_settings(&state.default_user, update)
        .await?;
    Ok(Json(settings))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/settings", get(get_settings).patch(update_settings))
}
