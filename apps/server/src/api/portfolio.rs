use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::NewPortfolioValueRequest};
use axum::{extract::State, routing::get, Json, Router};
use finboard_core::{portfolio::PortfolioValue, Error};

#[utoipa::path(
    get,
    path = "/api/portfolio/history",
    responses((status = 200, description = "Snapshots, oldest first"))
)]
pub async fn get_history(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PortfolioValue>>> {
    let history = state.store.list_portfolio_history()?;
    Ok(Json(history))
}

#[utoipa::path(
    post,
    path = "/api/portfolio/history",
    request_body = NewPortfolioValueRequest,
    responses((status = 200, description = "Recorded snapshot"))
)]
pub async fn add_value(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewPortfolioValueRequest>,
) -> ApiResult<Json<PortfolioValue>> {
    let new_value = payload.validate().map_err(Error::from)?;
    let value = state.store.add_portfolio_value(new_value).await?;
    Ok(Json(value))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio/history", get(get_history).post(add_value))
}
