use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use finboard_core::analytics::{AnalyticsOverview, MonthlyTrend};

#[utoipa::path(
    get,
    path = "/api/analytics/overview",
    responses((status = 200, description = "Headline figures"))
)]
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AnalyticsOverview>> {
    let overview = state.store.analytics_overview()?;
    Ok(Json(overview))
}

#[utoipa::path(
    get,
    path = "/api/analytics/trends",
    responses((status = 200, description = "Twelve monthly rows"))
)]
pub async fn get_trends(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<MonthlyTrend>>> {
    let trends = state.store.monthly_trends().await?;
    Ok(Json(trends))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics/overview", get(get_overview))
        .route("/analytics/trends", get(get_trends))
}
