use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::NewStockRequest,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use finboard_core::{stocks::Stock, Error};

#[utoipa::path(
    get,
    path = "/api/stocks",
    responses((status = 200, description = "Tracked stocks"))
)]
pub async fn list_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Stock>>> {
    let stocks = state.store.list_stocks()?;
    Ok(Json(stocks))
}

#[utoipa::path(
    post,
    path = "/api/stocks",
    request_body = NewStockRequest,
    responses(
        (status = 200, description = "Inserted or updated stock"),
        (status = 400, description = "Invalid stock data"),
    )
)]
pub async fn upsert_stock(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewStockRequest>,
) -> ApiResult<Json<Stock>> {
    let new_stock = payload.validate().map_err(Error::from)?;
    let stock = state.store.upsert_stock(new_stock).await?;
    Ok(Json(stock))
}

#[utoipa::path(
    get,
    path = "/api/stocks/{symbol}",
    params(("symbol" = String, Path, description = "Ticker symbol")),
    responses((status = 200, description = "Stock"), (status = 404, description = "Unknown symbol"))
)]
pub async fn get_stock(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Stock>> {
    let stock = state
        .store
        .get_stock(&symbol.to_ascii_uppercase())?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(stock))
}

#[utoipa::path(
    post,
    path = "/api/stocks/update",
    responses((status = 200, description = "Every stock requoted"))
)]
pub async fn refresh_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Stock>>> {
    let stocks = state.stock_refresh_service.refresh_all().await?;
    tracing::debug!("Refreshed {} stock quotes", stocks.len());
    Ok(Json(stocks))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks", get(list_stocks).post(upsert_stock))
        .route("/stocks/update", get(refresh_stocks).post(refresh_stocks))
        .route("/stocks/{symbol}", get(get_stock))
}
