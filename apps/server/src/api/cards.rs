use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{CardUpdateRequest, NewCardRequest},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use finboard_core::{cards::Card, transactions::Transaction};

#[utoipa::path(
    get,
    path = "/api/cards",
    responses((status = 200, description = "All cards in insertion order"))
)]
pub async fn list_cards(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Card>>> {
    let cards = state.store.list_cards()?;
    Ok(Json(cards))
}

#[utoipa::path(
    post,
    path = "/api/cards",
    request_body = NewCardRequest,
    responses(
        (status = 200, description = "Created card"),
        (status = 400, description = "Invalid card data"),
    )
)]
pub async fn create_card(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCardRequest>,
) -> ApiResult<Json<Card>> {
    let new_card = payload.validate().map_err(finboard_core::Error::from)?;
    let card = state.store.create_card(new_card).await?;
    Ok(Json(card))
}

#[utoipa::path(
    get,
    path = "/api/cards/{id}",
    params(("id" = String, Path, description = "Card id")),
    responses((status = 200, description = "Card"), (status = 404, description = "Unknown card"))
)]
pub async fn get_card(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Card>> {
    let card = state.store.get_card(&id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(card))
}

#[utoipa::path(
    patch,
    path = "/api/cards/{id}",
    params(("id" = String, Path, description = "Card id")),
    request_body = CardUpdateRequest,
    responses(
        (status = 200, description = "Updated card"),
        (status = 404, description = "Unknown card"),
    )
)]
pub async fn update_card(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CardUpdateRequest>,
) -> ApiResult<Json<Card>> {
    let update = payload.validate().map_err(finboard_core::Error::from)?;
    let card = state
        .store
        .update_card(&id, update)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(card))
}

#[utoipa::path(
    delete,
    path = "/api/cards/{id}",
    params(("id" = String, Path, description = "Card id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Unknown card"))
)]
pub async fn delete_card(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    if state.store.delete_card(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[utoipa::path(
    get,
    path = "/api/cards/{id}/transactions",
    params(("id" = String, Path, description = "Card id")),
    responses((status = 200, description = "Transactions charged to the card, newest first"))
)]
pub async fn list_card_transactions(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = state.store.list_transactions_by_card(&id)?;
    Ok(Json(transactions))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cards", get(list_cards).post(create_card))
        .route(
            "/cards/{id}",
            get(get_card).patch(update_card).delete(delete_card),
        )
        .route("/cards/{id}/transactions", get(list_card_transactions))
}
