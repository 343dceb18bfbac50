use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{unknown_card_error, DateRangeQuery, NewTransactionRequest, TransactionListQuery},
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use finboard_core::{analytics::CategoryTotal, transactions::Transaction, Error};

#[utoipa::path(
    get,
    path = "/api/transactions",
    params(TransactionListQuery),
    responses((status = 200, description = "Transactions, newest first"))
)]
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TransactionListQuery>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let limit = query.limit().map_err(Error::from)?;
    let transactions = state.store.list_transactions(limit)?;
    Ok(Json(transactions))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = NewTransactionRequest,
    responses(
        (status = 200, description = "Created transaction"),
        (status = 400, description = "Invalid transaction data"),
    )
)]
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTransactionRequest>,
) -> ApiResult<Json<Transaction>> {
    let new_transaction = payload.validate().map_err(Error::from)?;
    if let Some(card_id) = &new_transaction.card_id {
        if state.store.get_card(card_id)?.is_none() {
            return Err(Error::from(unknown_card_error(card_id)).into());
        }
    }
    let transaction = state.store.create_transaction(new_transaction).await?;
    Ok(Json(transaction))
}

#[utoipa::path(
    get,
    path = "/api/transactions/categories",
    responses((status = 200, description = "Expense totals per category"))
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CategoryTotal>>> {
    let categories = state.store.list_transactions_by_category()?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/transactions/range",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Transactions dated within the range, newest first"),
        (status = 400, description = "Missing or inverted bounds"),
    )
)]
pub async fn list_in_range(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateRangeQuery>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let (start, end) = query.bounds().map_err(Error::from)?;
    let transactions = state.store.list_transactions_by_date_range(start, end)?;
    Ok(Json(transactions))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/transactions/categories", get(list_categories))
        .route("/transactions/range", get(list_in_range))
}
