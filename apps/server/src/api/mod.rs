use std::sync::Arc;

use crate::{config::Config, main_lib::AppState, models};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod analytics;
pub mod cards;
pub mod portfolio;
pub mod settings;
pub mod stocks;
pub mod transactions;

#[utoipa::path(get, path = "/api/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        cards::list_cards,
        cards::create_card,
        cards::get_card,
        cards::update_card,
        cards::delete_card,
        cards::list_card_transactions,
        transactions::list_transactions,
        transactions::create_transaction,
        transactions::list_categories,
        transactions::list_in_range,
        stocks::list_stocks,
        stocks::upsert_stock,
        stocks::get_stock,
        stocks::refresh_stocks,
        portfolio::get_history,
        portfolio::add_value,
        analytics::get_overview,
        analytics::get_trends,
        settings::get_settings,
        settings::update_settings,
    ),
    components(schemas(
        models::NewCardRequest,
        models::CardUpdateRequest,
        models::NewTransactionRequest,
        models::NewStockRequest,
        models::NewPortfolioValueRequest,
        models::SettingsUpdateRequest,
    )),
    tags((name = "finboard"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(cards::router())
        .merge(transactions::router())
        .merge(stocks::router())
        .merge(portfolio::router())
        .merge(analytics::router())
        .merge(settings::router());

    Router::new()
        .nest("/api", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
