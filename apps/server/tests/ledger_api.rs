mod common;

use axum::http::{Method, StatusCode};
use common::{build_test_router, get, patch, post, send};
use serde_json::json;

fn expense(amount: &str, category: &str) -> serde_json::Value {
    json!({
        "amount": amount,
        "description": format!("{} purchase", category),
        "category": category,
        "type": "expense",
        "icon": "fas fa-receipt"
    })
}

#[tokio::test]
async fn seeded_store_serves_sample_data() {
    let app = build_test_router(true).await;

    let (_, cards) = get(&app, "/api/cards").await;
    assert_eq!(cards.as_array().unwrap().len(), 3);
    assert_eq!(cards[0]["balance"], "8450.67");

    let (_, txs) = get(&app, "/api/transactions?limit=2").await;
    let txs = txs.as_array().unwrap();
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0]["description"], "Starbucks Coffee");

    let (_, all) = get(&app, "/api/transactions?limit=0").await;
    assert_eq!(all.as_array().unwrap().len(), 5);

    let (_, stock) = get(&app, "/api/stocks/aapl").await;
    assert_eq!(stock["price"], "175.4300");
    assert_eq!(stock["changePercent"], "2.34");

    let (_, history) = get(&app, "/api/portfolio/history").await;
    assert_eq!(history.as_array().unwrap().len(), 14);

    let (_, overview) = get(&app, "/api/analytics/overview").await;
    assert_eq!(overview["totalBalance"], "24580.42");
    assert_eq!(overview["investmentValue"], history[13]["value"]);
}

#[tokio::test]
async fn transaction_date_is_server_stamped() {
    let app = build_test_router(false).await;
    let mut body = expense("-4.95", "Food");
    body["date"] = json!("1999-01-01T00:00:00Z");
    let (status, tx) = post(&app, "/api/transactions", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(tx["cardId"].is_null());
    assert!(!tx["date"].as_str().unwrap().starts_with("1999"));
}

#[tokio::test]
async fn transaction_for_unknown_card_is_rejected() {
    let app = build_test_router(false).await;
    let mut body = expense("-4.95", "Food");
    body["cardId"] = json!("ghost");
    let (status, error) = post(&app, "/api/transactions", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["errors"][0]["field"], "cardId");
}

#[tokio::test]
async fn categories_and_monthly_spending() {
    let app = build_test_router(false).await;
    for (amount, category) in [("-10.00", "Food"), ("-5.50", "Shopping"), ("-2.25", "Food")] {
        post(&app, "/api/transactions", expense(amount, category)).await;
    }

    let (_, categories) = get(&app, "/api/transactions/categories").await;
    assert_eq!(
        categories,
        json!([
            {"category": "Food", "amount": "12.25", "count": 2},
            {"category": "Shopping", "amount": "5.50", "count": 1}
        ])
    );

    let (_, overview) = get(&app, "/api/analytics/overview").await;
    assert_eq!(overview["monthlySpending"], "17.75");
    assert_eq!(overview["monthlyIncome"], "0.00");
    assert_eq!(overview["investmentValue"], "0.00");
}

#[tokio::test]
async fn sub_cent_amounts_are_stored_rounded() {
    let app = build_test_router(false).await;
    for _ in 0..2 {
        let (_, tx) = post(&app, "/api/transactions", expense("-0.005", "Food")).await;
        assert_eq!(tx["amount"], "-0.01");
    }

    let (_, categories) = get(&app, "/api/transactions/categories").await;
    assert_eq!(categories[0]["amount"], "0.02");
    let (_, overview) = get(&app, "/api/analytics/overview").await;
    assert_eq!(overview["monthlySpending"], "0.02");
}

#[tokio::test]
async fn date_range_validation() {
    let app = build_test_router(false).await;
    let (status, _) = get(
        &app,
        "/api/transactions/range?start=2024-06-02T00:00:00Z&end=2024-06-01T00:00:00Z",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/transactions/range?start=2024-06-01T00:00:00Z").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, txs) = get(
        &app,
        "/api/transactions/range?start=2024-06-01T00:00:00Z&end=2024-06-02T00:00:00Z",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(txs, json!([]));
}

#[tokio::test]
async fn stock_upsert_and_refresh() {
    let app = build_test_router(false).await;
    let body = json!({
        "symbol": "nvda",
        "name": "NVIDIA Corp.",
        "price": "900.00",
        "change": "12.50",
        "changePercent": "1.41"
    });
    let (status, first) = post(&app, "/api/stocks", body.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["symbol"], "NVDA");
    assert!(first["marketCap"].is_null());

    let (_, second) = post(&app, "/api/stocks", body).await;
    assert_eq!(second["id"], first["id"]);

    let (status, refreshed) = send(&app, Method::POST, "/api/stocks/update", None).await;
    assert_eq!(status, StatusCode::OK);
    let refreshed = refreshed.as_array().unwrap();
    assert_eq!(refreshed.len(), 1);
    assert_eq!(refreshed[0]["id"], first["id"]);

    let (status, _) = get(&app, "/api/stocks/update").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(get(&app, "/api/stocks/MSFT").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn portfolio_history_appends_and_drives_investment_value() {
    let app = build_test_router(false).await;
    let (status, point) = post(&app, "/api/portfolio/history", json!({"value": 15234.1})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(point["value"], "15234.10");

    let (status, _) = post(&app, "/api/portfolio/history", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, overview) = get(&app, "/api/analytics/overview").await;
    assert_eq!(overview["investmentValue"], "15234.10");
}

#[tokio::test]
async fn monthly_trends_have_twelve_rows() {
    let app = build_test_router(false).await;
    let (status, trends) = get(&app, "/api/analytics/trends").await;
    assert_eq!(status, StatusCode::OK);
    let trends = trends.as_array().unwrap();
    assert_eq!(trends.len(), 12);
    assert_eq!(trends[0]["month"], "Jan");
}

#[tokio::test]
async fn settings_resolve_then_update() {
    let app = build_test_router(false).await;
    let (status, first) = get(&app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["theme"], "light");
    assert_eq!(first["currency"], "USD");
    assert_eq!(first["userId"], "default_user");

    let (_, again) = get(&app, "/api/settings").await;
    assert_eq!(again["id"], first["id"]);

    let (status, updated) = patch(
        &app,
        "/api/settings",
        json!({"theme": "dark", "preferences": {"compact": true}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], first["id"]);
    assert_eq!(updated["theme"], "dark");
    assert_eq!(updated["currency"], "USD");
    assert_eq!(updated["preferences"]["compact"], true);

    let (status, error) = patch(&app, "/api/settings", json!({"theme": "neon"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["errors"][0]["field"], "theme");
}
