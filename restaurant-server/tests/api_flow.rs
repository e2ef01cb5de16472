//! End-to-end HTTP tests through the full router

mod common;

use axum::body::Body;
use common::call;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn signup_and_login(app: &axum::Router) -> String {
    let (status, body) = call(
        app,
        "POST",
        "/signup",
        None,
        Some(json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "password": "cobol-forever",
            "email": "grace@example.com",
            "phone": "555-0142",
            "user_type": "ADMIN"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("password").is_none());

    let (status, body) = call(
        app,
        "POST",
        "/login",
        None,
        Some(json!({ "email": "grace@example.com", "password": "cobol-forever" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "grace@example.com");
    assert_eq!(body["user"]["token"], body["token"]);
    body["token"].as_str().expect("token").to_string()
}

#[tokio::test]
async fn test_health_is_public() {
    let (_, app) = common::test_app().await;
    let (status, body) = call(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let (_, app) = common::test_app().await;
    let (status, body) = call(&app, "GET", "/foods", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);
    assert_eq!(body["error"], "No Authorization Header Provided");
}

#[tokio::test]
async fn test_bad_token_is_rejected() {
    let (_, app) = common::test_app().await;
    let (status, body) = call(&app, "GET", "/menus", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1005);
}

#[tokio::test]
async fn test_responses_carry_request_id_and_cors() {
    let (_, app) = common::test_app().await;
    let request = Request::builder()
        .uri("/health")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("request id header");
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
    assert!(response.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let (_, app) = common::test_app().await;
    let access = signup_and_login(&app).await;
    let (_, login) = call(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({ "email": "grace@example.com", "password": "cobol-forever" })),
    )
    .await;
    let refresh = login["refresh_token"].as_str().expect("refresh token");

    let (status, body) = call(&app, "GET", "/foods", Some(refresh), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1004);

    let (status, _) = call(&app, "GET", "/foods", Some(&access), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let (_, app) = common::test_app().await;
    signup_and_login(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/login",
        None,
        Some(json!({ "email": "grace@example.com", "password": "fortran" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let (_, app) = common::test_app().await;
    signup_and_login(&app).await;

    let (status, body) = call(
        &app,
        "POST",
        "/signup",
        None,
        Some(json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "password": "cobol-forever",
            "email": "grace@example.com",
            "phone": "555-9999"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "this email or phone number already exists");
}

#[tokio::test]
async fn test_validation_and_lookup_errors() {
    let (_, app) = common::test_app().await;
    let token = signup_and_login(&app).await;
    let token = Some(token.as_str());

    let (status, body) = call(
        &app,
        "POST",
        "/tables",
        token,
        Some(json!({ "number_of_guests": 0, "table_number": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let (status, body) = call(
        &app,
        "POST",
        "/menus",
        token,
        Some(json!({ "name": "Late", "category": "Bar", "start_date": 2000, "end_date": 1000 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let (status, body) = call(&app, "GET", "/tables/does-not-exist", token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7001);

    let (status, body) = call(
        &app,
        "POST",
        "/foods",
        token,
        Some(json!({
            "name": "Ghost",
            "price": 1.0,
            "food_image": "/img/ghost.png",
            "menu_id": "missing"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 6);
    assert_eq!(body["error"], "menu not found");
    assert_eq!(body["details"]["resource"], "menu");
}

#[tokio::test]
async fn test_ordering_to_invoice_flow() {
    let (_, app) = common::test_app().await;
    let token = signup_and_login(&app).await;
    let token = Some(token.as_str());

    let (status, table) = call(
        &app,
        "POST",
        "/tables",
        token,
        Some(json!({ "number_of_guests": 4, "table_number": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, menu) = call(
        &app,
        "POST",
        "/menus",
        token,
        Some(json!({ "name": "Dinner", "category": "Mains" })),
    )
    .await;
    let (status, soup) = call(
        &app,
        "POST",
        "/foods",
        token,
        Some(json!({
            "name": "Soup",
            "price": 12.0,
            "food_image": "/img/soup.png",
            "menu_id": menu["menu_id"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, salad) = call(
        &app,
        "POST",
        "/foods",
        token,
        Some(json!({
            "name": "Salad",
            "price": 8.25,
            "food_image": "/img/salad.png",
            "menu_id": menu["menu_id"]
        })),
    )
    .await;

    let (status, items) = call(
        &app,
        "POST",
        "/order-items",
        token,
        Some(json!({
            "table_id": table["table_id"],
            "order_items": [
                { "quantity": "M", "unit_price": 12.00, "food_id": soup["food_id"] },
                { "quantity": "S", "unit_price": 8.25, "food_id": salad["food_id"] }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = items[0]["order_id"].as_str().expect("order id").to_string();

    let (status, billing) = call(
        &app,
        "GET",
        &format!("/order-items/order/{order_id}"),
        token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(billing[0]["payment_due"], 20.25);
    assert_eq!(billing[0]["total_count"], 2);
    assert_eq!(billing[0]["table_number"], 5);

    let (status, invoice) = call(
        &app,
        "POST",
        "/invoices",
        token,
        Some(json!({ "order_id": order_id, "payment_method": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(invoice["payment_status"], "PENDING");
    assert_eq!(invoice["payment_method"], Value::Null);

    let invoice_id = invoice["invoice_id"].as_str().expect("invoice id");
    let (status, view) = call(&app, "GET", &format!("/invoices/{invoice_id}"), token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["payment_due"], 20.25);
    assert_eq!(view["table_number"], 5);
    assert_eq!(view["order_details"].as_array().map(Vec::len), Some(2));

    let (status, paid) = call(
        &app,
        "PATCH",
        &format!("/invoices/{invoice_id}"),
        token,
        Some(json!({ "payment_method": "CARD", "payment_status": "PAID" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paid["payment_status"], "PAID");
    assert_eq!(paid["payment_method"], "CARD");
    assert_eq!(paid["order_id"], order_id);
}

#[tokio::test]
async fn test_invoice_for_order_without_items() {
    let (_, app) = common::test_app().await;
    let token = signup_and_login(&app).await;
    let token = Some(token.as_str());

    let (_, table) = call(
        &app,
        "POST",
        "/tables",
        token,
        Some(json!({ "number_of_guests": 2, "table_number": 8 })),
    )
    .await;
    let (status, order) = call(
        &app,
        "POST",
        "/orders",
        token,
        Some(json!({ "table_id": table["table_id"] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, invoice) = call(
        &app,
        "POST",
        "/invoices",
        token,
        Some(json!({ "order_id": order["order_id"] })),
    )
    .await;
    let invoice_id = invoice["invoice_id"].as_str().expect("invoice id");

    let (status, body) = call(&app, "GET", &format!("/invoices/{invoice_id}"), token, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4003);

    let order_id = order["order_id"].as_str().expect("order id");
    let (status, billing) = call(
        &app,
        "GET",
        &format!("/order-items/order/{order_id}"),
        token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(billing, json!([]));
}
