//! HTTP-level integration tests for the `/clients/` and `/ports/`
//! resources, including the deliberate decision that both require an
//! authenticated principal like every other entity resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, put_json_auth};
use sqlx::PgPool;

fn client_body(company: &str) -> serde_json::Value {
    serde_json::json!({
        "company_name": company,
        "contact_person": "Maria Keller",
        "email": "maria@example.com",
        "phone": "+49 40 555 0100",
        "address": "Hafenstrasse 1, Hamburg",
    })
}

fn port_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "location": "Rotterdam, NL",
        "capacity": 450,
        "contact_email": "ops@portofrotterdam.example",
    })
}

/// Client CRUD round trip with a defaulted registration date.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_client_crud(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "agent@example.com").await;

    let response = post_json_auth(app.clone(), "/clients/", client_body("Baltic Freight AS"), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["company_name"], "Baltic Freight AS");
    assert!(json["registration_date"].is_string()); // defaulted to today
    let id = json["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/clients/{id}/"),
        serde_json::json!({ "contact_person": "Lars Novak" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["contact_person"], "Lars Novak");
    assert_eq!(json["company_name"], "Baltic Freight AS");

    let response = get_auth(app, "/clients/", &token).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

/// Malformed client emails are rejected with a field error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_client_email_validation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "agent@example.com").await;

    let mut body = client_body("Typo Shipping");
    body["email"] = serde_json::json!("not-an-email");

    let response = post_json_auth(app, "/clients/", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["fields"]["email"][0],
        "Enter a valid email address."
    );
}

/// Port CRUD round trip.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_port_crud(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "agent@example.com").await;

    let response = post_json_auth(app.clone(), "/ports/", port_body("Port of Rotterdam"), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/ports/{id}/"),
        serde_json::json!({ "capacity": 500 }),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["capacity"], 500);
    assert_eq!(json["name"], "Port of Rotterdam");

    let response = common::delete_auth(app.clone(), &format!("/ports/{id}/"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/ports/{id}/"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Negative port capacity is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_port_capacity_validation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "agent@example.com").await;

    let mut body = port_body("Port of Nowhere");
    body["capacity"] = serde_json::json!(-10);

    let response = post_json_auth(app, "/ports/", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["fields"]["capacity"][0],
        "Capacity must not be negative."
    );
}

/// Clients and ports enforce authentication on every method, the same as
/// every other entity resource.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_clients_and_ports_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/clients/", client_body("Ghost Freight")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(app.clone(), "/ports/", port_body("Ghost Port")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = common::get(app.clone(), "/clients/").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = common::get(app, "/ports/").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
