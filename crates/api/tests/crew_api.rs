//! HTTP-level integration tests for the `/crew/` resource: the
//! one-Captain-per-ship rule, phone uniqueness, and search/ordering.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, patch_json_auth, post_json_auth};
use sqlx::PgPool;

async fn create_ship(app: axum::Router, token: &str, registration: &str) -> i64 {
    let body = serde_json::json!({
        "name": "MV Aurora",
        "registration_number": registration,
        "capacity_in_tonnes": 9000.0,
    });
    let response = post_json_auth(app, "/ships/", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

fn crew_body(first_name: &str, role: &str, phone: &str, ship_id: Option<i64>) -> serde_json::Value {
    serde_json::json!({
        "first_name": first_name,
        "last_name": "Lindqvist",
        "role": role,
        "phone_number": phone,
        "nationality": "Swedish",
        "ship_id": ship_id,
    })
}

/// The Captain scenario: a second Captain on the same ship is rejected until
/// the sitting Captain is reassigned.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_one_captain_per_ship_scenario(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "bosun@example.com").await;
    let ship = create_ship(app.clone(), &token, "IMO-7000001").await;

    // Crew A becomes Captain of S.
    let response = post_json_auth(
        app.clone(),
        "/crew/",
        crew_body("Anna", "Captain", "+46 70 000 0001", Some(ship)),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let captain_a = body_json(response).await["id"].as_i64().unwrap();

    // Crew B as Captain of S is rejected with the exact message.
    let response = post_json_auth(
        app.clone(),
        "/crew/",
        crew_body("Bjorn", "Captain", "+46 70 000 0002", Some(ship)),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "This ship already has a Captain assigned.");
    assert_eq!(json["fields"]["role"][0], "This ship already has a Captain assigned.");

    // Reassign A to Chief Officer.
    let response = patch_json_auth(
        app.clone(),
        &format!("/crew/{captain_a}/"),
        serde_json::json!({ "role": "Chief Officer" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["role"], "Chief Officer");

    // Now B can take the Captain role on S.
    let response = post_json_auth(
        app,
        "/crew/",
        crew_body("Bjorn", "Captain", "+46 70 000 0002", Some(ship)),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// The Captain rule also fires when an update moves or promotes a member
/// onto a ship that already has one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_captain_rule_on_update_uses_effective_values(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "bosun@example.com").await;
    let ship = create_ship(app.clone(), &token, "IMO-7000002").await;

    post_json_auth(
        app.clone(),
        "/crew/",
        crew_body("Anna", "Captain", "+46 70 000 0003", Some(ship)),
        &token,
    )
    .await;

    // A Captain without a ship...
    let response = post_json_auth(
        app.clone(),
        "/crew/",
        crew_body("Carl", "Captain", "+46 70 000 0004", None),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let ashore = body_json(response).await["id"].as_i64().unwrap();

    // ...cannot be assigned to the occupied ship. The submitted ship is
    // combined with the stored role.
    let response = patch_json_auth(
        app,
        &format!("/crew/{ashore}/"),
        serde_json::json!({ "ship_id": ship }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "This ship already has a Captain assigned."
    );
}

/// Phone numbers are unique, but a record may keep its own on update.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_phone_number_uniqueness(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "bosun@example.com").await;

    let response = post_json_auth(
        app.clone(),
        "/crew/",
        crew_body("Anna", "Deckhand", "+46 70 111 2222", None),
        &token,
    )
    .await;
    let anna = body_json(response).await["id"].as_i64().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/crew/",
        crew_body("Bjorn", "Cook", "+46 70 111 2222", None),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Phone number must be unique.");
    assert_eq!(json["fields"]["phone_number"][0], "Phone number must be unique.");

    // Re-submitting a record's own number is not a conflict.
    let response = patch_json_auth(
        app,
        &format!("/crew/{anna}/"),
        serde_json::json!({ "phone_number": "+46 70 111 2222", "nationality": "Finnish" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["nationality"], "Finnish");
}

/// Unknown crew roles are rejected with a field error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_role_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "bosun@example.com").await;

    let response = post_json_auth(
        app,
        "/crew/",
        crew_body("Edvard", "Pirate", "+46 70 000 0005", None),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["fields"]["role"][0],
        "\"Pirate\" is not a valid crew role."
    );
}

/// Crew writes require an authenticated principal.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_crew_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_json(
        app,
        "/crew/",
        crew_body("Anna", "Deckhand", "+46 70 000 0006", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Search spans names, role, and ship name; ordering honours `-` prefixes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_crew_search_and_ordering(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "bosun@example.com").await;
    let ship = create_ship(app.clone(), &token, "IMO-7000003").await;

    for (first, last, role, phone, aboard) in [
        ("Anna", "Abel", "Captain", "+46 70 300 0001", Some(ship)),
        ("Bjorn", "Zetter", "Cook", "+46 70 300 0002", None),
        ("Carl", "Moller", "Deckhand", "+46 70 300 0003", None),
    ] {
        let body = serde_json::json!({
            "first_name": first,
            "last_name": last,
            "role": role,
            "phone_number": phone,
            "nationality": "Swedish",
            "ship_id": aboard,
        });
        let response = post_json_auth(app.clone(), "/crew/", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Ship-name search finds only the crew aboard.
    let response = get_auth(app.clone(), "/crew/?search=aurora", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["first_name"], "Anna");

    // Ascending last-name ordering.
    let response = get_auth(app.clone(), "/crew/?ordering=last_name", &token).await;
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["last_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Abel", "Moller", "Zetter"]);

    // Descending.
    let response = get_auth(app, "/crew/?ordering=-last_name", &token).await;
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["last_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Zetter", "Moller", "Abel"]);
}

/// Delete returns 204 and then 404 on the detail route.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_crew_delete(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "bosun@example.com").await;

    let response = post_json_auth(
        app.clone(),
        "/crew/",
        crew_body("Anna", "Deckhand", "+46 70 400 0001", None),
        &token,
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/crew/{id}/"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/crew/{id}/"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
