//! Integration tests for the crew invariants at the store level: the
//! constraints that back the validation-layer checks so concurrent writers
//! cannot race past them.

use sqlx::PgPool;

use harborline_db::models::crew::{CreateCrew, UpdateCrew};
use harborline_db::models::ship::CreateShip;
use harborline_db::repositories::{CrewRepo, ShipRepo};

fn new_ship(registration: &str) -> CreateShip {
    CreateShip {
        name: "MV Aurora".to_string(),
        registration_number: registration.to_string(),
        capacity_in_tonnes: 9_000.0,
        ship_type: None,
        status: None,
        is_active: None,
    }
}

fn new_crew(role: &str, phone: &str, ship_id: Option<i64>) -> CreateCrew {
    CreateCrew {
        first_name: "Astrid".to_string(),
        last_name: "Holm".to_string(),
        role: role.to_string(),
        phone_number: phone.to_string(),
        nationality: "Danish".to_string(),
        ship_id,
        is_active: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_phone_number_unique_constraint(pool: PgPool) {
    CrewRepo::create(&pool, &new_crew("Deckhand", "+45 20 11 22 33", None))
        .await
        .unwrap();

    let err = CrewRepo::create(&pool, &new_crew("Cook", "+45 20 11 22 33", None))
        .await
        .unwrap_err();
    let sqlx::Error::Database(db_err) = err else {
        panic!("expected a database error");
    };
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_crew_phone_number"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_one_captain_per_ship_constraint(pool: PgPool) {
    let ship = ShipRepo::create(&pool, &new_ship("IMO-5555551")).await.unwrap();

    CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 01", Some(ship.id)))
        .await
        .unwrap();

    // A second Captain on the same ship violates the partial unique index.
    let err = CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 02", Some(ship.id)))
        .await
        .unwrap_err();
    let sqlx::Error::Database(db_err) = err else {
        panic!("expected a database error");
    };
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_crew_captain_per_ship"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_captains_allowed_on_different_ships_and_ashore(pool: PgPool) {
    let ship_a = ShipRepo::create(&pool, &new_ship("IMO-5555552")).await.unwrap();
    let ship_b = ShipRepo::create(&pool, &new_ship("IMO-5555553")).await.unwrap();

    CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 03", Some(ship_a.id)))
        .await
        .unwrap();
    // Different ship: fine.
    CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 04", Some(ship_b.id)))
        .await
        .unwrap();
    // Unassigned Captains do not collide (the index skips NULL ship_id).
    CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 05", None))
        .await
        .unwrap();
    CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 06", None))
        .await
        .unwrap();
    // Non-Captain roles can repeat on one ship.
    CrewRepo::create(&pool, &new_crew("Deckhand", "+45 20 00 00 07", Some(ship_a.id)))
        .await
        .unwrap();
    CrewRepo::create(&pool, &new_crew("Deckhand", "+45 20 00 00 08", Some(ship_a.id)))
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_captain_reassignment_frees_the_ship(pool: PgPool) {
    let ship = ShipRepo::create(&pool, &new_ship("IMO-5555554")).await.unwrap();

    let captain = CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 09", Some(ship.id)))
        .await
        .unwrap();

    // Reassign the sitting Captain to Chief Officer.
    let update = UpdateCrew {
        first_name: None,
        last_name: None,
        role: Some("Chief Officer".to_string()),
        phone_number: None,
        nationality: None,
        ship_id: None,
        is_active: None,
    };
    CrewRepo::update(&pool, captain.id, &update).await.unwrap().unwrap();

    // The ship can take a new Captain now.
    CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 10", Some(ship.id)))
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_uniqueness_probes_exclude_the_row_under_update(pool: PgPool) {
    let ship = ShipRepo::create(&pool, &new_ship("IMO-5555555")).await.unwrap();
    let captain = CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 11", Some(ship.id)))
        .await
        .unwrap();

    assert!(CrewRepo::phone_exists(&pool, "+45 20 00 00 11", None).await.unwrap());
    assert!(!CrewRepo::phone_exists(&pool, "+45 20 00 00 11", Some(captain.id))
        .await
        .unwrap());

    assert!(CrewRepo::captain_exists_for_ship(&pool, ship.id, None).await.unwrap());
    // Updating the sitting Captain must not collide with itself.
    assert!(!CrewRepo::captain_exists_for_ship(&pool, ship.id, Some(captain.id))
        .await
        .unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_crew_search_by_ship_name(pool: PgPool) {
    let ship = ShipRepo::create(&pool, &new_ship("IMO-5555556")).await.unwrap();
    CrewRepo::create(&pool, &new_crew("Captain", "+45 20 00 00 12", Some(ship.id)))
        .await
        .unwrap();
    CrewRepo::create(&pool, &new_crew("Cook", "+45 20 00 00 13", None))
        .await
        .unwrap();

    // Matches via the joined ship name.
    let hits = CrewRepo::list(&pool, Some("aurora"), None, None, None).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].role, "Captain");

    // Matches via the role column.
    let hits = CrewRepo::list(&pool, Some("cook"), None, None, None).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].ship_id, None);
}
