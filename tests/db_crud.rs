//! Database CRUD tests for the beers repository, including the storage-layer
//! constraints that back the service-level checks.

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_create_beer_assigns_id_and_timestamp() {
    let conn = setup_test_db();

    let input = CreateBeer {
        name: "Brahma".to_string(),
        brand: "Ambev".to_string(),
        style: BeerStyle::Lager,
        quantity: 10,
        max: 50,
    };
    let beer = queries::create_beer(&conn, &input).expect("Insert failed");

    assert!(!beer.id.is_empty(), "beer should have a generated ID");
    assert!(beer.created_at > 0, "beer should have a creation timestamp");
}

#[test]
fn test_get_beer_by_id() {
    let conn = setup_test_db();
    let created = create_test_beer(&conn, "Brahma");

    let fetched = queries::get_beer_by_id(&conn, &created.id)
        .expect("Query failed")
        .expect("Beer not found");

    assert_eq!(fetched.id, created.id, "fetched ID should match created");
    assert_eq!(fetched.name, created.name, "fetched name should match created");
    assert_eq!(fetched.style, created.style, "fetched style should match created");
}

#[test]
fn test_get_beer_by_unknown_id_returns_none() {
    let conn = setup_test_db();
    create_test_beer(&conn, "Brahma");

    let result = queries::get_beer_by_id(&conn, "no-such-id").expect("Query failed");

    assert!(result.is_none(), "unknown id should return None");
}

#[test]
fn test_get_beer_by_name() {
    let conn = setup_test_db();
    let created = create_test_beer(&conn, "Brahma");

    let fetched = queries::get_beer_by_name(&conn, "Brahma")
        .expect("Query failed")
        .expect("Beer not found");

    assert_eq!(fetched.id, created.id, "fetched ID should match created");
}

#[test]
fn test_list_beers() {
    let conn = setup_test_db();
    create_test_beer(&conn, "Brahma");
    create_test_beer(&conn, "Skol");
    create_test_beer(&conn, "Antarctica");

    let beers = queries::list_beers(&conn).expect("Query failed");

    assert_eq!(beers.len(), 3, "should return all 3 created beers");
}

#[test]
fn test_list_beers_paginated() {
    let conn = setup_test_db();
    for i in 0..5 {
        create_test_beer(&conn, &format!("Beer {}", i));
    }

    let (page, total) = queries::list_beers_paginated(&conn, 2, 0).expect("Query failed");

    assert_eq!(page.len(), 2, "page should be capped at the limit");
    assert_eq!(total, 5, "total should count all rows");

    let (rest, _) = queries::list_beers_paginated(&conn, 10, 4).expect("Query failed");
    assert_eq!(rest.len(), 1, "offset should skip past rows");
}

#[test]
fn test_set_beer_quantity() {
    let conn = setup_test_db();
    let beer = create_test_beer(&conn, "Brahma");

    let updated = queries::set_beer_quantity(&conn, &beer.id, 42).expect("Update failed");
    assert!(updated, "update should report success for an existing row");

    let fetched = queries::get_beer_by_id(&conn, &beer.id)
        .expect("Query failed")
        .expect("Beer not found");
    assert_eq!(fetched.quantity, 42, "quantity should be persisted");
}

#[test]
fn test_set_beer_quantity_unknown_id_returns_false() {
    let conn = setup_test_db();

    let updated = queries::set_beer_quantity(&conn, "no-such-id", 42).expect("Update failed");

    assert!(!updated, "update should report failure for an unknown row");
}

#[test]
fn test_delete_beer() {
    let conn = setup_test_db();
    let beer = create_test_beer(&conn, "Brahma");

    let deleted = queries::delete_beer(&conn, &beer.id).expect("Delete failed");
    assert!(deleted, "delete should report success for an existing row");

    let result = queries::get_beer_by_id(&conn, &beer.id).expect("Query failed");
    assert!(result.is_none(), "beer should be gone after delete");
}

// ============ Storage-layer constraints ============

#[test]
fn test_unique_name_enforced_by_storage() {
    let conn = setup_test_db();
    create_test_beer(&conn, "Brahma");

    // Go under the service, straight at the repository: the UNIQUE
    // constraint must reject the duplicate on its own.
    let input = CreateBeer {
        name: "Brahma".to_string(),
        brand: "Ambev".to_string(),
        style: BeerStyle::Lager,
        quantity: 0,
        max: 50,
    };
    let result = queries::create_beer(&conn, &input);

    assert!(result.is_err(), "storage should reject a duplicate name");
}

#[test]
fn test_quantity_bounds_enforced_by_storage() {
    let conn = setup_test_db();
    let beer = create_test_beer(&conn, "Brahma");

    let above_max = queries::set_beer_quantity(&conn, &beer.id, beer.max + 1);
    assert!(above_max.is_err(), "storage should reject quantity above max");

    let negative = queries::set_beer_quantity(&conn, &beer.id, -1);
    assert!(negative.is_err(), "storage should reject negative quantity");

    let fetched = queries::get_beer_by_id(&conn, &beer.id)
        .expect("Query failed")
        .expect("Beer not found");
    assert_eq!(fetched.quantity, 10, "rejected writes must not change the row");
}
