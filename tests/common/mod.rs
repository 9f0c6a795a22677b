//! Test utilities and fixtures for beerstock integration tests

#![allow(dead_code)]

use axum::Router;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

pub use beerstock::db::{init_db, queries, AppState};
pub use beerstock::models::*;
pub use beerstock::stock;

/// Create an in-memory test database with schema initialized
pub fn setup_test_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    init_db(&conn).expect("Failed to initialize schema");
    conn
}

/// Create a test beer with the default fixture values (quantity 10, max 50)
pub fn create_test_beer(conn: &Connection, name: &str) -> Beer {
    create_test_beer_with_stock(conn, name, 10, 50)
}

/// Create a test beer with explicit quantity/max
pub fn create_test_beer_with_stock(
    conn: &Connection,
    name: &str,
    quantity: i64,
    max: i64,
) -> Beer {
    let input = CreateBeer {
        name: name.to_string(),
        brand: "Ambev".to_string(),
        style: BeerStyle::Lager,
        quantity,
        max,
    };
    stock::create(conn, &input).expect("Failed to create test beer")
}

/// Create an AppState for testing with an in-memory database.
///
/// The pool is capped at a single connection so every request sees the same
/// in-memory database.
pub fn create_test_app_state() -> AppState {
    let manager = SqliteConnectionManager::memory();
    let pool = Pool::builder().max_size(1).build(manager).unwrap();
    {
        let conn = pool.get().unwrap();
        init_db(&conn).unwrap();
    }

    AppState { db: pool }
}

/// Create a Router with all beer endpoints
pub fn beer_app() -> (Router, AppState) {
    let state = create_test_app_state();
    let app = Router::new()
        .merge(beerstock::handlers::router())
        .with_state(state.clone());
    (app, state)
}
