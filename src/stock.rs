//! The stock service: sole authority over beer lifecycle and the quantity
//! invariant.
//!
//! Every mutation is a read-check-write sequence. The bounds check runs in
//! application logic before any persistence write, so an out-of-range request
//! never reaches storage. The connection is the repository capability; callers
//! compose these functions with a pooled connection.

use rusqlite::Connection;

use crate::db::queries;
use crate::error::{AppError, Result};
use crate::models::{Beer, CreateBeer};

/// Register a new beer. Fails with `AlreadyRegistered` if the name is taken.
pub fn create(conn: &Connection, input: &CreateBeer) -> Result<Beer> {
    input.validate()?;

    if queries::get_beer_by_name(conn, &input.name)?.is_some() {
        return Err(AppError::AlreadyRegistered(input.name.clone()));
    }

    let beer = queries::create_beer(conn, input)?;
    tracing::info!("Registered beer {} ({})", beer.name, beer.id);
    Ok(beer)
}

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Beer> {
    queries::get_beer_by_name(conn, name)?
        .ok_or_else(|| AppError::beer_not_found_by_name(name))
}

/// The full catalog, unpaginated. Never fails on an empty store.
pub fn list_all(conn: &Connection) -> Result<Vec<Beer>> {
    queries::list_beers(conn)
}

pub fn list_paginated(conn: &Connection, limit: i64, offset: i64) -> Result<(Vec<Beer>, i64)> {
    queries::list_beers_paginated(conn, limit, offset)
}

pub fn delete_by_id(conn: &Connection, id: &str) -> Result<()> {
    if queries::get_beer_by_id(conn, id)?.is_none() {
        return Err(AppError::beer_not_found_by_id(id));
    }
    queries::delete_beer(conn, id)?;
    tracing::info!("Deleted beer {}", id);
    Ok(())
}

/// Add `amount` to the stock of a beer.
///
/// Fails with `StockExceeded` if the result would pass `max`; landing exactly
/// on `max` succeeds. No mutation happens on failure.
pub fn increment(conn: &Connection, id: &str, amount: i64) -> Result<Beer> {
    let mut beer =
        queries::get_beer_by_id(conn, id)?.ok_or_else(|| AppError::beer_not_found_by_id(id))?;

    let new_quantity = beer.quantity + amount;
    if new_quantity > beer.max {
        return Err(AppError::StockExceeded {
            id: id.to_string(),
            amount,
        });
    }

    queries::set_beer_quantity(conn, id, new_quantity)?;
    beer.quantity = new_quantity;
    Ok(beer)
}

/// Remove `amount` from the stock of a beer.
///
/// Fails with `StockBelowZero` if the result would be negative; draining to
/// exactly 0 succeeds. No mutation happens on failure.
pub fn decrement(conn: &Connection, id: &str, amount: i64) -> Result<Beer> {
    let mut beer =
        queries::get_beer_by_id(conn, id)?.ok_or_else(|| AppError::beer_not_found_by_id(id))?;

    let new_quantity = beer.quantity - amount;
    if new_quantity < 0 {
        return Err(AppError::StockBelowZero {
            id: id.to_string(),
            amount,
        });
    }

    queries::set_beer_quantity(conn, id, new_quantity)?;
    beer.quantity = new_quantity;
    Ok(beer)
}
