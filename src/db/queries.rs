use chrono::Utc;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Beer, CreateBeer};

use super::from_row::{query_all, query_one, BEER_COLS};

fn now() -> i64 {
    Utc::now().timestamp()
}

fn gen_id() -> String {
    Uuid::new_v4().to_string()
}

// ============ Beers ============

pub fn create_beer(conn: &Connection, input: &CreateBeer) -> Result<Beer> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO beers (id, name, brand, style, quantity, max, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            &id,
            &input.name,
            &input.brand,
            input.style.as_str(),
            input.quantity,
            input.max,
            now
        ],
    )?;

    Ok(Beer {
        id,
        name: input.name.clone(),
        brand: input.brand.clone(),
        style: input.style,
        quantity: input.quantity,
        max: input.max,
        created_at: now,
    })
}

pub fn get_beer_by_id(conn: &Connection, id: &str) -> Result<Option<Beer>> {
    query_one(
        conn,
        &format!("SELECT {} FROM beers WHERE id = ?1", BEER_COLS),
        &[&id],
    )
}

pub fn get_beer_by_name(conn: &Connection, name: &str) -> Result<Option<Beer>> {
    query_one(
        conn,
        &format!("SELECT {} FROM beers WHERE name = ?1", BEER_COLS),
        &[&name],
    )
}

pub fn list_beers(conn: &Connection) -> Result<Vec<Beer>> {
    query_all(
        conn,
        &format!("SELECT {} FROM beers ORDER BY created_at DESC", BEER_COLS),
        &[],
    )
}

pub fn list_beers_paginated(
    conn: &Connection,
    limit: i64,
    offset: i64,
) -> Result<(Vec<Beer>, i64)> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM beers", [], |row| row.get(0))?;

    let beers = query_all(
        conn,
        &format!(
            "SELECT {} FROM beers ORDER BY created_at DESC LIMIT ?1 OFFSET ?2",
            BEER_COLS
        ),
        params![limit, offset],
    )?;

    Ok((beers, total))
}

/// Persist a new quantity for a beer. Returns false if the id does not exist.
pub fn set_beer_quantity(conn: &Connection, id: &str, quantity: i64) -> Result<bool> {
    let updated = conn.execute(
        "UPDATE beers SET quantity = ?2 WHERE id = ?1",
        params![id, quantity],
    )?;
    Ok(updated > 0)
}

pub fn delete_beer(conn: &Connection, id: &str) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM beers WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}
