use axum::{extract::State, http::StatusCode};

use crate::db::AppState;
use crate::error::Result;
use crate::extractors::{Json, Path, Query};
use crate::models::{Beer, CreateBeer, QuantityChange};
use crate::pagination::{Paginated, PaginationQuery};
use crate::stock;

pub async fn create_beer(
    State(state): State<AppState>,
    Json(input): Json<CreateBeer>,
) -> Result<(StatusCode, Json<Beer>)> {
    let conn = state.db.get()?;
    let beer = stock::create(&conn, &input)?;
    Ok((StatusCode::CREATED, Json(beer)))
}

pub async fn get_beer_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Beer>> {
    let conn = state.db.get()?;
    let beer = stock::find_by_name(&conn, &name)?;
    Ok(Json(beer))
}

pub async fn list_beers(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<Paginated<Beer>>> {
    let conn = state.db.get()?;
    let limit = pagination.limit();
    let offset = pagination.offset();
    let (beers, total) = stock::list_paginated(&conn, limit, offset)?;
    Ok(Json(Paginated::new(beers, total, limit, offset)))
}

pub async fn delete_beer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let conn = state.db.get()?;
    stock::delete_by_id(&conn, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn increment_beer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<QuantityChange>,
) -> Result<Json<Beer>> {
    input.validate()?;
    let conn = state.db.get()?;
    let beer = stock::increment(&conn, &id, input.quantity)?;
    Ok(Json(beer))
}

pub async fn decrement_beer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<QuantityChange>,
) -> Result<Json<Beer>> {
    input.validate()?;
    let conn = state.db.get()?;
    let beer = stock::decrement(&conn, &id, input.quantity)?;
    Ok(Json(beer))
}
