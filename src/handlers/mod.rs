mod beers;

pub use beers::*;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::db::AppState;

// The `{key}` segment is the beer name for the lookup route and the beer id
// for delete/increment/decrement, matching the service operations.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/beers", post(create_beer))
        .route("/api/v1/beers", get(list_beers))
        .route("/api/v1/beers/{key}", get(get_beer_by_name))
        .route("/api/v1/beers/{key}", delete(delete_beer))
        .route("/api/v1/beers/{key}/increment", patch(increment_beer))
        .route("/api/v1/beers/{key}/decrement", patch(decrement_beer))
}
