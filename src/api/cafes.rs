//! JSON endpoints

use axum::Json;
use axum::extract::{Path, Query, State};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::db;
use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// GET /random — a uniformly random cafe, `{"cafe": {...}}`
pub async fn random_cafe(State(state): State<AppState>) -> ApiResult<Value> {
    let cafes = db::cafes::list_all(&state.pool).await?;
    let cafe = cafes
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| ApiError::NotFound("There are no cafes in the database.".into()))?;
    Ok(Json(json!({ "cafe": cafe })))
}

/// GET /all — every cafe, `{"cafe": [{...}, ...]}`
pub async fn all_cafes(State(state): State<AppState>) -> ApiResult<Value> {
    let cafes = db::cafes::list_all(&state.pool).await?;
    Ok(Json(json!({ "cafe": cafes })))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceQuery {
    pub new_price: String,
}

/// PATCH /update_price/{id}?new_price= — overwrite one cafe's coffee price
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<UpdatePriceQuery>,
) -> ApiResult<Value> {
    let updated = db::cafes::update_price(&state.pool, id, &query.new_price).await?;
    if !updated {
        return Err(ApiError::cafe_not_found());
    }
    tracing::info!(cafe_id = id, "coffee price updated");
    Ok(Json(
        json!({ "response": { "success": "Successfully updated the price." } }),
    ))
}
