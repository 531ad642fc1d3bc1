//! API routes for cafe-api

pub mod cafes;
pub mod pages;

use axum::Router;
use axum::routing::{get, patch};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home).post(pages::home_search))
        .route("/random", get(cafes::random_cafe))
        .route("/all", get(cafes::all_cafes))
        .route("/search", get(pages::search).post(pages::search_submit))
        .route("/add", get(pages::add_form).post(pages::add_submit))
        .route("/update_price/{id}", patch(cafes::update_price))
        .route(
            "/report-closed/{id}",
            get(pages::report_closed_gate)
                .post(pages::report_closed)
                .delete(pages::report_closed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
