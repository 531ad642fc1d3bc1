//! Browser-facing handlers
//!
//! These render HTML. Validation always runs before any store mutation:
//! a failed form re-renders its page with the field errors and nothing is
//! persisted.

use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use validator::Validate;

use crate::db;
use crate::error::ApiError;
use crate::forms::{AddCafeForm, PasswordForm, PlaceQuery, SearchForm, SearchQuery, error_messages};
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn home() -> Html<String> {
    Html(views::search_page(&[]))
}

/// POST / — search form submission from the landing page
pub async fn home_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, ApiError> {
    if let Err(errors) = form.validate() {
        return Ok(Html(views::search_page(&error_messages(&errors))));
    }
    render_search(&state, &form.loc).await
}

/// GET /search?loc=
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, ApiError> {
    render_search(&state, &query.loc).await
}

/// POST /search
pub async fn search_submit(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, ApiError> {
    if let Err(errors) = form.validate() {
        return Ok(Html(views::search_page(&error_messages(&errors))));
    }
    render_search(&state, &form.loc).await
}

/// Shared search rendering: matches become a card list, zero matches always
/// render the not-found page (never an empty success list).
async fn render_search(state: &AppState, location: &str) -> Result<Html<String>, ApiError> {
    let cafes = db::cafes::fetch_by_location(&state.pool, location).await?;
    if cafes.is_empty() {
        Ok(Html(views::not_found_page(location)))
    } else {
        Ok(Html(views::cafe_cards(location, &cafes)))
    }
}

/// GET /add?place= — the location is carried in the `place` query parameter
/// (pre-filled by the page the user navigated from), not the form body
pub async fn add_form(Query(query): Query<PlaceQuery>) -> Html<String> {
    Html(views::add_cafe_page(&query.place, &[]))
}

/// POST /add?place=
pub async fn add_submit(
    State(state): State<AppState>,
    Query(query): Query<PlaceQuery>,
    Form(form): Form<AddCafeForm>,
) -> Result<Html<String>, ApiError> {
    // Validate before constructing or persisting anything
    let mut errors = match form.validate() {
        Ok(()) => Vec::new(),
        Err(e) => error_messages(&e),
    };
    if query.place.is_empty() {
        errors.push("Location is required (place query parameter)".into());
    }
    if !errors.is_empty() {
        return Ok(Html(views::add_cafe_page(&query.place, &errors)));
    }

    let new_cafe = form.into_new_cafe(query.place);
    let cafe = db::cafes::insert(&state.pool, &new_cafe).await?;
    tracing::info!(cafe_id = cafe.id, name = %cafe.name, "cafe added");

    render_search(&state, &cafe.location).await
}

/// GET /report-closed/{id}
pub async fn report_closed_gate(Path(id): Path<i64>) -> Html<String> {
    Html(views::password_gate_page(id))
}

/// POST/DELETE /report-closed/{id}
///
/// Wrong or missing password re-renders the gate with no distinguishable
/// error signal; the caller can retry indefinitely. A correct password with
/// an unknown id is a terminal 404.
pub async fn report_closed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<PasswordForm>,
) -> Result<Response, ApiError> {
    if form.validate().is_err() || !state.verifier.verify(&form.password) {
        tracing::warn!(cafe_id = id, "report-closed rejected: wrong password");
        return Ok(Html(views::password_gate_page(id)).into_response());
    }

    let Some(cafe) = db::cafes::fetch_by_id(&state.pool, id).await? else {
        return Err(ApiError::cafe_not_found());
    };

    let former_location = cafe.location.clone();
    db::cafes::delete(&state.pool, id).await?;
    tracing::info!(cafe_id = id, name = %cafe.name, "cafe deleted");

    Ok(render_search(&state, &former_location).await?.into_response())
}
