//! Leaderboard handlers: paged listing and single-entry CRUD

use super::{ApiError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use persistence::repository::{Entry, EntryFields, EntryPage, EntryRepository, LeaderboardQuery};
use std::collections::HashMap;
use tracing::info;

/// Parse the `{id}` path segment
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request(format!("Id value is not an int: {raw:?}")))
}

/// Parse the `page` query parameter; absent means the first page
fn parse_page(params: &HashMap<String, String>) -> Result<i64, ApiError> {
    match params.get("page") {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|page| *page >= 0)
            .ok_or_else(|| {
                ApiError::bad_request(format!(
                    "Page must be a non-negative integer, got {raw:?}"
                ))
            }),
    }
}

/// GET /api/leaderboard?page=N: one ranked page plus `hasMore`
pub(super) async fn api_list_entries(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<EntryPage>, ApiError> {
    let page = parse_page(&params)?;
    let result = LeaderboardQuery::new(state.db.pool()).list_page(page).await?;
    Ok(Json(result))
}

/// GET /api/leaderboard/{id}
pub(super) async fn api_get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_id(&id)?;
    let entry = EntryRepository::new(state.db.pool()).get(id).await?;
    Ok(Json(entry))
}

/// POST /api/leaderboard: storage assigns the id
pub(super) async fn api_create_entry(
    State(state): State<AppState>,
    payload: Result<Json<EntryFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    let Json(fields) = payload?;
    let entry = EntryRepository::new(state.db.pool()).create(fields).await?;

    info!(
        id = entry.id,
        name = %entry.name,
        countries = entry.countries_visited,
        "Leaderboard entry created"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT|PATCH /api/leaderboard/{id}: full replace, addressed by the path id only
pub(super) async fn api_update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EntryFields>, JsonRejection>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_id(&id)?;
    let Json(fields) = payload?;
    let entry = EntryRepository::new(state.db.pool())
        .update(id, fields)
        .await?;

    info!(id, "Leaderboard entry updated");
    Ok(Json(entry))
}

/// DELETE /api/leaderboard/{id}: responds with the removed entry
pub(super) async fn api_delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    let id = parse_id(&id)?;
    let entry = EntryRepository::new(state.db.pool()).delete(id).await?;

    info!(id, "Leaderboard entry deleted");
    Ok(Json(entry))
}
