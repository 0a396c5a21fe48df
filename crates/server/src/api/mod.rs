//! HTTP surface: `/api/leaderboard`, `/api/countries`, `/api/codes`, `/api/health`

mod countries;
mod error;
mod leaderboard;

pub use error::ApiError;

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use persistence::Database;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Process-wide state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db: Arc::new(db),
            started_at: Utc::now(),
        }
    }
}

/// Build the full application router, nested under `/api` with permissive CORS
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api_health))
        .route(
            "/leaderboard",
            get(leaderboard::api_list_entries).post(leaderboard::api_create_entry),
        )
        .route(
            "/leaderboard/:id",
            get(leaderboard::api_get_entry)
                .put(leaderboard::api_update_entry)
                .patch(leaderboard::api_update_entry)
                .delete(leaderboard::api_delete_entry),
        )
        .route("/countries", get(countries::api_countries))
        .route(
            "/countries/alternatives",
            get(countries::api_alternative_namings),
        )
        .route("/countries/map", get(countries::api_countries_map))
        .route("/codes", get(countries::api_codes))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", api_routes).layer(cors)
}

/// GET /api/health
async fn api_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "countries-api",
        "version": crate::APP_VERSION,
        "started_at": state.started_at.to_rfc3339(),
    }))
}
