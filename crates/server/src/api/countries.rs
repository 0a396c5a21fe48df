//! Reference-data handlers. Pure constant lookups, no storage access.

use axum::response::Json;
use std::collections::BTreeMap;

/// GET /api/countries: sorted lower-case names
pub(super) async fn api_countries() -> Json<Vec<String>> {
    Json(reference::country_names())
}

/// GET /api/countries/alternatives: alternative name → canonical name
pub(super) async fn api_alternative_namings() -> Json<BTreeMap<&'static str, &'static str>> {
    Json(reference::alternative_namings())
}

/// GET /api/countries/map: lower-case name → display name
pub(super) async fn api_countries_map() -> Json<BTreeMap<String, &'static str>> {
    Json(reference::country_map())
}

/// GET /api/codes: display name → lower-case ISO code
pub(super) async fn api_codes() -> Json<BTreeMap<&'static str, String>> {
    Json(reference::country_codes())
}
