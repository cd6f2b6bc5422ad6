//! Statistics endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

/// Catalog statistics
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Copies on the shelf across all titles
    pub total_copies: u64,
    /// Tracked titles, including those with no copy on the shelf
    pub titles: usize,
    /// Registered users
    pub users: usize,
}

/// Get catalog statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Catalog statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let totals = state.services.catalog.totals()?;

    Ok(Json(StatsResponse {
        total_copies: totals.total_copies,
        titles: totals.titles,
        users: totals.users,
    }))
}
