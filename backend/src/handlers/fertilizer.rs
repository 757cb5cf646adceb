//! HTTP handlers for fertilizer endpoints

use axum::{extract::State, Json};
use shared::FertilizerRequirement;

use crate::error::AppResult;
use crate::services::fertilizer::{FertilizerScheduleInput, FertilizerService};
use crate::AppState;

/// Fertilizer schedule, or the completed window
pub async fn fertilizer_schedule(
    State(state): State<AppState>,
    Json(input): Json<FertilizerScheduleInput>,
) -> AppResult<Json<FertilizerRequirement>> {
    let service = FertilizerService::new(state.bud);
    let requirement = service.schedule(input)?;
    Ok(Json(requirement))
}
