//! HTTP handlers for crop stage lookup

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::crop_stage::{CropStageInput, CropStageResult, CropStageService};
use crate::AppState;

/// Stage of a plot in both the risk and Kc vocabularies
pub async fn crop_stage(
    State(state): State<AppState>,
    Json(input): Json<CropStageInput>,
) -> AppResult<Json<CropStageResult>> {
    let service = CropStageService::new(state.bud);
    let result = service.lookup(input)?;
    Ok(Json(result))
}
