//! HTTP handlers for irrigation endpoints

use axum::{extract::State, Json};
use shared::IrrigationPlan;

use crate::error::AppResult;
use crate::services::irrigation::{FloodTimeInput, FloodTimeResult, IrrigationScheduleInput, IrrigationService};
use crate::AppState;

/// Build a 7-day irrigation schedule
pub async fn irrigation_schedule(
    State(state): State<AppState>,
    Json(input): Json<IrrigationScheduleInput>,
) -> AppResult<Json<IrrigationPlan>> {
    let service = IrrigationService::new(state.bud);
    let plan = service.schedule(input)?;
    Ok(Json(plan))
}

/// Estimate flood irrigation time
pub async fn flood_time(
    State(state): State<AppState>,
    Json(input): Json<FloodTimeInput>,
) -> AppResult<Json<FloodTimeResult>> {
    let service = IrrigationService::new(state.bud);
    let result = service.flood_time(input)?;
    Ok(Json(result))
}
