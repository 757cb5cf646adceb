//! HTTP handlers for pest risk endpoints

use axum::Json;
use shared::RiskAssessment;

use crate::error::AppResult;
use crate::services::pest_risk::{PestRiskService, RiskAssessmentInput};

/// Assess pest, disease and weed risk
pub async fn risk_assessment(Json(input): Json<RiskAssessmentInput>) -> AppResult<Json<RiskAssessment>> {
    let service = PestRiskService::new();
    let assessment = service.assess(input)?;
    Ok(Json(assessment))
}
