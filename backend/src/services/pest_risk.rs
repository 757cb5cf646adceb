//! Pest, disease and weed risk service

use chrono::NaiveDate;
use serde::Deserialize;
use shared::pest_risk::assess;
use shared::{validate_percentage, CurrentConditions, DetectionCategory, DetectionSignal, RiskAssessment};

use super::{check_field, reference_date};
use crate::error::AppResult;

/// Pest risk service
#[derive(Clone, Default)]
pub struct PestRiskService;

/// Input for a risk assessment
#[derive(Debug, Deserialize)]
pub struct RiskAssessmentInput {
    /// Unknown dates are assessed as a 90-day-old plot
    #[serde(default)]
    pub plantation_date: Option<String>,
    #[serde(default)]
    pub current_conditions: CurrentConditions,
    #[serde(default)]
    pub detection: DetectionSignal,
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

fn signal_field(category: DetectionCategory) -> &'static str {
    match category {
        DetectionCategory::Chewing => "detection.chewing_affected_pixel_percentage",
        DetectionCategory::Sucking => "detection.sucking_affected_pixel_percentage",
        DetectionCategory::Fungal => "detection.fungi_affected_pixel_percentage",
        DetectionCategory::SoilBorne => "detection.soil_borne_affected_pixel_percentage",
    }
}

impl PestRiskService {
    /// Create a new PestRiskService instance
    pub fn new() -> Self {
        Self
    }

    /// Assess pest, disease and weed risk for a plot
    pub fn assess(&self, input: RiskAssessmentInput) -> AppResult<RiskAssessment> {
        for category in DetectionCategory::ALL {
            check_field(signal_field(category), validate_percentage(input.detection.percentage(category)))?;
        }
        check_field(
            "current_conditions.humidity",
            validate_percentage(input.current_conditions.humidity),
        )?;

        let today = reference_date(input.reference_date);
        Ok(assess(
            input.plantation_date.as_deref(),
            &input.current_conditions,
            &input.detection,
            today,
        ))
    }
}
