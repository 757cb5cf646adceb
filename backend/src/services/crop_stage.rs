//! Crop stage lookup across both stage vocabularies

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::crop_coefficient::kc_for_stage;
use shared::growth_stage::{parse_plantation_date, resolve_stage, KC_STAGES, RISK_STAGES};
use shared::BudTable;

use super::reference_date;
use crate::error::AppResult;

/// Crop stage service
#[derive(Clone)]
pub struct CropStageService {
    bud: Arc<BudTable>,
}

/// Input for a crop stage lookup
#[derive(Debug, Deserialize)]
pub struct CropStageInput {
    pub plantation_date: Option<String>,
    /// When set, the crop coefficient for the Kc stage is included
    #[serde(default)]
    pub planting_method: Option<String>,
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// Stage of a plot in both vocabularies
#[derive(Debug, Serialize)]
pub struct CropStageResult {
    pub plantation_date: NaiveDate,
    pub days_since_plantation: i64,
    pub risk_stage: String,
    pub kc_stage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kc: Option<f64>,
}

impl CropStageService {
    /// Create a new CropStageService instance
    pub fn new(bud: Arc<BudTable>) -> Self {
        Self { bud }
    }

    /// Resolve both stages; the plantation date is required here
    pub fn lookup(&self, input: CropStageInput) -> AppResult<CropStageResult> {
        let planted = parse_plantation_date(input.plantation_date.as_deref())?;
        let today = reference_date(input.reference_date);

        let risk = resolve_stage(planted, today, &RISK_STAGES)?;
        let kc_stage = resolve_stage(planted, today, &KC_STAGES)?;

        let kc = match input.planting_method.as_deref() {
            Some(method) => Some(kc_for_stage(&kc_stage.stage_name, method, &self.bud)?),
            None => None,
        };

        Ok(CropStageResult {
            plantation_date: planted,
            days_since_plantation: risk.days_since_plantation,
            risk_stage: risk.stage_name,
            kc_stage: kc_stage.stage_name,
            kc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_vocabularies_at_110_days() {
        let service = CropStageService::new(Arc::new(BudTable::bundled().unwrap()));
        let result = service
            .lookup(CropStageInput {
                plantation_date: Some("2024-01-01".to_string()),
                planting_method: Some("single_bud_chip".to_string()),
                reference_date: NaiveDate::from_ymd_opt(2024, 4, 20),
            })
            .unwrap();

        assert_eq!(result.days_since_plantation, 110);
        assert_eq!(result.risk_stage, "Tillering & Early Stem Elongation");
        assert_eq!(result.kc_stage, "Grand Growth");
        assert_eq!(result.kc, Some(1.20));
    }
}
