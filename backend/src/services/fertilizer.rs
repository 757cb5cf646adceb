//! Fertilizer service

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use shared::fertilizer::fertilizer_requirement;
use shared::{validate_plot_id, BudTable, FertilizerRequirement, PlantationRecord};

use super::{check_field, reference_date};
use crate::error::AppResult;

/// Fertilizer service
#[derive(Clone)]
pub struct FertilizerService {
    bud: Arc<BudTable>,
}

/// Input for the fertilizer schedule
#[derive(Debug, Deserialize)]
pub struct FertilizerScheduleInput {
    pub plantation: PlantationRecord,
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl FertilizerService {
    /// Create a new FertilizerService instance
    pub fn new(bud: Arc<BudTable>) -> Self {
        Self { bud }
    }

    /// Fertilizer plan for the next seven days, or the completed window
    pub fn schedule(&self, input: FertilizerScheduleInput) -> AppResult<FertilizerRequirement> {
        check_field("plantation.plot_id", validate_plot_id(&input.plantation.plot_id))?;

        let today = reference_date(input.reference_date);
        let requirement = fertilizer_requirement(&input.plantation, &self.bud, today)?;
        Ok(requirement)
    }
}
