//! Services wrapping the shared engines for the CropEye advisory server

pub mod crop_stage;
pub mod fertilizer;
pub mod irrigation;
pub mod pest_risk;

use chrono::{NaiveDate, Utc};

use crate::error::{AppError, AppResult};

/// Date the engines calculate against; callers may pin it, otherwise today (UTC)
pub fn reference_date(requested: Option<NaiveDate>) -> NaiveDate {
    requested.unwrap_or_else(|| Utc::now().date_naive())
}

/// Map a shared range validator failure onto a field error
pub(crate) fn check_field(field: &str, result: Result<(), &'static str>) -> AppResult<()> {
    result.map_err(|message| AppError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    })
}
