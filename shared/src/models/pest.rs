//! Pest, disease and weed risk models

use serde::{Deserialize, Serialize};

use super::weather::lenient_measurement;
use crate::types::DayRange;

/// Category of damage picked up by the imagery-based detector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DetectionCategory {
    Chewing,
    Sucking,
    Fungal,
    SoilBorne,
}

impl DetectionCategory {
    pub const ALL: [DetectionCategory; 4] = [
        DetectionCategory::Chewing,
        DetectionCategory::Sucking,
        DetectionCategory::Fungal,
        DetectionCategory::SoilBorne,
    ];
}

/// Affected-pixel percentages (0-100) per detection category.
/// Missing or null provider values read as 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DetectionSignal {
    #[serde(default, deserialize_with = "lenient_measurement")]
    pub chewing_affected_pixel_percentage: f64,
    #[serde(default, deserialize_with = "lenient_measurement")]
    pub sucking_affected_pixel_percentage: f64,
    #[serde(default, deserialize_with = "lenient_measurement")]
    pub fungi_affected_pixel_percentage: f64,
    #[serde(
        default,
        alias = "SoilBorn_affected_pixel_percentage",
        deserialize_with = "lenient_measurement"
    )]
    pub soil_borne_affected_pixel_percentage: f64,
}

impl DetectionSignal {
    pub fn percentage(&self, category: DetectionCategory) -> f64 {
        match category {
            DetectionCategory::Chewing => self.chewing_affected_pixel_percentage,
            DetectionCategory::Sucking => self.sucking_affected_pixel_percentage,
            DetectionCategory::Fungal => self.fungi_affected_pixel_percentage,
            DetectionCategory::SoilBorne => self.soil_borne_affected_pixel_percentage,
        }
    }

    /// Categories with a positive signal
    pub fn active_categories(&self) -> Vec<DetectionCategory> {
        DetectionCategory::ALL
            .into_iter()
            .filter(|c| self.percentage(*c) > 0.0)
            .collect()
    }
}

/// Catalogued pest
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PestRecord {
    pub name: &'static str,
    pub months: &'static [&'static str],
    /// `None` matches every growth stage
    pub stage: Option<DayRange>,
    pub category: DetectionCategory,
}

/// Catalogued disease
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiseaseRecord {
    pub name: &'static str,
    pub months: &'static [&'static str],
    pub stage: Option<DayRange>,
}

/// Catalogued weed with remediation details for display
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeedRecord {
    pub name: &'static str,
    pub months: &'static [&'static str],
    pub when: &'static str,
    #[serde(rename = "where")]
    pub where_found: &'static str,
    pub why: &'static str,
    pub image: &'static str,
    pub chemical: &'static [&'static str],
}

/// Conditions at assessment time, as supplied by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    /// Month name; the reference date's month is used when absent
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default, alias = "temperature_c", deserialize_with = "lenient_measurement")]
    pub temperature: f64,
    #[serde(default, deserialize_with = "lenient_measurement")]
    pub humidity: f64,
}

/// Conditions formatted for display
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConditionsDisplay {
    pub month: String,
    /// e.g. "28°C"
    pub temperature: String,
    /// e.g. "65%"
    pub humidity: String,
}

/// Pest or disease names grouped by risk level.
/// Only `High` is ever filled; the other levels keep the response shape stable.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RiskBuckets {
    #[serde(rename = "High")]
    pub high: Vec<String>,
    #[serde(rename = "Moderate")]
    pub moderate: Vec<String>,
    #[serde(rename = "Low")]
    pub low: Vec<String>,
}

/// Weeds grouped by seasonal risk
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct WeedBuckets {
    pub high: Vec<WeedRecord>,
    pub moderate: Vec<WeedRecord>,
    pub low: Vec<WeedRecord>,
}

impl WeedBuckets {
    pub fn len(&self) -> usize {
        self.high.len() + self.moderate.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Full pest/disease/weed assessment for a plot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RiskAssessment {
    pub stage: String,
    pub days_since_plantation: i64,
    pub current_conditions: ConditionsDisplay,
    pub pests: RiskBuckets,
    pub diseases: RiskBuckets,
    pub weeds: WeedBuckets,
}
