//! Bud knowledge base and fertilizer schedule models

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::types::DayRange;

/// The "bud" knowledge base: per planting method, the ordered crop stages
/// with their crop coefficient and nutrient recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudTable {
    pub fertilizer_schedule: Vec<MethodSchedule>,
}

/// Stage list for one planting method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodSchedule {
    pub method: String,
    pub stages: Vec<BudStage>,
}

/// One stage row of the bud table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudStage {
    pub stage: String,
    #[serde(deserialize_with = "day_range_from_str")]
    pub days: DayRange,
    pub kc: f64,
    #[serde(rename = "N_kg_acre")]
    pub n_kg_acre: f64,
    #[serde(rename = "P_kg_acre")]
    pub p_kg_acre: f64,
    #[serde(rename = "K_kg_acre")]
    pub k_kg_acre: f64,
    #[serde(default)]
    pub fertilizers: Vec<String>,
    #[serde(default)]
    pub organic_inputs: Vec<String>,
}

fn day_range_from_str<'de, D>(deserializer: D) -> Result<DayRange, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DayRange::parse(&raw).map_err(de::Error::custom)
}

/// One day of the fertilizer plan
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FertilizerScheduleEntry {
    pub date: NaiveDate,
    pub stage: String,
    pub days: i64,
    pub n_kg_acre: f64,
    pub p_kg_acre: f64,
    pub k_kg_acre: f64,
    pub fertilizers: Vec<String>,
    pub organic_inputs: Vec<String>,
}

/// Whether a plot still needs fertilizer
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FertilizerRequirement {
    /// The plantation type's fertilizer window has elapsed
    Completed {
        months_completed: u32,
        required_months: u32,
    },
    Required {
        months_completed: u32,
        schedule: Vec<FertilizerScheduleEntry>,
    },
}
