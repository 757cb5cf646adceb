//! Irrigation water-balance models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// ET magnitude band shown to the farmer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EtRange {
    Low,
    Medium,
    High,
}

impl EtRange {
    /// `Low` up to 3.0 mm/day, `Medium` up to 5.5, `High` above
    pub fn classify(et: f64) -> Self {
        if et <= 3.0 {
            EtRange::Low
        } else if et <= 5.5 {
            EtRange::Medium
        } else {
            EtRange::High
        }
    }
}

impl std::fmt::Display for EtRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EtRange::Low => write!(f, "Low"),
            EtRange::Medium => write!(f, "Medium"),
            EtRange::High => write!(f, "High"),
        }
    }
}

/// Result of the water-balance calculation for one day
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct WaterBalance {
    pub net_et: f64,
    pub water_required_liters: u64,
    pub et_range: EtRange,
}

/// One day of the 7-day irrigation schedule
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyWaterBalance {
    pub date: NaiveDate,
    pub is_today: bool,
    /// mm/day; days after today are synthesized, not measured
    pub et_value: f64,
    pub et_range: EtRange,
    pub rainfall_mm: f64,
    pub net_et: f64,
    pub water_required_liters: u64,
    #[serde(serialize_with = "serialize_flood_time")]
    pub flood_time: Option<FloodDuration>,
}

/// Pump and pipe characteristics for flood irrigation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PumpSetup {
    pub horsepower: Option<f64>,
    pub pipe_diameter_inches: Option<f64>,
    /// Length of the pipe run; dampens flow velocity
    #[serde(default)]
    pub pipe_distance: Option<f64>,
}

/// Time needed to deliver a water volume by flooding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FloodDuration {
    pub hours: u64,
    pub minutes: u64,
}

impl FloodDuration {
    pub fn from_hours(hours: f64) -> Self {
        let total_minutes = (hours * 60.0).round().max(0.0) as u64;
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
        }
    }
}

impl std::fmt::Display for FloodDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} hrs {} mins", self.hours, self.minutes)
    }
}

/// Renders a missing flood time as "N/A"
pub fn serialize_flood_time<S>(value: &Option<FloodDuration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(duration) => serializer.collect_str(duration),
        None => serializer.serialize_str("N/A"),
    }
}

/// Complete irrigation plan for a plot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IrrigationPlan {
    pub plot_id: String,
    pub stage: String,
    pub days_since_plantation: i64,
    pub kc: f64,
    pub schedule: Vec<DailyWaterBalance>,
}
