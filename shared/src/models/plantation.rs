//! Plantation and growth stage models

use serde::{Deserialize, Serialize};

/// A plot's crop timeline, supplied by the farm-context provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantationRecord {
    pub plot_id: String,
    /// ISO `YYYY-MM-DD`, optionally with a time and `Z`/offset suffix
    pub plantation_date: String,
    /// e.g. "suru", "adsali", "preseasonal", "ratoon"
    #[serde(default)]
    pub plantation_type: Option<String>,
    /// Key into the bud knowledge base
    pub planting_method: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Sugarcane plantation seasons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlantationType {
    Suru,
    Adsali,
    Preseasonal,
    Ratoon,
}

impl PlantationType {
    pub const ALL: [PlantationType; 4] = [
        PlantationType::Suru,
        PlantationType::Adsali,
        PlantationType::Preseasonal,
        PlantationType::Ratoon,
    ];

    /// Months after plantation during which fertilizer is still applied
    pub fn fertilizer_months(&self) -> u32 {
        match self {
            PlantationType::Suru => 10,
            PlantationType::Adsali => 14,
            PlantationType::Preseasonal => 12,
            PlantationType::Ratoon => 9,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlantationType::Suru => "suru",
            PlantationType::Adsali => "adsali",
            PlantationType::Preseasonal => "preseasonal",
            PlantationType::Ratoon => "ratoon",
        }
    }

    /// Match a provider string, ignoring case, spaces and hyphens ("Pre-seasonal")
    pub fn from_name(value: &str) -> Option<Self> {
        let squashed: String = value
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        Self::ALL.into_iter().find(|t| t.name() == squashed)
    }
}

impl std::fmt::Display for PlantationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Derived growth stage for a plot on a reference day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrowthStage {
    pub stage_name: String,
    pub days_since_plantation: i64,
}
