//! Crop-coefficient (Kc) lookup against the bud knowledge base

use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{BudStage, BudTable, MethodSchedule};
use crate::validation::{names_match, normalize_method, validate_kc};

/// Knowledge base shipped with the engine
const BUNDLED_BUD_TABLE: &str = include_str!("../data/bud.json");

impl BudTable {
    /// Parse the knowledge base embedded at build time
    pub fn bundled() -> EngineResult<Self> {
        Self::from_json_str(BUNDLED_BUD_TABLE)
    }

    /// Parse and check a knowledge base from JSON text
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let table: BudTable = serde_json::from_str(json)
            .map_err(|e| EngineError::KnowledgeBase(format!("invalid bud table: {}", e)))?;
        table.check()?;
        Ok(table)
    }

    /// Load a knowledge base from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            EngineError::KnowledgeBase(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    fn check(&self) -> EngineResult<()> {
        if self.fertilizer_schedule.is_empty() {
            return Err(EngineError::KnowledgeBase("bud table has no planting methods".into()));
        }
        for schedule in &self.fertilizer_schedule {
            if schedule.stages.is_empty() {
                return Err(EngineError::KnowledgeBase(format!(
                    "planting method '{}' has no stages",
                    schedule.method
                )));
            }
            for stage in &schedule.stages {
                validate_kc(stage.kc).map_err(|msg| {
                    EngineError::KnowledgeBase(format!(
                        "{} / {}: {}",
                        schedule.method, stage.stage, msg
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Planting methods in declaration order
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.fertilizer_schedule.iter().map(|s| s.method.as_str())
    }

    /// Stage list for a planting method; names are normalised before comparison
    pub fn method(&self, planting_method: &str) -> EngineResult<&MethodSchedule> {
        let wanted = normalize_method(planting_method);
        if wanted.is_empty() {
            return Err(EngineError::validation(
                "planting_method",
                "must be a non-empty string",
            ));
        }
        self.fertilizer_schedule
            .iter()
            .find(|s| normalize_method(&s.method) == wanted)
            .ok_or_else(|| EngineError::UnknownMethod(planting_method.trim().to_string()))
    }
}

impl MethodSchedule {
    pub fn stage(&self, stage_name: &str) -> Option<&BudStage> {
        self.stages.iter().find(|s| names_match(&s.stage, stage_name))
    }

    /// First stage whose day range contains `days`
    pub fn stage_for_day(&self, days: i64) -> EngineResult<&BudStage> {
        self.stages
            .iter()
            .find(|s| s.days.contains(days))
            .ok_or(EngineError::NoStageDefined { days })
    }
}

/// Crop coefficient for a stage under a planting method.
/// There is no default: a wrong Kc silently skews every water volume.
pub fn kc_for_stage(stage_name: &str, planting_method: &str, knowledge_base: &BudTable) -> EngineResult<f64> {
    let schedule = knowledge_base.method(planting_method)?;
    let stage = schedule
        .stage(stage_name)
        .ok_or_else(|| EngineError::UnknownStage {
            stage: stage_name.to_string(),
            method: schedule.method.clone(),
        })?;

    tracing::debug!("Kc for {} / {}: {}", schedule.method, stage.stage, stage.kc);
    Ok(stage.kc)
}
