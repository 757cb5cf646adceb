//! Growth-stage resolution from plantation date
//!
//! Two stage vocabularies exist and are deliberately kept apart: the
//! risk table follows pest epidemiology (45/120/210/365-day cutoffs) while
//! the Kc table follows crop water physiology (30/90/210/365-day cutoffs).

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::error::{EngineError, EngineResult};
use crate::models::GrowthStage;
use crate::types::DayRange;
use crate::validation::require_non_empty;

/// Age assumed for a plot whose plantation date is unknown (risk engine only)
pub const FALLBACK_PLANTATION_AGE_DAYS: i64 = 90;

/// What to do when a day count falls outside every bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageMissPolicy {
    /// Report the last bucket
    ClampToLast,
    /// Fail with `NoStageDefined`
    Fail,
}

/// A named day-range bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageBucket {
    pub name: &'static str,
    pub range: DayRange,
}

impl StageBucket {
    pub const fn new(name: &'static str, min_days: i64, max_days: i64) -> Self {
        Self {
            name,
            range: DayRange::new(min_days, max_days),
        }
    }
}

/// Ordered bucket table with its miss policy
#[derive(Debug, Clone, Copy)]
pub struct StageTable {
    pub name: &'static str,
    pub buckets: &'static [StageBucket],
    pub on_miss: StageMissPolicy,
}

/// Sugarcane stages used for pest and disease risk
pub const RISK_STAGES: StageTable = StageTable {
    name: "risk",
    buckets: &[
        StageBucket::new("Germination & Early Growth", 0, 45),
        StageBucket::new("Tillering & Early Stem Elongation", 46, 120),
        StageBucket::new("Grand Growth Phase", 121, 210),
        StageBucket::new("Ripening & Maturity", 211, 365),
    ],
    on_miss: StageMissPolicy::ClampToLast,
};

/// Sugarcane stages used to pick the crop coefficient
pub const KC_STAGES: StageTable = StageTable {
    name: "kc",
    buckets: &[
        StageBucket::new("Germination", 0, 30),
        StageBucket::new("Tillering", 31, 90),
        StageBucket::new("Grand Growth", 91, 210),
        StageBucket::new("Maturity", 211, 365),
    ],
    on_miss: StageMissPolicy::ClampToLast,
};

impl StageTable {
    /// Position of the bucket for `days`, scanning in ascending order
    pub fn position(&self, days: i64) -> EngineResult<usize> {
        if let Some(idx) = self.buckets.iter().position(|b| b.range.contains(days)) {
            return Ok(idx);
        }
        match self.on_miss {
            StageMissPolicy::ClampToLast if !self.buckets.is_empty() => Ok(self.buckets.len() - 1),
            _ => Err(EngineError::NoStageDefined { days }),
        }
    }

    pub fn stage_name(&self, days: i64) -> EngineResult<&'static str> {
        Ok(self.buckets[self.position(days)?].name)
    }
}

/// Parse a plantation date strictly: `YYYY-MM-DD`, or an ISO date-time
/// with optional `Z`/offset suffix (the date part is kept)
pub fn parse_plantation_date(value: Option<&str>) -> EngineResult<NaiveDate> {
    let raw = require_non_empty(value, "plantation_date")?;

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt.date());
        }
    }

    Err(EngineError::validation(
        "plantation_date",
        "must be ISO format YYYY-MM-DD",
    ))
}

/// Plantation date for the risk engine: unknown or unparseable dates fall
/// back to a plot planted `FALLBACK_PLANTATION_AGE_DAYS` before `reference`
pub fn lenient_plantation_date(value: Option<&str>, reference: NaiveDate) -> NaiveDate {
    match parse_plantation_date(value) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!(
                "Plantation date unavailable ({}), assuming a {}-day-old plot",
                e,
                FALLBACK_PLANTATION_AGE_DAYS
            );
            reference - Duration::days(FALLBACK_PLANTATION_AGE_DAYS)
        }
    }
}

/// Whole calendar days since plantation, never negative
pub fn days_since_plantation(plantation: NaiveDate, reference: NaiveDate) -> i64 {
    (reference - plantation).num_days().max(0)
}

/// Completed calendar months since plantation, never negative
pub fn months_since_plantation(plantation: NaiveDate, reference: NaiveDate) -> u32 {
    let mut months = (reference.year() - plantation.year()) * 12
        + (reference.month() as i32 - plantation.month() as i32);
    if reference.day() < plantation.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Resolve the growth stage of a plot on `reference` against `table`
pub fn resolve_stage(
    plantation: NaiveDate,
    reference: NaiveDate,
    table: &StageTable,
) -> EngineResult<GrowthStage> {
    let days = days_since_plantation(plantation, reference);
    let stage_name = table.stage_name(days)?;
    tracing::debug!("{} stage for day {}: {}", table.name, days, stage_name);

    Ok(GrowthStage {
        stage_name: stage_name.to_string(),
        days_since_plantation: days,
    })
}
