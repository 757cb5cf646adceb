//! Common types used across the platform

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Inclusive range of days since plantation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayRange {
    pub min_days: i64,
    pub max_days: i64,
}

impl DayRange {
    pub const fn new(min_days: i64, max_days: i64) -> Self {
        Self { min_days, max_days }
    }

    pub fn contains(&self, days: i64) -> bool {
        self.min_days <= days && days <= self.max_days
    }

    /// Parse a knowledge-base range such as `"0-30"` or `"31–90"` (en dash)
    pub fn parse(value: &str) -> EngineResult<Self> {
        let normalized = value.replace('–', "-");
        let (start, end) = normalized.split_once('-').ok_or_else(|| {
            EngineError::KnowledgeBase(format!("day range '{}' is not of the form A-B", value))
        })?;

        let parse_bound = |bound: &str| {
            bound.trim().parse::<i64>().map_err(|_| {
                EngineError::KnowledgeBase(format!("day range '{}' has a non-numeric bound", value))
            })
        };

        let range = Self::new(parse_bound(start)?, parse_bound(end)?);
        if range.min_days > range.max_days {
            return Err(EngineError::KnowledgeBase(format!(
                "day range '{}' ends before it starts",
                value
            )));
        }
        Ok(range)
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min_days, self.max_days)
    }
}

/// Risk levels reported for pests, diseases and weeds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::Low => write!(f, "Low"),
        }
    }
}

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name of a date, e.g. "April"
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Lowercase and trim a month name for comparison
pub fn normalize_month(month: &str) -> String {
    month.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_range_contains_is_inclusive() {
        let range = DayRange::new(46, 120);
        assert!(range.contains(46));
        assert!(range.contains(120));
        assert!(!range.contains(45));
        assert!(!range.contains(121));
    }

    #[test]
    fn test_day_range_parse_accepts_en_dash() {
        assert_eq!(DayRange::parse("0-30").unwrap(), DayRange::new(0, 30));
        assert_eq!(DayRange::parse("31–90").unwrap(), DayRange::new(31, 90));
        assert_eq!(DayRange::parse(" 91 - 210 ").unwrap(), DayRange::new(91, 210));
    }

    #[test]
    fn test_day_range_parse_rejects_garbage() {
        assert!(DayRange::parse("thirty").is_err());
        assert!(DayRange::parse("0-x").is_err());
        assert!(DayRange::parse("90-30").is_err());
    }

    #[test]
    fn test_month_name() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        assert_eq!(month_name(date), "April");
        assert_eq!(normalize_month("  JUNE "), "june");
    }
}
