//! Pest, disease and weed risk assessment
//!
//! Pests and diseases are either `High` risk or not reported at all; the
//! `Moderate` and `Low` lists in the output stay empty. Weeds are bucketed
//! by season instead.

use chrono::NaiveDate;

use crate::catalog::{DISEASES, FUNGAL_DISEASES, PESTS, WEEDS};
use crate::growth_stage::{days_since_plantation, lenient_plantation_date, RISK_STAGES};
use crate::models::{
    ConditionsDisplay, CurrentConditions, DetectionCategory, DetectionSignal, DiseaseRecord, PestRecord,
    RiskAssessment, RiskBuckets, WeedBuckets, WeedRecord,
};
use crate::types::{month_name, normalize_month, DayRange, RiskLevel};

/// Common view of a catalogued pest or disease
pub trait RiskRecord {
    fn name(&self) -> &str;
    fn months(&self) -> &[&'static str];
    fn stage(&self) -> Option<DayRange>;
    /// Detection category whose signal drives this record; `None` means the
    /// record is never evaluated
    fn category(&self) -> Option<DetectionCategory>;
}

impl RiskRecord for PestRecord {
    fn name(&self) -> &str {
        self.name
    }

    fn months(&self) -> &[&'static str] {
        self.months
    }

    fn stage(&self) -> Option<DayRange> {
        self.stage
    }

    fn category(&self) -> Option<DetectionCategory> {
        Some(self.category)
    }
}

impl RiskRecord for DiseaseRecord {
    fn name(&self) -> &str {
        self.name
    }

    fn months(&self) -> &[&'static str] {
        self.months
    }

    fn stage(&self) -> Option<DayRange> {
        self.stage
    }

    fn category(&self) -> Option<DetectionCategory> {
        FUNGAL_DISEASES
            .contains(&self.name)
            .then_some(DetectionCategory::Fungal)
    }
}

fn in_months(months: &[&str], month: &str) -> bool {
    let wanted = normalize_month(month);
    months.iter().any(|m| normalize_month(m) == wanted)
}

/// `High` iff the record's signal is positive, the day count is inside its
/// stage range (no range matches every day) and the month is active
pub fn classify<R: RiskRecord + ?Sized>(
    record: &R,
    days_since_plantation: i64,
    current_month: &str,
    signals: &DetectionSignal,
) -> Option<RiskLevel> {
    let category = record.category()?;
    if signals.percentage(category) <= 0.0 {
        return None;
    }

    let stage_match = record
        .stage()
        .map_or(true, |range| range.contains(days_since_plantation));
    let month_match = in_months(record.months(), current_month);

    (stage_match && month_match).then_some(RiskLevel::High)
}

/// Group weeds by season. Weeds active in `current_month` are high, the
/// first of the rest moderate, the remainder low. When nothing is in
/// season the catalog order decides: two high, one moderate, rest low.
pub fn bucket_weeds(catalog: &[WeedRecord], current_month: &str) -> WeedBuckets {
    let (seasonal, remaining): (Vec<WeedRecord>, Vec<WeedRecord>) = catalog
        .iter()
        .cloned()
        .partition(|w| in_months(w.months, current_month));

    if !seasonal.is_empty() {
        let mut rest = remaining.into_iter();
        return WeedBuckets {
            high: seasonal,
            moderate: rest.next().into_iter().collect(),
            low: rest.collect(),
        };
    }

    // TODO: confirm with agronomy whether off-season weeds should be reported as high
    let mut all = catalog.iter().cloned();
    WeedBuckets {
        high: all.by_ref().take(2).collect(),
        moderate: all.by_ref().take(1).collect(),
        low: all.collect(),
    }
}

fn high_risk_names<R: RiskRecord>(
    records: &[R],
    active: &[DetectionCategory],
    days: i64,
    month: &str,
    signals: &DetectionSignal,
) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.category().map_or(false, |c| active.contains(&c)))
        .filter(|r| classify(*r, days, month, signals).is_some())
        .map(|r| r.name().to_string())
        .collect()
}

/// Assess against the bundled catalogs
pub fn assess(
    plantation_date: Option<&str>,
    conditions: &CurrentConditions,
    signals: &DetectionSignal,
    today: NaiveDate,
) -> RiskAssessment {
    assess_with_catalog(plantation_date, conditions, signals, today, PESTS, DISEASES, WEEDS)
}

/// Full assessment for a plot. An unknown or unparseable plantation date
/// falls back to a 90-day-old plot rather than failing.
pub fn assess_with_catalog(
    plantation_date: Option<&str>,
    conditions: &CurrentConditions,
    signals: &DetectionSignal,
    today: NaiveDate,
    pests: &[PestRecord],
    diseases: &[DiseaseRecord],
    weeds: &[WeedRecord],
) -> RiskAssessment {
    let planted = lenient_plantation_date(plantation_date, today);
    let days = days_since_plantation(planted, today);
    // the risk table clamps, so a miss falls back to its last bucket
    let stage = RISK_STAGES
        .stage_name(days)
        .ok()
        .or_else(|| RISK_STAGES.buckets.last().map(|bucket| bucket.name))
        .unwrap_or_default();

    let month = conditions
        .month
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| month_name(today).to_string());

    let active = signals.active_categories();
    tracing::debug!(
        "Risk assessment: day {} ({}), month {}, active categories {:?}",
        days,
        stage,
        month,
        active
    );

    let pest_high = high_risk_names(pests, &active, days, &month, signals);
    let disease_high = high_risk_names(diseases, &active, days, &month, signals);
    let weeds = bucket_weeds(weeds, &month);

    tracing::info!(
        "{} high-risk pests, {} high-risk diseases, {} seasonal weeds",
        pest_high.len(),
        disease_high.len(),
        weeds.high.len()
    );

    RiskAssessment {
        stage: stage.to_string(),
        days_since_plantation: days,
        current_conditions: ConditionsDisplay {
            month,
            temperature: format!("{}°C", conditions.temperature),
            humidity: format!("{}%", conditions.humidity),
        },
        pests: RiskBuckets {
            high: pest_high,
            ..Default::default()
        },
        diseases: RiskBuckets {
            high: disease_high,
            ..Default::default()
        },
        weeds,
    }
}
