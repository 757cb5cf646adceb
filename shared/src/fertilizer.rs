//! Fertilizer schedule from the bud knowledge base

use chrono::{Duration, NaiveDate};

use crate::error::EngineResult;
use crate::growth_stage::{days_since_plantation, months_since_plantation, parse_plantation_date};
use crate::models::{BudTable, FertilizerRequirement, FertilizerScheduleEntry, PlantationRecord, PlantationType};

/// Days covered by a fertilizer schedule, today included
pub const FERTILIZER_SCHEDULE_DAYS: i64 = 7;

/// Nutrient plan for the next seven days. Every day must fall inside a
/// bud stage; there is no fallback stage.
pub fn fertilizer_schedule(
    plantation_date: &str,
    planting_method: &str,
    knowledge_base: &BudTable,
    today: NaiveDate,
) -> EngineResult<Vec<FertilizerScheduleEntry>> {
    let planted = parse_plantation_date(Some(plantation_date))?;
    let method = knowledge_base.method(planting_method)?;
    let days_since = days_since_plantation(planted, today);

    (0..FERTILIZER_SCHEDULE_DAYS)
        .map(|offset| -> EngineResult<FertilizerScheduleEntry> {
            let days = days_since + offset;
            let stage = method.stage_for_day(days)?;
            Ok(FertilizerScheduleEntry {
                date: today + Duration::days(offset),
                stage: stage.stage.clone(),
                days,
                n_kg_acre: stage.n_kg_acre,
                p_kg_acre: stage.p_kg_acre,
                k_kg_acre: stage.k_kg_acre,
                fertilizers: stage.fertilizers.clone(),
                organic_inputs: stage.organic_inputs.clone(),
            })
        })
        .collect()
}

/// Whether the plot is still inside its plantation type's fertilizer window.
/// An unknown or missing plantation type never suppresses the schedule.
pub fn fertilizer_requirement(
    plantation: &PlantationRecord,
    knowledge_base: &BudTable,
    today: NaiveDate,
) -> EngineResult<FertilizerRequirement> {
    let planted = parse_plantation_date(Some(&plantation.plantation_date))?;
    let months_completed = months_since_plantation(planted, today);

    let plantation_type = plantation.plantation_type.as_deref().and_then(PlantationType::from_name);
    if let Some(kind) = plantation_type {
        let required_months = kind.fertilizer_months();
        if months_completed >= required_months {
            tracing::info!(
                "Plot {} ({}) finished its {}-month fertilizer window",
                plantation.plot_id,
                kind,
                required_months
            );
            return Ok(FertilizerRequirement::Completed {
                months_completed,
                required_months,
            });
        }
    } else if let Some(raw) = &plantation.plantation_type {
        tracing::warn!("Unknown plantation type '{}' for plot {}", raw, plantation.plot_id);
    }

    let schedule = fertilizer_schedule(
        &plantation.plantation_date,
        &plantation.planting_method,
        knowledge_base,
        today,
    )?;
    Ok(FertilizerRequirement::Required {
        months_completed,
        schedule,
    })
}
