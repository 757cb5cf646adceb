//! Irrigation schedule builder
//!
//! Pairs today's measured ET with six synthesized days (see
//! [`crate::et_forecast`]) and runs each day through the water-balance
//! calculator.

use chrono::{Datelike, Duration, NaiveDate};

use crate::crop_coefficient::kc_for_stage;
use crate::error::{EngineError, EngineResult};
use crate::et_forecast::{synthesize_6day_et, DEFAULT_BASE_ET, SYNTHETIC_DAYS};
use crate::growth_stage::{parse_plantation_date, resolve_stage, KC_STAGES};
use crate::models::{BudTable, DailyWaterBalance, IrrigationPlan, PlantationRecord, PumpSetup, WeatherReading};
use crate::validation::validate_depth_mm;
use crate::water_balance::{compute_day, flood_irrigation_time};

/// Days in a schedule, today included
pub const SCHEDULE_DAYS: usize = SYNTHETIC_DAYS + 1;

fn daily_entry(
    date: NaiveDate,
    is_today: bool,
    et: f64,
    rainfall_mm: f64,
    kc: f64,
    pump: Option<&PumpSetup>,
) -> DailyWaterBalance {
    let rainfall_mm = rainfall_depth(date, rainfall_mm);
    let balance = compute_day(et, rainfall_mm, kc);
    DailyWaterBalance {
        date,
        is_today,
        et_value: et,
        et_range: balance.et_range,
        rainfall_mm,
        net_et: balance.net_et,
        water_required_liters: balance.water_required_liters,
        flood_time: pump.and_then(|p| flood_irrigation_time(balance.water_required_liters, p)),
    }
}

/// Negative or non-finite rain reads as no rain
fn rainfall_depth(date: NaiveDate, rainfall_mm: f64) -> f64 {
    if validate_depth_mm(rainfall_mm).is_ok() {
        return rainfall_mm;
    }
    tracing::warn!("Ignoring invalid rainfall {} mm for {}", rainfall_mm, date);
    0.0
}

fn check_weather(weather: &WeatherReading) -> EngineResult<()> {
    let depth = |field: String, value: f64| {
        validate_depth_mm(value).map_err(|message| EngineError::validation(field, message))
    };
    if let Some(et) = weather.et_today {
        depth("weather.et_today".to_string(), et)?;
    }
    depth("weather.rainfall_today".to_string(), weather.rainfall_today)?;
    for (i, day) in weather.forecast.iter().enumerate() {
        depth(format!("weather.forecast[{}].rainfall_mm", i), day.rainfall_mm)?;
    }
    Ok(())
}

/// Seven days of water balance starting at `reference_date`.
///
/// A missing `today_et` is logged and treated as 0 for today's arithmetic,
/// which under-estimates demand. Forecast rainfall beyond what is supplied
/// reads as 0, as does any negative rainfall.
pub fn build_schedule(
    plot_id: &str,
    reference_date: NaiveDate,
    today_et: Option<f64>,
    today_rainfall: f64,
    forecast_rainfall: &[f64],
    kc: f64,
    pump: Option<&PumpSetup>,
) -> Vec<DailyWaterBalance> {
    let et_today = match today_et {
        Some(et) => et,
        None => {
            tracing::warn!(
                "No ET reading for plot {}; water demand for today is under-estimated",
                plot_id
            );
            0.0
        }
    };

    let base = if et_today > 0.0 { et_today } else { DEFAULT_BASE_ET };
    let synthetic = synthesize_6day_et(base, plot_id, reference_date.day());

    let mut schedule = Vec::with_capacity(SCHEDULE_DAYS);
    schedule.push(daily_entry(reference_date, true, et_today, today_rainfall, kc, pump));

    for (i, et) in synthetic.iter().enumerate() {
        let rainfall = forecast_rainfall.get(i).copied().unwrap_or(0.0);
        let date = reference_date + Duration::days(i as i64 + 1);
        schedule.push(daily_entry(date, false, *et, rainfall, kc, pump));
    }

    schedule
}

/// Resolve the Kc stage for a plot and build its 7-day plan.
/// The plantation date is parsed strictly, negative ET or rainfall is
/// rejected and a missing Kc is fatal.
pub fn plan_irrigation(
    plantation: &PlantationRecord,
    weather: &WeatherReading,
    knowledge_base: &BudTable,
    today: NaiveDate,
    pump: Option<&PumpSetup>,
) -> EngineResult<IrrigationPlan> {
    let planted = parse_plantation_date(Some(&plantation.plantation_date))?;
    check_weather(weather)?;
    let stage = resolve_stage(planted, today, &KC_STAGES)?;
    let kc = kc_for_stage(&stage.stage_name, &plantation.planting_method, knowledge_base)?;

    let schedule = build_schedule(
        &plantation.plot_id,
        today,
        weather.et_today,
        weather.rainfall_today,
        &weather.forecast_rainfall(SYNTHETIC_DAYS),
        kc,
        pump,
    );

    tracing::info!(
        "Irrigation plan for plot {}: {} (day {}), kc {}",
        plantation.plot_id,
        stage.stage_name,
        stage.days_since_plantation,
        kc
    );

    Ok(IrrigationPlan {
        plot_id: plantation.plot_id.clone(),
        stage: stage.stage_name,
        days_since_plantation: stage.days_since_plantation,
        kc,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{EtRange, ForecastDay};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plantation(planted: &str, method: &str) -> PlantationRecord {
        PlantationRecord {
            plot_id: "GAT-42_7".to_string(),
            plantation_date: planted.to_string(),
            plantation_type: Some("suru".to_string()),
            planting_method: method.to_string(),
            lat: None,
            lon: None,
        }
    }

    #[test]
    fn test_schedule_has_seven_consecutive_days() {
        let today = date(2024, 4, 20);
        let schedule = build_schedule("p1", today, Some(4.0), 0.0, &[], 0.75, None);

        assert_eq!(schedule.len(), SCHEDULE_DAYS);
        for (i, day) in schedule.iter().enumerate() {
            assert_eq!(day.date, today + Duration::days(i as i64));
            assert_eq!(day.is_today, i == 0);
        }
    }

    #[test]
    fn test_today_uses_supplied_readings() {
        let schedule = build_schedule("p1", date(2024, 4, 20), Some(4.0), 1.5, &[], 0.37, None);
        let today = &schedule[0];
        assert_eq!(today.et_value, 4.0);
        assert_eq!(today.rainfall_mm, 1.5);
        assert_eq!(today.net_et, 2.5);
        assert_eq!(today.water_required_liters, 3519);
        assert_eq!(today.et_range, EtRange::Medium);
    }

    #[test]
    fn test_following_days_use_synthetic_et_and_forecast_rain() {
        let reference = date(2024, 4, 18);
        let schedule = build_schedule("GAT-42_7", reference, Some(4.0), 0.0, &[1.0, 50.0], 1.0, None);
        let synthetic = synthesize_6day_et(4.0, "GAT-42_7", 18);

        for (i, day) in schedule.iter().skip(1).enumerate() {
            assert_eq!(day.et_value, synthetic[i]);
        }
        assert_eq!(schedule[1].rainfall_mm, 1.0);
        assert_eq!(schedule[2].rainfall_mm, 50.0);
        assert_eq!(schedule[2].net_et, 0.0);
        assert_eq!(schedule[2].water_required_liters, 0);
        assert!(schedule[3..].iter().all(|d| d.rainfall_mm == 0.0));
    }

    #[test]
    fn test_missing_et_is_zero_today() {
        let schedule = build_schedule("p1", date(2024, 4, 20), None, 0.0, &[], 1.0, None);
        assert_eq!(schedule[0].et_value, 0.0);
        assert_eq!(schedule[0].water_required_liters, 0);
        // later days still get a curve from the default base
        assert!(schedule[1..].iter().all(|d| d.et_value >= 1.5));
    }

    #[test]
    fn test_negative_rainfall_never_adds_demand() {
        let schedule = build_schedule("p1", date(2024, 4, 20), Some(4.0), -5.0, &[-20.0, f64::NAN], 1.0, None);

        assert_eq!(schedule[0].rainfall_mm, 0.0);
        assert_eq!(schedule[0].net_et, 4.0);
        assert!(schedule.iter().all(|d| d.rainfall_mm == 0.0));
        assert!(schedule.iter().all(|d| d.net_et <= d.et_value));
    }

    #[test]
    fn test_plan_irrigation_rejects_negative_rainfall() {
        let bud = BudTable::bundled().unwrap();
        let record = plantation("2024-01-01", "3 Eye Bud Sett");
        let today = date(2024, 4, 20);

        let weather: WeatherReading =
            serde_json::from_str(r#"{"et_today": 4.0, "rainfall_today": "-5 mm"}"#).unwrap();
        assert_eq!(
            plan_irrigation(&record, &weather, &bud, today, None).unwrap_err(),
            EngineError::validation("weather.rainfall_today", "Depth in mm cannot be negative")
        );

        let weather = WeatherReading {
            et_today: Some(4.0),
            rainfall_today: 0.0,
            forecast: vec![ForecastDay { rainfall_mm: 1.0 }, ForecastDay { rainfall_mm: -20.0 }],
        };
        let err = plan_irrigation(&record, &weather, &bud, today, None).unwrap_err();
        assert!(matches!(err, EngineError::Validation { ref field, .. } if field == "weather.forecast[1].rainfall_mm"));
    }

    #[test]
    fn test_flood_time_only_with_pump() {
        let pump = PumpSetup {
            horsepower: Some(5.0),
            pipe_diameter_inches: Some(3.0),
            pipe_distance: None,
        };
        let with_pump = build_schedule("p1", date(2024, 4, 20), Some(6.0), 0.0, &[], 1.0, Some(&pump));
        assert!(with_pump[0].flood_time.is_some());

        let without = build_schedule("p1", date(2024, 4, 20), Some(6.0), 0.0, &[], 1.0, None);
        assert!(without.iter().all(|d| d.flood_time.is_none()));
    }

    #[test]
    fn test_plan_irrigation_resolves_kc() {
        let bud = BudTable::bundled().unwrap();
        let weather = WeatherReading {
            et_today: Some(5.0),
            rainfall_today: 0.0,
            forecast: vec![ForecastDay { rainfall_mm: 2.0 }],
        };
        let plan = plan_irrigation(
            &plantation("2024-01-01", "3 Eye Bud Sett"),
            &weather,
            &bud,
            date(2024, 4, 20),
            None,
        )
        .unwrap();

        assert_eq!(plan.stage, "Grand Growth");
        assert_eq!(plan.days_since_plantation, 110);
        assert_eq!(plan.kc, 1.25);
        assert_eq!(plan.schedule.len(), 7);
        assert_eq!(plan.schedule[1].rainfall_mm, 2.0);
    }

    #[test]
    fn test_plan_irrigation_is_strict() {
        let bud = BudTable::bundled().unwrap();
        let weather = WeatherReading::default();
        let today = date(2024, 4, 20);

        let bad_date = plan_irrigation(&plantation("20/01/2024", "3 Eye Bud Sett"), &weather, &bud, today, None);
        assert!(matches!(bad_date, Err(EngineError::Validation { .. })));

        let bad_method = plan_irrigation(&plantation("2024-01-01", "broadcast"), &weather, &bud, today, None);
        assert_eq!(bad_method.unwrap_err(), EngineError::UnknownMethod("broadcast".into()));
    }

    #[test]
    fn test_serialized_day_shows_na_without_pump() {
        let schedule = build_schedule("p1", date(2024, 4, 20), Some(4.0), 0.0, &[], 1.0, None);
        let json = serde_json::to_value(&schedule[0]).unwrap();
        assert_eq!(json["flood_time"], "N/A");
        assert_eq!(json["date"], "2024-04-20");
        assert_eq!(json["et_range"], "Medium");
    }
}
