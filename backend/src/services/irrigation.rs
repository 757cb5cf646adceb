//! Irrigation service: 7-day water plan and flood timing

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::irrigation::plan_irrigation;
use shared::water_balance::{flood_irrigation_time, pump_flow_lph};
use shared::{
    serialize_flood_time, validate_depth_mm, validate_plot_id, BudTable, FloodDuration, IrrigationPlan,
    PlantationRecord, PumpSetup, WeatherReading,
};
use validator::Validate;

use super::{check_field, reference_date};
use crate::error::AppResult;

/// Irrigation service
#[derive(Clone)]
pub struct IrrigationService {
    bud: Arc<BudTable>,
}

/// Pump and pipe details supplied by the farmer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PumpInput {
    #[validate(range(min = 0.0))]
    pub horsepower: Option<f64>,
    #[validate(range(min = 0.0))]
    pub pipe_diameter_inches: Option<f64>,
    #[validate(range(min = 0.0))]
    pub pipe_distance: Option<f64>,
}

impl From<PumpInput> for PumpSetup {
    fn from(input: PumpInput) -> Self {
        PumpSetup {
            horsepower: input.horsepower,
            pipe_diameter_inches: input.pipe_diameter_inches,
            pipe_distance: input.pipe_distance,
        }
    }
}

/// Input for the irrigation schedule
#[derive(Debug, Deserialize)]
pub struct IrrigationScheduleInput {
    pub plantation: PlantationRecord,
    #[serde(default)]
    pub weather: WeatherReading,
    #[serde(default)]
    pub pump: Option<PumpInput>,
    /// Defaults to today
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// Input for a one-off flood time estimate
#[derive(Debug, Deserialize, Validate)]
pub struct FloodTimeInput {
    pub water_required_liters: u64,
    #[validate(range(min = 0.0))]
    pub horsepower: f64,
    #[validate(range(min = 0.0))]
    pub pipe_diameter_inches: f64,
    #[validate(range(min = 0.0))]
    pub pipe_distance: Option<f64>,
}

/// Flood time estimate
#[derive(Debug, Serialize)]
pub struct FloodTimeResult {
    pub water_required_liters: u64,
    pub flow_liters_per_hour: Option<f64>,
    #[serde(serialize_with = "serialize_flood_time")]
    pub flood_time: Option<FloodDuration>,
}

impl IrrigationService {
    /// Create a new IrrigationService instance
    pub fn new(bud: Arc<BudTable>) -> Self {
        Self { bud }
    }

    /// Build the 7-day irrigation plan for a plot
    pub fn schedule(&self, input: IrrigationScheduleInput) -> AppResult<IrrigationPlan> {
        check_field("plantation.plot_id", validate_plot_id(&input.plantation.plot_id))?;
        self.validate_weather(&input.weather)?;

        let pump = match input.pump {
            Some(pump) => {
                pump.validate()?;
                Some(PumpSetup::from(pump))
            }
            None => None,
        };

        let today = reference_date(input.reference_date);
        let plan = plan_irrigation(&input.plantation, &input.weather, &self.bud, today, pump.as_ref())?;
        Ok(plan)
    }

    /// Estimate flooding time for a water volume
    pub fn flood_time(&self, input: FloodTimeInput) -> AppResult<FloodTimeResult> {
        input.validate()?;

        let pump = PumpSetup {
            horsepower: Some(input.horsepower),
            pipe_diameter_inches: Some(input.pipe_diameter_inches),
            pipe_distance: input.pipe_distance,
        };

        Ok(FloodTimeResult {
            water_required_liters: input.water_required_liters,
            flow_liters_per_hour: pump_flow_lph(&pump),
            flood_time: flood_irrigation_time(input.water_required_liters, &pump),
        })
    }

    fn validate_weather(&self, weather: &WeatherReading) -> AppResult<()> {
        if let Some(et) = weather.et_today {
            check_field("weather.et_today", validate_depth_mm(et))?;
        }
        check_field("weather.rainfall_today", validate_depth_mm(weather.rainfall_today))?;
        for (i, day) in weather.forecast.iter().enumerate() {
            check_field(&format!("weather.forecast[{}].rainfall_mm", i), validate_depth_mm(day.rainfall_mm))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn service() -> IrrigationService {
        IrrigationService::new(Arc::new(BudTable::bundled().unwrap()))
    }

    fn input(method: &str) -> IrrigationScheduleInput {
        IrrigationScheduleInput {
            plantation: PlantationRecord {
                plot_id: "P-7".to_string(),
                plantation_date: "2024-01-01".to_string(),
                plantation_type: None,
                planting_method: method.to_string(),
                lat: None,
                lon: None,
            },
            weather: WeatherReading {
                et_today: Some(4.0),
                rainfall_today: 1.5,
                forecast: vec![],
            },
            pump: None,
            reference_date: NaiveDate::from_ymd_opt(2024, 4, 20),
        }
    }

    #[test]
    fn test_schedule_for_known_method() {
        let plan = service().schedule(input("2 Eye Bud Sett")).unwrap();
        assert_eq!(plan.stage, "Grand Growth");
        assert_eq!(plan.schedule.len(), 7);
    }

    #[test]
    fn test_negative_rainfall_rejected() {
        let mut bad = input("2 Eye Bud Sett");
        bad.weather.rainfall_today = -2.0;
        let err = service().schedule(bad).unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "weather.rainfall_today"));
    }

    #[test]
    fn test_negative_pump_rejected() {
        let mut bad = input("2 Eye Bud Sett");
        bad.pump = Some(PumpInput {
            horsepower: Some(-1.0),
            pipe_diameter_inches: Some(3.0),
            pipe_distance: None,
        });
        assert!(matches!(service().schedule(bad), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_unknown_method_is_data_unavailable() {
        let err = service().schedule(input("broadcast")).unwrap_err();
        assert!(matches!(err, AppError::DataUnavailable(_)));
    }

    #[test]
    fn test_flood_time_zero_horsepower() {
        let result = service()
            .flood_time(FloodTimeInput {
                water_required_liters: 5000,
                horsepower: 0.0,
                pipe_diameter_inches: 3.0,
                pipe_distance: None,
            })
            .unwrap();
        assert!(result.flood_time.is_none());
        assert!(result.flow_liters_per_hour.is_none());
    }
}
