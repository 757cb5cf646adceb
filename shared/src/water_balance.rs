//! Water-balance calculator
//!
//! Converts net evapotranspiration into liters of water per acre per day
//! and estimates how long a pump needs to flood that volume.

use std::f64::consts::PI;

use crate::models::{EtRange, FloodDuration, PumpSetup, WaterBalance};

/// Irrigation system efficiency
pub const EFFICIENCY: f64 = 0.94;

/// Square meters per acre
pub const ACRE_TO_SQM: f64 = 4046.86;

const INCH_TO_M: f64 = 0.0254;
const VELOCITY_PER_HP: f64 = 0.45;
const MIN_VELOCITY_MPS: f64 = 0.75;
const MAX_VELOCITY_MPS: f64 = 2.5;
/// Velocity loss per 100 units of pipe run
const DAMPING_PER_100: f64 = 0.05;
const MIN_DAMPING_FACTOR: f64 = 0.5;

/// ET minus rainfall, floored at zero
pub fn net_et(et: f64, rainfall_mm: f64) -> f64 {
    let net = et - rainfall_mm;
    if net > 0.0 {
        net
    } else {
        0.0
    }
}

/// Liters per acre: Net ET × Kc × 0.94 × 4046.86, rounded
pub fn water_required_liters(net_et: f64, kc: f64) -> u64 {
    if net_et <= 0.0 || kc <= 0.0 {
        return 0;
    }
    (net_et * kc * EFFICIENCY * ACRE_TO_SQM).round() as u64
}

/// Water balance for a single day
pub fn compute_day(et: f64, rainfall_mm: f64, kc: f64) -> WaterBalance {
    let net = net_et(et, rainfall_mm);
    WaterBalance {
        net_et: net,
        water_required_liters: water_required_liters(net, kc),
        et_range: EtRange::classify(et),
    }
}

/// Pump flow in liters per hour, or `None` when pump data is missing
pub fn pump_flow_lph(pump: &PumpSetup) -> Option<f64> {
    let horsepower = pump.horsepower.filter(|hp| *hp > 0.0)?;
    let diameter_in = pump.pipe_diameter_inches.filter(|d| *d > 0.0)?;

    let radius_m = diameter_in * INCH_TO_M / 2.0;
    let area_sqm = PI * radius_m * radius_m;

    let mut velocity = (horsepower * VELOCITY_PER_HP).clamp(MIN_VELOCITY_MPS, MAX_VELOCITY_MPS);
    if let Some(distance) = pump.pipe_distance.filter(|d| *d > 0.0) {
        let factor = (1.0 - DAMPING_PER_100 * distance / 100.0).clamp(MIN_DAMPING_FACTOR, 1.0);
        velocity = (velocity * factor).clamp(MIN_VELOCITY_MPS, MAX_VELOCITY_MPS);
    }

    // m³/s -> L/h
    Some(area_sqm * velocity * 3600.0 * 1000.0)
}

/// Time to flood `liters` with the given pump; `None` if any input is
/// missing or non-positive
pub fn flood_irrigation_time(liters: u64, pump: &PumpSetup) -> Option<FloodDuration> {
    if liters == 0 {
        return None;
    }
    let flow = pump_flow_lph(pump)?;
    Some(FloodDuration::from_hours(liters as f64 / flow))
}
