//! WebAssembly module for the CropEye advisory platform
//!
//! Provides client-side computation for:
//! - Daily water requirement and ET range
//! - Flood irrigation time
//! - The 7-day irrigation plan
//! - Pest, disease and weed risk cards
//!
//! Structured inputs and outputs cross the boundary as JSON strings.

use std::sync::OnceLock;

use chrono::NaiveDate;
use serde::Deserialize;
use shared::et_forecast::synthesize_6day_et;
use shared::growth_stage::{parse_plantation_date, resolve_stage, RISK_STAGES};
use shared::irrigation::plan_irrigation;
use shared::pest_risk::{assess, bucket_weeds};
use shared::water_balance::{compute_day, flood_irrigation_time};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

static BUD_TABLE: OnceLock<Result<BudTable, shared::EngineError>> = OnceLock::new();

fn bud_table() -> Result<&'static BudTable, String> {
    BUD_TABLE
        .get_or_init(BudTable::bundled)
        .as_ref()
        .map_err(|e| e.to_string())
}

/// Today in the browser's local time zone
fn browser_today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .ok_or_else(|| JsValue::from_str("Browser returned an invalid date"))
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    match bud_table() {
        Ok(table) => log(&format!("CropEye engines ready ({} planting methods)", table.methods().count())),
        Err(e) => log(&format!("CropEye bud table failed to load: {}", e)),
    }
}

/// ET band label: "Low", "Medium" or "High"
#[wasm_bindgen]
pub fn classify_et_range(et: f64) -> String {
    EtRange::classify(et).to_string()
}

/// Liters per acre for one day
#[wasm_bindgen]
pub fn calculate_water_required(et: f64, rainfall_mm: f64, kc: f64) -> f64 {
    compute_day(et, rainfall_mm, kc).water_required_liters as f64
}

/// "H hrs M mins", or "N/A" when pump data is missing
#[wasm_bindgen]
pub fn calculate_flood_time(liters: f64, horsepower: f64, pipe_diameter_inches: f64, pipe_distance: Option<f64>) -> String {
    if !liters.is_finite() || liters <= 0.0 {
        return "N/A".to_string();
    }
    let pump = PumpSetup {
        horsepower: Some(horsepower),
        pipe_diameter_inches: Some(pipe_diameter_inches),
        pipe_distance,
    };
    flood_irrigation_time(liters.round() as u64, &pump)
        .map(|d| d.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Simulated ET for the six days after today, as a JSON array
#[wasm_bindgen]
pub fn synthesize_et_json(base_et: f64, plot_id: &str, day_of_month: u32) -> String {
    let values = synthesize_6day_et(base_et, plot_id, day_of_month);
    serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string())
}

/// Weeds grouped by season for a month, as JSON
#[wasm_bindgen]
pub fn weed_buckets_json(month: &str) -> String {
    let buckets = bucket_weeds(shared::catalog::WEEDS, month);
    serde_json::to_string(&buckets).unwrap_or_else(|_| "{}".to_string())
}

/// Risk-engine stage name for a plantation date
#[wasm_bindgen]
pub fn crop_stage_name(plantation_date: &str) -> Result<String, JsValue> {
    stage_name_on(plantation_date, browser_today()?).map_err(|e| JsValue::from_str(&e))
}

/// 7-day irrigation plan from a JSON request
#[wasm_bindgen]
pub fn irrigation_plan_json(request_json: &str) -> Result<String, JsValue> {
    irrigation_plan_on(request_json, browser_today()?).map_err(|e| JsValue::from_str(&e))
}

/// Pest, disease and weed assessment from a JSON request
#[wasm_bindgen]
pub fn risk_assessment_json(request_json: &str) -> Result<String, JsValue> {
    risk_assessment_on(request_json, browser_today()?).map_err(|e| JsValue::from_str(&e))
}

#[derive(Deserialize)]
struct IrrigationRequest {
    plantation: PlantationRecord,
    #[serde(default)]
    weather: WeatherReading,
    #[serde(default)]
    pump: Option<PumpSetup>,
}

#[derive(Deserialize)]
struct RiskRequest {
    #[serde(default)]
    plantation_date: Option<String>,
    #[serde(default)]
    current_conditions: CurrentConditions,
    #[serde(default)]
    detection: DetectionSignal,
}

fn stage_name_on(plantation_date: &str, today: NaiveDate) -> Result<String, String> {
    let planted = parse_plantation_date(Some(plantation_date)).map_err(|e| e.to_string())?;
    let stage = resolve_stage(planted, today, &RISK_STAGES).map_err(|e| e.to_string())?;
    Ok(stage.stage_name)
}

fn irrigation_plan_on(request_json: &str, today: NaiveDate) -> Result<String, String> {
    let request: IrrigationRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid irrigation request JSON: {}", e))?;
    if request.weather.et_today.is_none() {
        log("No ET reading supplied; today's water requirement is under-estimated");
    }

    let plan = plan_irrigation(
        &request.plantation,
        &request.weather,
        bud_table()?,
        today,
        request.pump.as_ref(),
    )
    .map_err(|e| e.to_string())?;

    serde_json::to_string(&plan).map_err(|e| e.to_string())
}

fn risk_assessment_on(request_json: &str, today: NaiveDate) -> Result<String, String> {
    let request: RiskRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid risk request JSON: {}", e))?;

    let assessment = assess(
        request.plantation_date.as_deref(),
        &request.current_conditions,
        &request.detection,
        today,
    );
    serde_json::to_string(&assessment).map_err(|e| e.to_string())
}
