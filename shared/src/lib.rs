//! Shared engines and models for the CropEye advisory platform
//!
//! This crate holds the deterministic calculators used by the backend and
//! the browser front-end (via WASM): the irrigation water-demand engine and
//! the pest/disease/weed risk engine. Nothing here performs I/O.

pub mod catalog;
pub mod crop_coefficient;
pub mod error;
pub mod et_forecast;
pub mod fertilizer;
pub mod growth_stage;
pub mod irrigation;
pub mod models;
pub mod pest_risk;
pub mod types;
pub mod validation;
pub mod water_balance;

pub use error::{EngineError, EngineResult};
pub use models::*;
pub use types::*;
pub use validation::*;
