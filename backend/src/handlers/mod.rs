//! HTTP handlers for the CropEye advisory server

pub mod crop_stage;
pub mod fertilizer;
pub mod health;
pub mod irrigation;
pub mod pest_risk;

pub use crop_stage::*;
pub use fertilizer::*;
pub use health::*;
pub use irrigation::*;
pub use pest_risk::*;
