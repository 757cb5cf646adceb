//! Domain models for the CropEye advisory platform

mod fertilizer;
mod irrigation;
mod pest;
mod plantation;
mod weather;

pub use fertilizer::*;
pub use irrigation::*;
pub use pest::*;
pub use plantation::*;
pub use weather::*;
