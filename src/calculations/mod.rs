//! # Connection Calculations
//!
//! Calculations follow the pattern used throughout the crate:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bolt`] - Derived properties of a single bolt
//! - [`capacity`] - Design resistances per EN 1993-1-8 Table 3.4 / 3.9

pub mod bolt;
pub mod capacity;

// Re-export commonly used types
pub use bolt::{BoltInput, PlateInput};
pub use capacity::{calculate, BoltCapacityResult};
