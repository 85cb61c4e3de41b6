//! # joints_core - Bolted Connection Capacity Engine
//!
//! `joints_core` computes the structural capacity of single bolts in bolted
//! steel connections per NS-EN 1993-1-8. It is a pure calculation library:
//! all inputs and outputs are JSON-serializable records, every derived value
//! is a pure function of its input, and failures surface as structured
//! errors at the point of the offending lookup.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Code-Traceable**: Factors and resistances reference their EC3 tables
//!
//! ## Quick Start
//!
//! ```rust
//! use joints_core::calculations::{calculate, BoltInput};
//!
//! // An M20 bolt of property class 8.8 with default hole and surface
//! let bolt = BoltInput::new(20, "8.8");
//! let result = calculate(&bolt)?;
//!
//! assert_eq!(result.fub_n_mm2, 800.0);
//! assert!((result.shear_capacity_kn - 120.6).abs() < 0.1);
//! # Ok::<(), joints_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Bolt property and design resistance calculations
//! - [`materials`] - Tabulated bolt sizes and property-class parsing
//! - [`factors`] - EC3 reduction and partial safety factors
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod factors;
pub mod materials;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BoltCapacityResult, BoltInput, PlateInput};
pub use errors::{CalcError, CalcResult};
pub use factors::{FrictionClass, HoleType};
pub use materials::{BoltSize, TensionClass};
