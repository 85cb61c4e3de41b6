//! # Reference Data
//!
//! Tabulated bolt properties and property-class parsing for bolted
//! connection design per NS-EN 1993-1-8.
//!
//! ## Example
//!
//! ```rust
//! use joints_core::materials::{BoltSize, TensionClass};
//!
//! let size = BoltSize::from_diameter(20)?;
//! let class: TensionClass = "8.8".parse()?;
//!
//! println!("As = {} mm², fub = {} N/mm²", size.tension_area_mm2(), class.fub());
//! # Ok::<(), joints_core::errors::CalcError>(())
//! ```

pub mod bolt_sizes;
pub mod tension_class;

// Re-export bolt size types
pub use bolt_sizes::{nominal_hole_diameter_mm, BoltSize};

// Re-export tension class types
pub use tension_class::TensionClass;
