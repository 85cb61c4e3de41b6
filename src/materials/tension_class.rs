//! Bolt Tension Classes
//!
//! Parses the ISO property class designation ("4.6", "8.8", "10.9", ...).
//! The first component times 100 is the ultimate tensile strength fub in
//! N/mm²; the second component times 10 is the yield ratio in percent, so
//! fy = second × fub / 10.

use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Parsed bolt property (tension) class.
///
/// Construct via [`FromStr`]:
///
/// ```rust
/// use joints_core::materials::TensionClass;
///
/// let class: TensionClass = "8.8".parse().unwrap();
/// assert_eq!(class.fub(), 800.0);
/// assert_eq!(class.fy(), 640.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TensionClass {
    designation: String,
    strength_component: f64,
    yield_component: f64,
}

impl TensionClass {
    /// Ultimate tensile strength fub (N/mm²)
    pub fn fub(&self) -> f64 {
        self.strength_component * 100.0
    }

    /// Yield strength fy (N/mm²)
    pub fn fy(&self) -> f64 {
        self.yield_component * self.fub() / 10.0
    }

    /// Shear plane factor αv: 0.6 for classes 4.6, 5.6 and 8.8, else 0.5
    pub fn shear_factor(&self) -> f64 {
        match self.designation.as_str() {
            "4.6" | "5.6" | "8.8" => 0.6,
            _ => 0.5,
        }
    }

    /// The class designation as written (e.g. "10.9")
    pub fn designation(&self) -> &str {
        &self.designation
    }
}

impl FromStr for TensionClass {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let invalid = || {
            CalcError::invalid_input(
                "tension_class",
                s,
                "Tension class must have the form '<strength>.<yield>', e.g. '8.8'",
            )
        };

        let (first, second) = s.split_once('.').ok_or_else(invalid)?;
        let strength_component: f64 = first.trim().parse().map_err(|_| invalid())?;
        let yield_component: f64 = second.trim().parse().map_err(|_| invalid())?;
        if strength_component <= 0.0 || yield_component <= 0.0 {
            return Err(invalid());
        }

        Ok(TensionClass {
            designation: s.trim().to_string(),
            strength_component,
            yield_component,
        })
    }
}

impl std::fmt::Display for TensionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation)
    }
}
