//! # Single Bolt Properties
//!
//! Derived geometric and material properties of one bolt in a bolted
//! connection per NS-EN 1993-1-8.
//!
//! ## Example
//!
//! ```rust
//! use joints_core::calculations::bolt::BoltInput;
//!
//! let bolt = BoltInput::new(20, "8.8");
//!
//! assert_eq!(bolt.tension_area_mm2()?, 245.0);
//! assert_eq!(bolt.fub()?, 800.0);
//! assert_eq!(bolt.hole_diameter_mm(), 21.0);
//! # Ok::<(), joints_core::errors::CalcError>(())
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::factors::{countersink_factor, FrictionClass, HoleType};
use crate::materials::{nominal_hole_diameter_mm, BoltSize, TensionClass};

/// Plate geometry and material at the bolt position.
///
/// Consumed only by the bearing and punching shear resistances. Edge and
/// internal distances may be given partially; bearing uses whichever are
/// supplied.
///
/// ## JSON Example
///
/// ```json
/// {
///   "e1_mm": 40.0,
///   "e2_mm": 30.0,
///   "p1_mm": null,
///   "p2_mm": null,
///   "thickness_mm": 10.0,
///   "fu_n_mm2": 510.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateInput {
    /// End distance in the force direction, e1 (mm)
    pub e1_mm: Option<f64>,

    /// Edge distance normal to the force direction, e2 (mm)
    pub e2_mm: Option<f64>,

    /// Internal spacing in the force direction, p1 (mm)
    pub p1_mm: Option<f64>,

    /// Internal spacing normal to the force direction, p2 (mm)
    pub p2_mm: Option<f64>,

    /// Plate thickness t (mm)
    pub thickness_mm: f64,

    /// Ultimate tensile strength of the plate material, fu (N/mm²)
    pub fu_n_mm2: f64,
}

impl PlateInput {
    /// Validate plate parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.thickness_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "plate.thickness_mm",
                self.thickness_mm.to_string(),
                "Plate thickness must be positive",
            ));
        }
        if self.fu_n_mm2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "plate.fu_n_mm2",
                self.fu_n_mm2.to_string(),
                "Plate tensile strength must be positive",
            ));
        }
        for (name, value) in [
            ("plate.e1_mm", self.e1_mm),
            ("plate.e2_mm", self.e2_mm),
            ("plate.p1_mm", self.p1_mm),
            ("plate.p2_mm", self.p2_mm),
        ] {
            if let Some(v) = value {
                if v <= 0.0 {
                    return Err(CalcError::invalid_input(
                        name,
                        v.to_string(),
                        "Edge and internal distances must be positive",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Input parameters for a single bolt.
///
/// The record is read-only after construction; every derived property is a
/// pure function of it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "M22 10.9",
///   "d_mm": 22,
///   "tension_class": "10.9",
///   "d0_mm": null,
///   "countersink_depth_mm": 2.2,
///   "shear_planes": 1,
///   "threads_in_shear_plane": false,
///   "friction_class": "A",
///   "hole_type": "ShortSlotted",
///   "plate": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltInput {
    /// User label for this bolt (e.g. "B-1", "M20 8.8")
    pub label: String,

    /// Nominal bolt diameter d (mm)
    pub d_mm: u32,

    /// Property class designation, e.g. "8.8" or "10.9"
    pub tension_class: String,

    /// Hole diameter d0 (mm); `None` uses the standard clearance rule
    pub d0_mm: Option<f64>,

    /// Depth of a countersunk hole (mm); zero means not countersunk
    pub countersink_depth_mm: f64,

    /// Number of shear planes n
    pub shear_planes: u32,

    /// True if the shear plane passes through the threaded part
    pub threads_in_shear_plane: bool,

    /// Friction class of the faying surfaces
    pub friction_class: FrictionClass,

    /// Bolt hole type
    pub hole_type: HoleType,

    /// Plate geometry, for bearing and punching shear
    pub plate: Option<PlateInput>,
}

impl BoltInput {
    /// Create a bolt with the default hole, surface and shear configuration:
    /// standard clearance hole of normal type, not countersunk, one shear
    /// plane through the shank, friction class D.
    pub fn new(d_mm: u32, tension_class: impl Into<String>) -> Self {
        let tension_class = tension_class.into();
        BoltInput {
            label: format!("M{} {}", d_mm, tension_class),
            d_mm,
            tension_class,
            d0_mm: None,
            countersink_depth_mm: 0.0,
            shear_planes: 1,
            threads_in_shear_plane: false,
            friction_class: FrictionClass::default(),
            hole_type: HoleType::default(),
            plate: None,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.d_mm == 0 {
            return Err(CalcError::invalid_input(
                "d_mm",
                self.d_mm.to_string(),
                "Bolt diameter must be positive",
            ));
        }
        if self.shear_planes == 0 {
            return Err(CalcError::invalid_input(
                "shear_planes",
                self.shear_planes.to_string(),
                "At least one shear plane is required",
            ));
        }
        if let Some(d0) = self.d0_mm {
            if d0 <= self.d_mm as f64 {
                return Err(CalcError::invalid_input(
                    "d0_mm",
                    d0.to_string(),
                    "Hole diameter must exceed the bolt diameter",
                ));
            }
        }
        countersink_factor(self.countersink_depth_mm)?;
        self.class()?;
        if let Some(plate) = &self.plate {
            plate.validate()?;
        }
        Ok(())
    }

    /// Resolve the standard size designation for table lookups.
    pub fn size(&self) -> CalcResult<BoltSize> {
        BoltSize::from_diameter(self.d_mm)
    }

    /// Parse the property class designation.
    pub fn class(&self) -> CalcResult<TensionClass> {
        self.tension_class.parse()
    }

    /// Hole diameter d0 (mm): the supplied value, or the standard clearance
    /// add-on for this bolt diameter.
    pub fn hole_diameter_mm(&self) -> f64 {
        self.d0_mm
            .unwrap_or_else(|| nominal_hole_diameter_mm(self.d_mm))
    }

    /// Gross cross-sectional area A = π/4·d² (mm²)
    pub fn area_mm2(&self) -> f64 {
        let d = self.d_mm as f64;
        PI / 4.0 * d * d
    }

    /// Tension (stress) area As (mm²), from the size table
    pub fn tension_area_mm2(&self) -> CalcResult<f64> {
        Ok(self.size()?.tension_area_mm2())
    }

    /// Mean bolt head diameter dm (mm), from the size table
    pub fn mean_head_diameter_mm(&self) -> CalcResult<f64> {
        Ok(self.size()?.mean_head_diameter_mm())
    }

    /// Countersunk head reduction factor k2
    pub fn countersink_factor(&self) -> CalcResult<f64> {
        countersink_factor(self.countersink_depth_mm)
    }

    /// Friction coefficient μ of the faying surfaces
    pub fn friction_coefficient(&self) -> f64 {
        self.friction_class.coefficient()
    }

    /// Ultimate tensile strength of the bolt, fub (N/mm²)
    pub fn fub(&self) -> CalcResult<f64> {
        Ok(self.class()?.fub())
    }

    /// Yield strength of the bolt, fy (N/mm²)
    pub fn fy(&self) -> CalcResult<f64> {
        Ok(self.class()?.fy())
    }

    /// Shear plane factor αv for the property class
    pub fn shear_factor(&self) -> CalcResult<f64> {
        Ok(self.class()?.shear_factor())
    }

    /// Slip factor ks for the hole type
    pub fn slip_factor(&self) -> f64 {
        self.hole_type.slip_factor()
    }

    /// Bearing reduction factor r1 for the hole type
    pub fn bearing_reduction(&self) -> f64 {
        self.hole_type.bearing_reduction()
    }

    /// Preload force F_p_C = 0.7·fub·As (kN)
    pub fn pretension_force_kn(&self) -> CalcResult<f64> {
        Ok(0.7 * self.fub()? * self.tension_area_mm2()? / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m20() -> BoltInput {
        BoltInput::new(20, "8.8")
    }

    fn m22() -> BoltInput {
        BoltInput {
            countersink_depth_mm: 2.2,
            friction_class: FrictionClass::A,
            hole_type: HoleType::ShortSlotted,
            ..BoltInput::new(22, "10.9")
        }
    }

    #[test]
    fn test_area() {
        assert!((m20().area_mm2() - 314.0).abs() < 0.5);
    }

    #[test]
    fn test_tension_area() {
        assert_eq!(m20().tension_area_mm2().unwrap(), 245.0);
        assert_eq!(m22().tension_area_mm2().unwrap(), 303.0);
    }

    #[test]
    fn test_untabulated_diameter() {
        let bolt = BoltInput::new(15, "8.8");
        let err = bolt.tension_area_mm2().unwrap_err();
        assert_eq!(err.error_code(), "LOOKUP_NOT_FOUND");
        assert!(bolt.mean_head_diameter_mm().is_err());
    }

    #[test]
    fn test_mean_head_diameter() {
        assert_eq!(m20().mean_head_diameter_mm().unwrap(), 31.1);
    }

    #[test]
    fn test_countersink_factor() {
        assert_eq!(m20().countersink_factor().unwrap(), 0.9);
        assert_eq!(m22().countersink_factor().unwrap(), 0.63);

        let mut bolt = m20();
        bolt.countersink_depth_mm = -1.0;
        assert_eq!(
            bolt.countersink_factor().unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_friction_coefficient() {
        assert_eq!(m20().friction_coefficient(), 0.2);
        assert_eq!(m22().friction_coefficient(), 0.5);
    }

    #[test]
    fn test_bolt_strengths() {
        assert_eq!(m20().fub().unwrap(), 800.0);
        assert_eq!(m20().fy().unwrap(), 640.0);
        assert_eq!(m22().fub().unwrap(), 1000.0);
        assert_eq!(m22().fy().unwrap(), 900.0);
    }

    #[test]
    fn test_shear_factor() {
        assert_eq!(m20().shear_factor().unwrap(), 0.6);
        assert_eq!(m22().shear_factor().unwrap(), 0.5);
    }

    #[test]
    fn test_hole_type_factors() {
        assert_eq!(m20().slip_factor(), 1.0);
        assert_eq!(m22().slip_factor(), 0.6);
        assert_eq!(m22().bearing_reduction(), 0.7);
    }

    #[test]
    fn test_hole_diameter_default() {
        assert_eq!(m20().hole_diameter_mm(), 21.0);
        assert_eq!(m22().hole_diameter_mm(), 24.0);
        assert_eq!(BoltInput::new(27, "8.8").hole_diameter_mm(), 30.0);

        let mut bolt = m20();
        bolt.d0_mm = Some(22.0);
        assert_eq!(bolt.hole_diameter_mm(), 22.0);
    }

    #[test]
    fn test_pretension_force() {
        // 0.7 × 1000 × 303 = 212.1 kN
        assert!((m22().pretension_force_kn().unwrap() - 212.1).abs() < 0.05);
    }

    #[test]
    fn test_validate() {
        assert!(m20().validate().is_ok());
        assert!(m22().validate().is_ok());

        let mut bolt = m20();
        bolt.shear_planes = 0;
        assert!(bolt.validate().is_err());

        let mut bolt = m20();
        bolt.tension_class = "88".to_string();
        assert!(bolt.validate().is_err());

        let mut bolt = m20();
        bolt.d0_mm = Some(19.0);
        assert!(bolt.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let bolt = m22();
        let json = serde_json::to_string_pretty(&bolt).unwrap();
        let roundtrip: BoltInput = serde_json::from_str(&json).unwrap();
        assert_eq!(bolt, roundtrip);
    }
}
