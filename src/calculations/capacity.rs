//! # Bolt Design Resistances
//!
//! Design resistances of a single bolt per NS-EN 1993-1-8 Table 3.4 and
//! section 3.9, evaluated from a [`BoltInput`]. All resistances are
//! reported in kN with γM2 = γM3 = 1.25 applied.
//!
//! ## Example
//!
//! ```rust
//! use joints_core::calculations::bolt::BoltInput;
//! use joints_core::calculations::capacity::calculate;
//!
//! let bolt = BoltInput::new(20, "8.8");
//! let result = calculate(&bolt)?;
//!
//! println!("F_v_Rd = {:.1} kN", result.shear_capacity_kn);
//! println!("F_t_Rd = {:.1} kN", result.tension_capacity_kn);
//! # Ok::<(), joints_core::errors::CalcError>(())
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculations::bolt::BoltInput;
use crate::errors::{CalcError, CalcResult};
use crate::factors::{GAMMA_M2, GAMMA_M3};

/// Design resistances and the factors they were built from.
///
/// Bearing and punching shear are `None` when the input carries no plate
/// data.
///
/// ## JSON Example
///
/// ```json
/// {
///   "designation": "M20",
///   "fub_n_mm2": 800.0,
///   "fy_n_mm2": 640.0,
///   "shear_capacity_kn": 120.6,
///   "tension_capacity_kn": 141.1,
///   "slip_capacity_kn": 22.0,
///   "bearing_capacity_kn": null,
///   "punching_capacity_kn": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltCapacityResult {
    /// Size designation (e.g. "M20")
    pub designation: String,

    // === Section properties ===
    /// Gross cross-sectional area A (mm²)
    pub area_mm2: f64,

    /// Tension area As (mm²)
    pub tension_area_mm2: f64,

    /// Mean bolt head diameter dm (mm)
    pub mean_head_diameter_mm: f64,

    /// Hole diameter d0 (mm)
    pub hole_diameter_mm: f64,

    // === Material and reduction factors ===
    /// Ultimate tensile strength fub (N/mm²)
    pub fub_n_mm2: f64,

    /// Yield strength fy (N/mm²)
    pub fy_n_mm2: f64,

    /// Shear plane factor αv
    pub shear_factor: f64,

    /// Countersunk head reduction k2
    pub countersink_factor: f64,

    /// Friction coefficient μ
    pub friction_coefficient: f64,

    /// Hole-type slip factor ks
    pub slip_factor: f64,

    /// Hole-type bearing reduction r1
    pub bearing_reduction: f64,

    // === Design resistances ===
    /// Preload force F_p_C (kN)
    pub pretension_force_kn: f64,

    /// Shear resistance F_v_Rd over all shear planes (kN)
    pub shear_capacity_kn: f64,

    /// Tension resistance F_t_Rd (kN)
    pub tension_capacity_kn: f64,

    /// Slip resistance F_s_Rd (kN)
    pub slip_capacity_kn: f64,

    /// Bearing resistance F_b_Rd (kN), if plate data was supplied
    pub bearing_capacity_kn: Option<f64>,

    /// Punching shear resistance B_p_Rd (kN), if plate data was supplied
    pub punching_capacity_kn: Option<f64>,
}

/// Shear resistance F_v_Rd over all shear planes (kN).
///
/// Through the threaded part: αv·fub·As·n/γM2. Through the shank the shear
/// plane factor is 0.6 regardless of property class and the gross area
/// governs.
pub fn shear_capacity_kn(input: &BoltInput) -> CalcResult<f64> {
    let fub = input.fub()?;
    let n = input.shear_planes as f64;
    let (factor, area) = if input.threads_in_shear_plane {
        (input.shear_factor()?, input.tension_area_mm2()?)
    } else {
        (0.6, input.area_mm2())
    };
    Ok(factor * fub * area * n / GAMMA_M2 / 1000.0)
}

/// Tension resistance F_t_Rd = k2·fub·As/γM2 (kN)
pub fn tension_capacity_kn(input: &BoltInput) -> CalcResult<f64> {
    let k2 = input.countersink_factor()?;
    Ok(k2 * input.fub()? * input.tension_area_mm2()? / GAMMA_M2 / 1000.0)
}

/// Slip resistance of a preloaded bolt, F_s_Rd = ks·n·μ·F_p_C/γM3 (kN)
pub fn slip_capacity_kn(input: &BoltInput) -> CalcResult<f64> {
    let n = input.shear_planes as f64;
    Ok(input.slip_factor() * n * input.friction_coefficient() * input.pretension_force_kn()?
        / GAMMA_M3)
}

/// Bearing resistance F_b_Rd = r1·k1·αb·fu·d·t/γM2 (kN).
///
/// αb is taken from the supplied distances in the force direction (e1
/// and/or p1) together with fub/fu; k1 from the distances normal to the
/// force (e2 and/or p2). At least one distance in each direction is
/// required, as are the plate thickness and strength.
pub fn bearing_capacity_kn(input: &BoltInput) -> CalcResult<f64> {
    let plate = input
        .plate
        .as_ref()
        .ok_or_else(|| CalcError::missing_field("plate"))?;
    plate.validate()?;

    let d0 = input.hole_diameter_mm();
    let fu = plate.fu_n_mm2;

    let ad = match (plate.e1_mm, plate.p1_mm) {
        (Some(e1), Some(p1)) => f64::min(e1 / (3.0 * d0), p1 / (3.0 * d0) - 0.25),
        (Some(e1), None) => e1 / (3.0 * d0),
        (None, Some(p1)) => p1 / (3.0 * d0) - 0.25,
        (None, None) => return Err(CalcError::missing_field("plate.e1_mm or plate.p1_mm")),
    };
    let ab = ad.min(input.fub()? / fu).min(1.0);

    let k1 = match (plate.e2_mm, plate.p2_mm) {
        (Some(e2), Some(p2)) => f64::min(2.8 * e2 / d0 - 1.7, 1.4 * p2 / d0 - 1.7),
        (Some(e2), None) => 2.8 * e2 / d0 - 1.7,
        (None, Some(p2)) => 1.4 * p2 / d0 - 1.7,
        (None, None) => return Err(CalcError::missing_field("plate.e2_mm or plate.p2_mm")),
    }
    .min(2.5);

    let d = input.d_mm as f64;
    let r1 = input.bearing_reduction();
    Ok(r1 * k1 * ab * fu * d * plate.thickness_mm / GAMMA_M2 / 1000.0)
}

/// Punching shear resistance B_p_Rd = 0.6·π·dm·t·fu/γM2 (kN)
pub fn punching_capacity_kn(input: &BoltInput) -> CalcResult<f64> {
    let plate = input
        .plate
        .as_ref()
        .ok_or_else(|| CalcError::missing_field("plate"))?;
    plate.validate()?;

    let dm = input.mean_head_diameter_mm()?;
    Ok(0.6 * PI * dm * plate.thickness_mm * plate.fu_n_mm2 / GAMMA_M2 / 1000.0)
}

/// Evaluate all design resistances for one bolt.
///
/// Bearing and punching shear are skipped (not errors) when the input has
/// no plate data; with plate data present, incomplete distances for the
/// bearing check do surface as errors.
pub fn calculate(input: &BoltInput) -> CalcResult<BoltCapacityResult> {
    input.validate()?;

    let size = input.size()?;
    let class = input.class()?;

    let (bearing, punching) = if input.plate.is_some() {
        (
            Some(bearing_capacity_kn(input)?),
            Some(punching_capacity_kn(input)?),
        )
    } else {
        (None, None)
    };

    Ok(BoltCapacityResult {
        designation: size.to_string(),
        area_mm2: input.area_mm2(),
        tension_area_mm2: size.tension_area_mm2(),
        mean_head_diameter_mm: size.mean_head_diameter_mm(),
        hole_diameter_mm: input.hole_diameter_mm(),
        fub_n_mm2: class.fub(),
        fy_n_mm2: class.fy(),
        shear_factor: class.shear_factor(),
        countersink_factor: input.countersink_factor()?,
        friction_coefficient: input.friction_coefficient(),
        slip_factor: input.slip_factor(),
        bearing_reduction: input.bearing_reduction(),
        pretension_force_kn: input.pretension_force_kn()?,
        shear_capacity_kn: shear_capacity_kn(input)?,
        tension_capacity_kn: tension_capacity_kn(input)?,
        slip_capacity_kn: slip_capacity_kn(input)?,
        bearing_capacity_kn: bearing,
        punching_capacity_kn: punching,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::bolt::PlateInput;
    use crate::factors::{FrictionClass, HoleType};

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

    fn plate() -> PlateInput {
        PlateInput {
            e1_mm: Some(40.0),
            e2_mm: Some(30.0),
            p1_mm: None,
            p2_mm: None,
            thickness_mm: 10.0,
            fu_n_mm2: 510.0,
        }
    }

    #[test]
    fn test_shear_capacity_through_shank() {
        // 0.6 × 800 × 314.16 / 1.25 = 120.6 kN
        assert!((shear_capacity_kn(&m20()).unwrap() - 120.6).abs() < 0.1);
    }

    #[test]
    fn test_shear_capacity_through_threads() {
        let mut bolt = m20();
        bolt.threads_in_shear_plane = true;
        // 0.6 × 800 × 245 / 1.25 = 94.1 kN
        assert!((shear_capacity_kn(&bolt).unwrap() - 94.1).abs() < 0.1);
    }

    #[test]
    fn test_shear_capacity_two_planes() {
        let mut bolt = m20();
        bolt.shear_planes = 2;
        assert!((shear_capacity_kn(&bolt).unwrap() - 241.3).abs() < 0.1);
    }

    #[test]
    fn test_tension_capacity() {
        // 0.9 × 800 × 245 / 1.25 = 141.1 kN
        assert!((tension_capacity_kn(&m20()).unwrap() - 141.1).abs() < 0.1);
        // countersunk: 0.63 × 1000 × 303 / 1.25 = 152.7 kN
        assert!((tension_capacity_kn(&m22()).unwrap() - 152.7).abs() < 0.1);
    }

    #[test]
    fn test_slip_capacity() {
        // 1.0 × 1 × 0.2 × 137.2 / 1.25 = 22.0 kN
        assert!((slip_capacity_kn(&m20()).unwrap() - 21.95).abs() < 0.05);
        // 0.6 × 1 × 0.5 × 212.1 / 1.25 = 50.9 kN
        assert!((slip_capacity_kn(&m22()).unwrap() - 50.9).abs() < 0.05);
    }

    #[test]
    fn test_bearing_capacity() {
        let mut bolt = m20();
        bolt.plate = Some(plate());
        // αb = 40/(3×21) = 0.635, k1 = min(2.8×30/21 − 1.7, 2.5) = 2.3
        // 2.3 × 0.635 × 510 × 20 × 10 / 1.25 = 119.2 kN
        assert!((bearing_capacity_kn(&bolt).unwrap() - 119.2).abs() < 0.1);
    }

    #[test]
    fn test_bearing_needs_plate() {
        let err = bearing_capacity_kn(&m20()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");

        let mut bolt = m20();
        bolt.plate = Some(PlateInput {
            e1_mm: None,
            e2_mm: Some(30.0),
            p1_mm: None,
            p2_mm: None,
            thickness_mm: 10.0,
            fu_n_mm2: 510.0,
        });
        assert_eq!(
            bearing_capacity_kn(&bolt).unwrap_err().error_code(),
            "MISSING_FIELD"
        );
    }

    #[test]
    fn test_punching_capacity() {
        let mut bolt = m20();
        bolt.plate = Some(plate());
        // 0.6 × π × 31.1 × 10 × 510 / 1.25 = 239.2 kN
        assert!((punching_capacity_kn(&bolt).unwrap() - 239.2).abs() < 0.1);
    }

    #[test]
    fn test_calculate_without_plate() {
        let result = calculate(&m20()).unwrap();
        assert_eq!(result.designation, "M20");
        assert_eq!(result.tension_area_mm2, 245.0);
        assert_eq!(result.fub_n_mm2, 800.0);
        assert_eq!(result.fy_n_mm2, 640.0);
        assert_eq!(result.countersink_factor, 0.9);
        assert!((result.shear_capacity_kn - 120.6).abs() < 0.1);
        assert!(result.bearing_capacity_kn.is_none());
        assert!(result.punching_capacity_kn.is_none());
    }

    #[test]
    fn test_calculate_with_plate() {
        let mut bolt = m20();
        bolt.plate = Some(plate());
        let result = calculate(&bolt).unwrap();
        assert!(result.bearing_capacity_kn.is_some());
        assert!(result.punching_capacity_kn.is_some());
    }

    #[test]
    fn test_calculate_rejects_invalid_input() {
        let mut bolt = m20();
        bolt.countersink_depth_mm = -0.5;
        assert!(calculate(&bolt).is_err());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&m22()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: BoltCapacityResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
