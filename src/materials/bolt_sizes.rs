//! Standard Metric Bolt Sizes
//!
//! Tabulated properties for the metric bolt designations covered by the
//! connection tables in NS-EN 1993-1-8: tension (stress) area, mean head
//! diameter for punching shear, and the nominal hole clearance rule.
//!
//! ## Designations
//!
//! Sizes are keyed by the ISO metric designation (M10 .. M36). Diameters
//! without a tabulated entry (e.g. 15 mm) are rejected at lookup time.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard metric bolt size designation
///
/// Carries the tabulated section properties that cannot be derived from the
/// nominal diameter alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BoltSize {
    /// M10 (As = 58 mm²)
    M10,
    /// M12 (As = 84.3 mm²)
    M12,
    /// M16 (As = 157 mm²)
    M16,
    /// M20 (As = 245 mm²)
    #[default]
    M20,
    /// M22 (As = 303 mm²)
    M22,
    /// M24 (As = 353 mm²)
    M24,
    /// M27 (As = 459 mm²)
    M27,
    /// M30 (As = 561 mm²)
    M30,
    /// M36 (As = 817 mm²)
    M36,
}

impl BoltSize {
    /// All standard sizes, smallest first
    pub const ALL: [BoltSize; 9] = [
        BoltSize::M10,
        BoltSize::M12,
        BoltSize::M16,
        BoltSize::M20,
        BoltSize::M22,
        BoltSize::M24,
        BoltSize::M27,
        BoltSize::M30,
        BoltSize::M36,
    ];

    /// Resolve a nominal diameter in millimeters to its designation.
    ///
    /// Fails with [`CalcError::LookupNotFound`] for diameters without a
    /// tabulated entry.
    pub fn from_diameter(d_mm: u32) -> CalcResult<Self> {
        match d_mm {
            10 => Ok(BoltSize::M10),
            12 => Ok(BoltSize::M12),
            16 => Ok(BoltSize::M16),
            20 => Ok(BoltSize::M20),
            22 => Ok(BoltSize::M22),
            24 => Ok(BoltSize::M24),
            27 => Ok(BoltSize::M27),
            30 => Ok(BoltSize::M30),
            36 => Ok(BoltSize::M36),
            _ => Err(CalcError::lookup_not_found(
                "standard bolt sizes",
                format!("M{}", d_mm),
            )),
        }
    }

    /// Nominal diameter d (mm)
    pub fn diameter_mm(&self) -> f64 {
        match self {
            BoltSize::M10 => 10.0,
            BoltSize::M12 => 12.0,
            BoltSize::M16 => 16.0,
            BoltSize::M20 => 20.0,
            BoltSize::M22 => 22.0,
            BoltSize::M24 => 24.0,
            BoltSize::M27 => 27.0,
            BoltSize::M30 => 30.0,
            BoltSize::M36 => 36.0,
        }
    }

    /// Tension (stress) area As (mm²)
    pub fn tension_area_mm2(&self) -> f64 {
        match self {
            BoltSize::M10 => 58.0,
            BoltSize::M12 => 84.3,
            BoltSize::M16 => 157.0,
            BoltSize::M20 => 245.0,
            BoltSize::M22 => 303.0,
            BoltSize::M24 => 353.0,
            BoltSize::M27 => 459.0,
            BoltSize::M30 => 561.0,
            BoltSize::M36 => 817.0,
        }
    }

    /// Mean of the across-points and across-flats dimension of the bolt
    /// head, dm (mm). Used in the punching shear resistance.
    pub fn mean_head_diameter_mm(&self) -> f64 {
        match self {
            BoltSize::M10 => 15.6,
            BoltSize::M12 => 18.7,
            BoltSize::M16 => 24.9,
            BoltSize::M20 => 31.1,
            BoltSize::M22 => 34.2,
            BoltSize::M24 => 37.3,
            BoltSize::M27 => 42.0,
            BoltSize::M30 => 46.7,
            BoltSize::M36 => 56.0,
        }
    }

    /// Designation string (e.g. "M20")
    pub fn display_name(&self) -> &'static str {
        match self {
            BoltSize::M10 => "M10",
            BoltSize::M12 => "M12",
            BoltSize::M16 => "M16",
            BoltSize::M20 => "M20",
            BoltSize::M22 => "M22",
            BoltSize::M24 => "M24",
            BoltSize::M27 => "M27",
            BoltSize::M30 => "M30",
            BoltSize::M36 => "M36",
        }
    }
}

impl std::fmt::Display for BoltSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Nominal hole diameter for a bolt diameter when none is specified.
///
/// Standard clearance add-on: +1 mm up to M20, +2 mm up to M26, +3 mm above.
pub fn nominal_hole_diameter_mm(d_mm: u32) -> f64 {
    if d_mm <= 20 {
        (d_mm + 1) as f64
    } else if d_mm <= 26 {
        (d_mm + 2) as f64
    } else {
        (d_mm + 3) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_diameter() {
        assert_eq!(BoltSize::from_diameter(20).unwrap(), BoltSize::M20);
        assert_eq!(BoltSize::from_diameter(36).unwrap(), BoltSize::M36);
    }

    #[test]
    fn test_unknown_diameter() {
        let err = BoltSize::from_diameter(15).unwrap_err();
        assert_eq!(err.error_code(), "LOOKUP_NOT_FOUND");
        assert!(err.to_string().contains("M15"));
    }

    #[test]
    fn test_tension_areas() {
        assert_eq!(BoltSize::M20.tension_area_mm2(), 245.0);
        assert_eq!(BoltSize::M22.tension_area_mm2(), 303.0);
        assert_eq!(BoltSize::M12.tension_area_mm2(), 84.3);
    }

    #[test]
    fn test_mean_head_diameter() {
        assert_eq!(BoltSize::M20.mean_head_diameter_mm(), 31.1);
    }

    #[test]
    fn test_nominal_hole_clearance() {
        assert_eq!(nominal_hole_diameter_mm(12), 13.0);
        assert_eq!(nominal_hole_diameter_mm(20), 21.0);
        assert_eq!(nominal_hole_diameter_mm(22), 24.0);
        assert_eq!(nominal_hole_diameter_mm(24), 26.0);
        assert_eq!(nominal_hole_diameter_mm(27), 30.0);
        assert_eq!(nominal_hole_diameter_mm(36), 39.0);
    }

    #[test]
    fn test_designations_cover_all_sizes() {
        for size in BoltSize::ALL {
            let d = size.diameter_mm() as u32;
            assert_eq!(BoltSize::from_diameter(d).unwrap(), size);
        }
    }
}
