//! # EC3 Connection Factors
//!
//! Reduction factors and partial safety factors for bolted connections per
//! NS-EN 1993-1-8.
//!
//! ## Overview
//!
//! Design resistances are tabulated nominal strengths multiplied by the
//! applicable factors and divided by a partial safety factor:
//!
//! ```text
//! F_v_Rd = αv × fub × A  / γM2     (shear)
//! F_t_Rd = k2 × fub × As / γM2     (tension)
//! F_s_Rd = ks × n × μ × F_p_C / γM3  (slip)
//! ```
//!
//! ## Factor Summary
//!
//! | Factor | Description                      | Values      |
//! |--------|----------------------------------|-------------|
//! | αv     | Shear plane factor               | 0.5 or 0.6  |
//! | k2     | Countersunk head reduction       | 0.63 or 0.9 |
//! | ks     | Hole-type slip factor            | 0.6 - 1.0   |
//! | r1     | Hole-type bearing reduction      | 0.6 - 1.0   |
//! | μ      | Friction coefficient (class A-D) | 0.2 - 0.5   |

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Code Section References
// ============================================================================

/// NS-EN 1993-1-8 section references for resistance checks and factors.
pub mod ec3_ref {
    // Resistance checks
    /// Shear resistance per shear plane
    pub const SHEAR: &str = "EN 1993-1-8 Table 3.4";
    /// Tension resistance
    pub const TENSION: &str = "EN 1993-1-8 Table 3.4";
    /// Bearing resistance
    pub const BEARING: &str = "EN 1993-1-8 Table 3.4";
    /// Punching shear resistance
    pub const PUNCHING: &str = "EN 1993-1-8 Table 3.4";
    /// Slip resistance of preloaded bolts
    pub const SLIP: &str = "EN 1993-1-8 3.9.1";
    /// Preload force
    pub const PRETENSION: &str = "EN 1993-1-8 3.6.1(2)";

    // Factors
    /// Hole-type factor ks
    pub const KS: &str = "EN 1993-1-8 Table 3.6";
    /// Friction (slip) coefficient per surface class
    pub const FRICTION: &str = "EN 1993-1-8 Table 3.7";
    /// Countersunk bolt reduction k2
    pub const K2: &str = "EN 1993-1-8 Table 3.4";
}

/// Partial safety factor γM2 (resistance of bolts in shear, tension, bearing)
pub const GAMMA_M2: f64 = 1.25;

/// Partial safety factor γM3 (slip resistance at ultimate limit state)
pub const GAMMA_M3: f64 = 1.25;

/// Friction class of the faying surfaces per EN 1993-1-8 Table 3.7
///
/// The class describes the surface treatment of the connected plates and
/// sets the friction coefficient achievable in a preloaded connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FrictionClass {
    /// Blasted surfaces, no pitting: μ = 0.5
    A,
    /// Blasted and coated surfaces: μ = 0.4
    B,
    /// Wire-brushed or flame-cleaned surfaces: μ = 0.3
    C,
    /// Untreated surfaces: μ = 0.2
    #[default]
    D,
}

impl FrictionClass {
    /// All friction classes, best surface preparation first
    pub const ALL: [FrictionClass; 4] = [
        FrictionClass::A,
        FrictionClass::B,
        FrictionClass::C,
        FrictionClass::D,
    ];

    /// Parse the code letter, e.g. `"A"`
    pub fn from_letter(letter: &str) -> CalcResult<Self> {
        match letter {
            "A" | "a" => Ok(FrictionClass::A),
            "B" | "b" => Ok(FrictionClass::B),
            "C" | "c" => Ok(FrictionClass::C),
            "D" | "d" => Ok(FrictionClass::D),
            _ => Err(CalcError::invalid_input(
                "friction_class",
                letter,
                "Friction class must be one of A, B, C, D",
            )),
        }
    }

    /// Friction coefficient μ for this surface class
    pub fn coefficient(&self) -> f64 {
        match self {
            FrictionClass::A => 0.5,
            FrictionClass::B => 0.4,
            FrictionClass::C => 0.3,
            FrictionClass::D => 0.2,
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            FrictionClass::A => "A (0.50)",
            FrictionClass::B => "B (0.40)",
            FrictionClass::C => "C (0.30)",
            FrictionClass::D => "D (0.20)",
        }
    }
}

impl std::fmt::Display for FrictionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for FrictionClass {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        FrictionClass::from_letter(s)
    }
}

/// Bolt hole type per EN 1993-1-8 Table 3.6
///
/// Classifies the hole clearance and shape. Hole types are conventionally
/// numbered 1 through 5; [`HoleType::from_index`] accepts that numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HoleType {
    /// Type 1: normal clearance hole
    #[default]
    Normal,
    /// Type 2: oversized hole
    Oversized,
    /// Type 3: short slotted hole, slot transverse to the force
    ShortSlotted,
    /// Type 4: long slotted hole, slot transverse to the force
    LongSlotted,
    /// Type 5: long slotted hole, slot parallel to the force
    LongSlottedParallel,
}

impl HoleType {
    /// All hole types in conventional (1-5) order
    pub const ALL: [HoleType; 5] = [
        HoleType::Normal,
        HoleType::Oversized,
        HoleType::ShortSlotted,
        HoleType::LongSlotted,
        HoleType::LongSlottedParallel,
    ];

    /// Resolve the conventional 1-based hole type number
    pub fn from_index(index: u8) -> CalcResult<Self> {
        match index {
            1 => Ok(HoleType::Normal),
            2 => Ok(HoleType::Oversized),
            3 => Ok(HoleType::ShortSlotted),
            4 => Ok(HoleType::LongSlotted),
            5 => Ok(HoleType::LongSlottedParallel),
            _ => Err(CalcError::invalid_input(
                "hole_type",
                index.to_string(),
                "Hole type must be between 1 and 5",
            )),
        }
    }

    /// The conventional 1-based hole type number
    pub fn index(&self) -> u8 {
        match self {
            HoleType::Normal => 1,
            HoleType::Oversized => 2,
            HoleType::ShortSlotted => 3,
            HoleType::LongSlotted => 4,
            HoleType::LongSlottedParallel => 5,
        }
    }

    /// Slip factor ks used in the slip resistance of preloaded bolts
    pub fn slip_factor(&self) -> f64 {
        match self {
            HoleType::Normal => 1.0,
            HoleType::Oversized => 0.85,
            HoleType::ShortSlotted => 0.6,
            HoleType::LongSlotted => 0.7,
            HoleType::LongSlottedParallel => 0.63,
        }
    }

    /// Bearing reduction factor r1 applied to the bearing resistance
    pub fn bearing_reduction(&self) -> f64 {
        match self {
            HoleType::Normal => 1.0,
            HoleType::Oversized => 0.8,
            HoleType::ShortSlotted => 0.7,
            HoleType::LongSlotted => 0.65,
            HoleType::LongSlottedParallel => 0.6,
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            HoleType::Normal => "Normal",
            HoleType::Oversized => "Oversized",
            HoleType::ShortSlotted => "Short slotted (transverse)",
            HoleType::LongSlotted => "Long slotted (transverse)",
            HoleType::LongSlottedParallel => "Long slotted (parallel)",
        }
    }
}

impl std::fmt::Display for HoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Countersunk head reduction factor k2.
///
/// 0.9 for an ordinary bolt head (depth exactly zero), 0.63 for any
/// countersunk hole. A negative depth is rejected.
pub fn countersink_factor(depth_mm: f64) -> CalcResult<f64> {
    if depth_mm == 0.0 {
        Ok(0.9)
    } else if depth_mm > 0.0 {
        Ok(0.63)
    } else {
        Err(CalcError::invalid_input(
            "countersink_depth_mm",
            depth_mm.to_string(),
            "Countersink depth must be given as zero or a positive value",
        ))
    }
}
