//! # Unit Types
//!
//! Type-safe wrappers for the quantities the engine trades in. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just thin wrappers over a number).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The engine uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! API structs keep raw numeric fields with unit-suffixed names
//! (`area_sqft`, `total_cost`); the wrappers are the typed accessors.
//!
//! ## Units
//!
//! - Area: square feet (sqft, the plinth-area unit), square meters (sqm)
//! - Money: rupees (whole currency units, amounts are rounded)
//! - Duration: working days
//!
//! ## Example
//!
//! ```rust
//! use quote_core::units::{SqFt, SqM, Rupees};
//!
//! let area = SqM(100.0);
//! let area_sqft: SqFt = area.into();
//! assert!((area_sqft.0 - 1076.39).abs() < 0.01);
//!
//! let cost = Rupees(2_420_000);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Square feet per square meter
const SQFT_PER_SQM: f64 = 10.7639;

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet (plinth area)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqM> for SqFt {
    fn from(sqm: SqM) -> Self {
        SqFt(sqm.0 * SQFT_PER_SQM)
    }
}

impl From<SqFt> for SqM {
    fn from(sqft: SqFt) -> Self {
        SqM(sqft.0 / SQFT_PER_SQM)
    }
}

// ============================================================================
// Money
// ============================================================================

/// Money in whole rupees
///
/// All computed amounts are rounded to whole currency units, so money is
/// carried as an integer to keep JSON output free of float noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(pub i64);

impl Rupees {
    /// Round a raw computed amount to whole rupees
    pub fn from_raw(amount: f64) -> Self {
        Rupees(amount.round() as i64)
    }
}

// ============================================================================
// Duration
// ============================================================================

/// Duration in working days (weekends excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Days(pub u32);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty, $raw:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<$raw> for $type {
            type Output = Self;
            fn mul(self, rhs: $raw) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<$raw> for $type {
            type Output = Self;
            fn div(self, rhs: $raw) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw value
            pub fn value(self) -> $raw {
                self.0
            }

            /// Create from a raw value
            pub fn new(value: $raw) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(SqFt, f64);
impl_arithmetic!(SqM, f64);
impl_arithmetic!(Rupees, i64);
impl_arithmetic!(Days, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqm_to_sqft() {
        let sqm = SqM(100.0);
        let sqft: SqFt = sqm.into();
        assert!((sqft.0 - 1076.39).abs() < 0.01);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let sqft = SqFt(1500.0);
        let back: SqFt = SqM::from(sqft).into();
        assert!((back.0 - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_rupees_rounding() {
        assert_eq!(Rupees::from_raw(2419.5), Rupees(2420));
        assert_eq!(Rupees::from_raw(2419.4), Rupees(2419));
    }

    #[test]
    fn test_arithmetic() {
        let a = Rupees(1000);
        let b = Rupees(500);
        assert_eq!((a + b).0, 1500);
        assert_eq!((a - b).0, 500);
        assert_eq!((a * 2).0, 2000);
        assert_eq!((a / 2).0, 500);
    }

    #[test]
    fn test_serialization() {
        let days = Days(42);
        let json = serde_json::to_string(&days).unwrap();
        assert_eq!(json, "42");

        let roundtrip: Days = serde_json::from_str(&json).unwrap();
        assert_eq!(days, roundtrip);
    }
}
