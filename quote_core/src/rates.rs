//! # Rate Card (2024)
//!
//! The process-wide construction rate card: per-square-foot rates for every
//! cost line item, quality-tier multipliers, and flat per-phase rates.
//!
//! All rates are in rupees per square foot of plinth area and reflect the
//! 2024 rate card. The tables are immutable for the process lifetime.
//!
//! Quality multipliers apply to materials and labor only. The `Other`
//! category (design, supervision, permits, contingency) is quality-invariant:
//! professional and regulatory costs don't scale with finish quality.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::rates::{QualityTier, RATE_CARD, CostCategory};
//!
//! let standard_rate: f64 = RATE_CARD.iter().map(|line| line.rate_per_sqft).sum();
//! assert_eq!(standard_rate, 2420.0);
//! assert_eq!(QualityTier::Premium.multiplier(), 1.25);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

/// Cost categories in the estimate breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    /// Construction materials (cement, steel, bricks, ...)
    Materials,
    /// Site labor (masonry, concreting, carpentry, ...)
    Labor,
    /// Professional and regulatory costs (design, supervision, permits, contingency)
    Other,
}

impl CostCategory {
    /// All categories in breakdown order
    pub const ALL: [CostCategory; 3] = [
        CostCategory::Materials,
        CostCategory::Labor,
        CostCategory::Other,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CostCategory::Materials => "Materials",
            CostCategory::Labor => "Labor",
            CostCategory::Other => "Other",
        }
    }

    /// Whether the quality-tier multiplier applies to this category
    pub fn is_quality_scaled(&self) -> bool {
        !matches!(self, CostCategory::Other)
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Quality tiers for finish level
///
/// The tier scales materials and labor rates; `Other` costs are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    /// Budget finish
    Basic,
    /// Standard finish (rate-card baseline)
    Standard,
    /// Premium finish
    Premium,
    /// Luxury finish
    Luxury,
}

impl QualityTier {
    /// All quality tiers in ascending cost order
    pub const ALL: [QualityTier; 4] = [
        QualityTier::Basic,
        QualityTier::Standard,
        QualityTier::Premium,
        QualityTier::Luxury,
    ];

    /// Multiplier applied to materials and labor rates
    pub fn multiplier(&self) -> f64 {
        match self {
            QualityTier::Basic => 0.85,
            QualityTier::Standard => 1.0,
            QualityTier::Premium => 1.25,
            QualityTier::Luxury => 1.6,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "budget" | "economy" => Ok(QualityTier::Basic),
            "standard" | "std" => Ok(QualityTier::Standard),
            "premium" => Ok(QualityTier::Premium),
            "luxury" | "lux" => Ok(QualityTier::Luxury),
            _ => Err(QuoteError::invalid_input(
                "quality_tier",
                s,
                "Expected one of: basic, standard, premium, luxury",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            QualityTier::Basic => "Basic",
            QualityTier::Standard => "Standard",
            QualityTier::Premium => "Premium",
            QualityTier::Luxury => "Luxury",
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One line of the rate card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateLine {
    /// Line item name (e.g. "cement", "masonry", "design")
    pub name: &'static str,
    /// Cost category this line belongs to
    pub category: CostCategory,
    /// Standard-tier rate in rupees per square foot
    pub rate_per_sqft: f64,
}

/// The 2024 rate card
///
/// Standard-tier all-in rate: 2420 Rs/sqft
/// (materials 1630 + labor 570 + other 220).
pub const RATE_CARD: &[RateLine] = &[
    // Materials: 1630 Rs/sqft
    RateLine { name: "cement", category: CostCategory::Materials, rate_per_sqft: 420.0 },
    RateLine { name: "steel", category: CostCategory::Materials, rate_per_sqft: 260.0 },
    RateLine { name: "bricks", category: CostCategory::Materials, rate_per_sqft: 180.0 },
    RateLine { name: "sand", category: CostCategory::Materials, rate_per_sqft: 130.0 },
    RateLine { name: "aggregate", category: CostCategory::Materials, rate_per_sqft: 110.0 },
    RateLine { name: "wood", category: CostCategory::Materials, rate_per_sqft: 120.0 },
    RateLine { name: "tiles", category: CostCategory::Materials, rate_per_sqft: 140.0 },
    RateLine { name: "paint", category: CostCategory::Materials, rate_per_sqft: 60.0 },
    RateLine { name: "electrical", category: CostCategory::Materials, rate_per_sqft: 110.0 },
    RateLine { name: "plumbing", category: CostCategory::Materials, rate_per_sqft: 100.0 },
    // Labor: 570 Rs/sqft
    RateLine { name: "excavation", category: CostCategory::Labor, rate_per_sqft: 40.0 },
    RateLine { name: "masonry", category: CostCategory::Labor, rate_per_sqft: 160.0 },
    RateLine { name: "concreting", category: CostCategory::Labor, rate_per_sqft: 110.0 },
    RateLine { name: "carpentry", category: CostCategory::Labor, rate_per_sqft: 70.0 },
    RateLine { name: "electrical_fitting", category: CostCategory::Labor, rate_per_sqft: 50.0 },
    RateLine { name: "plumbing_work", category: CostCategory::Labor, rate_per_sqft: 45.0 },
    RateLine { name: "painting", category: CostCategory::Labor, rate_per_sqft: 40.0 },
    RateLine { name: "flooring", category: CostCategory::Labor, rate_per_sqft: 55.0 },
    // Other: 220 Rs/sqft, quality-invariant
    RateLine { name: "design", category: CostCategory::Other, rate_per_sqft: 60.0 },
    RateLine { name: "supervision", category: CostCategory::Other, rate_per_sqft: 50.0 },
    RateLine { name: "permits", category: CostCategory::Other, rate_per_sqft: 30.0 },
    RateLine { name: "contingency", category: CostCategory::Other, rate_per_sqft: 80.0 },
];

/// Work phases with a flat-rate quick lookup
///
/// Used for "what would just the foundation cost?" style queries. These are
/// blended rates, independent of the itemized rate card above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkPhase {
    Foundation,
    Structure,
    Roofing,
    Masonry,
    Finishing,
}

impl WorkPhase {
    /// All work phases in construction order
    pub const ALL: [WorkPhase; 5] = [
        WorkPhase::Foundation,
        WorkPhase::Structure,
        WorkPhase::Roofing,
        WorkPhase::Masonry,
        WorkPhase::Finishing,
    ];

    /// Flat rate in rupees per square foot
    pub fn rate_per_sqft(&self) -> f64 {
        match self {
            WorkPhase::Foundation => 380.0,
            WorkPhase::Structure => 720.0,
            WorkPhase::Roofing => 240.0,
            WorkPhase::Masonry => 410.0,
            WorkPhase::Finishing => 670.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "foundation" => Ok(WorkPhase::Foundation),
            "structure" => Ok(WorkPhase::Structure),
            "roofing" => Ok(WorkPhase::Roofing),
            "masonry" => Ok(WorkPhase::Masonry),
            "finishing" => Ok(WorkPhase::Finishing),
            _ => Err(QuoteError::phase_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkPhase::Foundation => "Foundation",
            WorkPhase::Structure => "Structure",
            WorkPhase::Roofing => "Roofing",
            WorkPhase::Masonry => "Masonry",
            WorkPhase::Finishing => "Finishing",
        }
    }
}

impl std::fmt::Display for WorkPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
