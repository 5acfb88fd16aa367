//! # Quote Calculations
//!
//! This module contains both calculation units. Each follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` types - Calculation results (JSON-serializable)
//! - A pure function from input to `Result<_, QuoteError>`
//!
//! Both units are stateless functions over constant tables established at
//! process start: no I/O, no shared mutable state, safe under any amount of
//! concurrency, and bounded sub-millisecond work per call.
//!
//! ## Available Calculations
//!
//! - [`cost`] - Itemized cost estimation over the rate card
//! - [`schedule`] - Working-day construction timeline generation

pub mod cost;
pub mod schedule;

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

// Re-export commonly used types
pub use cost::{CostEstimate, EstimateInput, PhaseCost, TierSummary};
pub use schedule::{ProjectType, Timeline, TimelineInput};

/// Shared area precondition: positive and finite.
///
/// The engine owns only the lower bound; upper range limits (the 50,000
/// sqft cap) belong to the caller.
pub(crate) fn validate_area(area_sqft: f64) -> QuoteResult<()> {
    if !area_sqft.is_finite() {
        return Err(QuoteError::invalid_input(
            "area_sqft",
            area_sqft.to_string(),
            "Area must be a finite number",
        ));
    }
    if area_sqft <= 0.0 {
        return Err(QuoteError::invalid_input(
            "area_sqft",
            area_sqft.to_string(),
            "Area must be positive",
        ));
    }
    Ok(())
}

/// Enum wrapper for all quote item types.
///
/// This allows storing heterogeneous items in a single proposal
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuoteItem {
    /// Itemized cost estimate request
    CostEstimate(EstimateInput),
    /// Construction timeline request
    Schedule(TimelineInput),
}

impl QuoteItem {
    /// Get the user-provided label for this item
    pub fn label(&self) -> &str {
        match self {
            QuoteItem::CostEstimate(e) => &e.label,
            QuoteItem::Schedule(t) => &t.label,
        }
    }

    /// Get the item type as a string
    pub fn item_type(&self) -> &'static str {
        match self {
            QuoteItem::CostEstimate(_) => "CostEstimate",
            QuoteItem::Schedule(_) => "Schedule",
        }
    }
}
