//! # Cost Estimator
//!
//! Itemized construction cost estimation over the 2024 rate card.
//!
//! ## Rounding
//!
//! Each line amount is rounded independently (`round(rate * area *
//! multiplier)`), category totals are sums of the rounded lines, and the
//! grand total is the rounded sum of the *unrounded* line costs. The three
//! category totals can therefore drift from the grand total by up to one
//! rupee each. Existing consumers rely on these exact output values, so the
//! rounding order is load-bearing - keep it.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use quote_core::calculations::cost::{estimate, EstimateInput};
//! use quote_core::rates::QualityTier;
//!
//! let input = EstimateInput {
//!     label: "Plot 14 villa".to_string(),
//!     area_sqft: 1000.0,
//!     quality: QualityTier::Standard,
//! };
//!
//! let result = estimate(&input).unwrap();
//!
//! println!("Total: Rs {}", result.total_cost);
//! println!("Rate: Rs {}/sqft", result.rate_per_sqft);
//! assert_eq!(result.rate_per_sqft, 2420);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::QuoteResult;
use crate::rates::{CostCategory, QualityTier, WorkPhase, RATE_CARD};
use crate::units::{Rupees, SqFt};

use super::validate_area;

/// Input parameters for a cost estimate.
///
/// Area is plinth area in square feet. The engine rejects non-positive
/// area but does not enforce an upper bound - range limits belong to the
/// caller (the CLI caps at 50,000 sqft).
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Plot 14 villa",
///   "area_sqft": 1850.0,
///   "quality": "Premium"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateInput {
    /// User label for this estimate (e.g. "Plot 14 villa")
    pub label: String,

    /// Plinth area in square feet
    pub area_sqft: f64,

    /// Finish quality tier
    pub quality: QualityTier,
}

impl EstimateInput {
    /// Validate input parameters.
    pub fn validate(&self) -> QuoteResult<()> {
        validate_area(self.area_sqft)
    }

    /// Get the area as a typed unit
    pub fn area(&self) -> SqFt {
        SqFt(self.area_sqft)
    }
}

/// One priced line item in a category breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Line item name from the rate card
    pub name: String,
    /// Effective rate in rupees per square foot (multiplier applied)
    pub rate_per_sqft: f64,
    /// Rounded line amount in rupees
    pub amount: i64,
}

/// Totals and line items for one cost category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Sum of the rounded line amounts
    pub total: i64,
    /// Itemized lines
    pub items: Vec<LineItem>,
}

/// Three-way cost breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breakdown {
    pub materials: CategoryBreakdown,
    pub labor: CategoryBreakdown,
    pub other: CategoryBreakdown,
}

/// Pie-chart-ready category split
///
/// `value` is the rounded percentage share; because each share is rounded
/// independently, the three values may not sum to exactly 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSlice {
    /// Category display name
    pub name: String,
    /// Rounded percentage of the total
    pub value: i64,
    /// Category amount in rupees
    pub amount: i64,
}

/// Results from a cost estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Plot 14 villa",
///   "area_sqft": 1000.0,
///   "quality": "Standard",
///   "total_cost": 2420000,
///   "rate_per_sqft": 2420,
///   "breakdown": {
///     "materials": { "total": 1630000, "items": [ { "name": "cement", "rate_per_sqft": 420.0, "amount": 420000 } ] },
///     "labor": { "total": 570000, "items": [] },
///     "other": { "total": 220000, "items": [] }
///   },
///   "pie_chart_data": [
///     { "name": "Materials", "value": 67, "amount": 1630000 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Label carried over from the input
    pub label: String,

    /// Plinth area in square feet
    pub area_sqft: f64,

    /// Quality tier used
    pub quality: QualityTier,

    /// Grand total in rupees (rounded sum of unrounded line costs)
    pub total_cost: i64,

    /// All-in rate in rupees per square foot (`round(total / area)`)
    pub rate_per_sqft: i64,

    /// Itemized three-way breakdown
    pub breakdown: Breakdown,

    /// Category split for pie charts
    pub pie_chart_data: Vec<PieSlice>,
}

impl CostEstimate {
    /// Get the grand total as a typed unit
    pub fn total(&self) -> Rupees {
        Rupees(self.total_cost)
    }

    /// Sum of the three category totals
    ///
    /// May differ from `total_cost` by up to 3 rupees (one per category)
    /// due to per-line rounding.
    pub fn breakdown_sum(&self) -> i64 {
        self.breakdown.materials.total + self.breakdown.labor.total + self.breakdown.other.total
    }
}

/// Per-tier summary returned by [`compare_quality_tiers`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierSummary {
    /// Quality tier
    pub tier: QualityTier,
    /// Grand total in rupees
    pub total_cost: i64,
    /// All-in rate in rupees per square foot
    pub rate_per_sqft: i64,
}

/// Result of a flat-rate work-phase cost lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseCost {
    /// The resolved work phase
    pub phase: WorkPhase,
    /// Flat rate in rupees per square foot
    pub rate_per_sqft: f64,
    /// Rounded amount in rupees
    pub amount: i64,
}

/// Calculate an itemized cost estimate.
///
/// This is a pure function over the constant rate card: safe to call from
/// any number of threads, no shared state, no I/O.
///
/// # Arguments
///
/// * `input` - Area, quality tier and label
///
/// # Returns
///
/// * `Ok(CostEstimate)` - Itemized breakdown and totals
/// * `Err(QuoteError::InvalidInput)` - Non-positive or non-finite area
///
/// # Example
///
/// ```rust
/// use quote_core::calculations::cost::{estimate, EstimateInput};
/// use quote_core::rates::QualityTier;
///
/// let input = EstimateInput {
///     label: "Test".to_string(),
///     area_sqft: 1200.0,
///     quality: QualityTier::Basic,
/// };
/// let result = estimate(&input).expect("estimate should succeed");
/// assert!(result.total_cost > 0);
/// ```
pub fn estimate(input: &EstimateInput) -> QuoteResult<CostEstimate> {
    input.validate()?;

    let area = input.area_sqft;
    let mut raw_total = 0.0;
    let mut materials = CategoryBreakdown { total: 0, items: Vec::new() };
    let mut labor = CategoryBreakdown { total: 0, items: Vec::new() };
    let mut other = CategoryBreakdown { total: 0, items: Vec::new() };

    for line in RATE_CARD {
        let multiplier = if line.category.is_quality_scaled() {
            input.quality.multiplier()
        } else {
            1.0
        };
        let effective_rate = line.rate_per_sqft * multiplier;
        let raw = effective_rate * area;
        raw_total += raw;

        let item = LineItem {
            name: line.name.to_string(),
            rate_per_sqft: effective_rate,
            amount: raw.round() as i64,
        };

        let bucket = match line.category {
            CostCategory::Materials => &mut materials,
            CostCategory::Labor => &mut labor,
            CostCategory::Other => &mut other,
        };
        bucket.total += item.amount;
        bucket.items.push(item);
    }

    let total_cost = raw_total.round() as i64;
    let rate_per_sqft = (total_cost as f64 / area).round() as i64;

    let pie_chart_data = [
        (CostCategory::Materials, materials.total),
        (CostCategory::Labor, labor.total),
        (CostCategory::Other, other.total),
    ]
    .into_iter()
    .map(|(category, amount)| PieSlice {
        name: category.display_name().to_string(),
        value: (amount as f64 / total_cost as f64 * 100.0).round() as i64,
        amount,
    })
    .collect();

    Ok(CostEstimate {
        label: input.label.clone(),
        area_sqft: area,
        quality: input.quality,
        total_cost,
        rate_per_sqft,
        breakdown: Breakdown { materials, labor, other },
        pie_chart_data,
    })
}

/// Estimate the same area at every quality tier.
///
/// Calls [`estimate`] once per tier and returns the summaries in ascending
/// tier order. No additional logic.
pub fn compare_quality_tiers(area_sqft: f64) -> QuoteResult<Vec<TierSummary>> {
    validate_area(area_sqft)?;

    QualityTier::ALL
        .iter()
        .map(|&tier| {
            let result = estimate(&EstimateInput {
                label: format!("{} comparison", tier),
                area_sqft,
                quality: tier,
            })?;
            Ok(TierSummary {
                tier,
                total_cost: result.total_cost,
                rate_per_sqft: result.rate_per_sqft,
            })
        })
        .collect()
}

/// Flat-rate cost for a single named work phase.
///
/// # Returns
///
/// * `Ok(PhaseCost)` - Rate and rounded amount for the phase
/// * `Err(QuoteError::PhaseNotFound)` - Unrecognized phase name
/// * `Err(QuoteError::InvalidInput)` - Non-positive or non-finite area
pub fn phase_cost(area_sqft: f64, phase_name: &str) -> QuoteResult<PhaseCost> {
    validate_area(area_sqft)?;
    let phase = WorkPhase::from_str_flexible(phase_name)?;
    let rate = phase.rate_per_sqft();

    Ok(PhaseCost {
        phase,
        rate_per_sqft: rate,
        amount: (rate * area_sqft).round() as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input(area_sqft: f64, quality: QualityTier) -> EstimateInput {
        EstimateInput {
            label: "Test Estimate".to_string(),
            area_sqft,
            quality,
        }
    }

    #[test]
    fn test_standard_rate_band() {
        // 2024 base rate band is roughly 2000-2500 Rs/sqft for standard finish
        let result = estimate(&test_input(1000.0, QualityTier::Standard)).unwrap();
        assert_eq!(result.rate_per_sqft, 2420);
        assert!(result.rate_per_sqft >= 2000 && result.rate_per_sqft <= 2500);
        assert_eq!(result.total_cost, 2_420_000);
    }

    #[test]
    fn test_total_positive_for_all_tiers() {
        for area in [1.0, 350.5, 1000.0, 50_000.0] {
            for tier in QualityTier::ALL {
                let result = estimate(&test_input(area, tier)).unwrap();
                assert!(result.total_cost > 0, "area {} tier {}", area, tier);
            }
        }
    }

    #[test]
    fn test_monotonic_in_quality() {
        for area in [350.0, 1000.0, 2750.5] {
            let mut prev = 0;
            for tier in QualityTier::ALL {
                let result = estimate(&test_input(area, tier)).unwrap();
                assert!(result.total_cost > prev, "area {} tier {}", area, tier);
                prev = result.total_cost;
            }
        }
    }

    #[test]
    fn test_breakdown_sums_within_rounding_slack() {
        // Per-line rounding means the category totals can drift from the
        // grand total by up to one rupee per category.
        for area in [1000.0, 1234.56, 987.654] {
            for tier in QualityTier::ALL {
                let result = estimate(&test_input(area, tier)).unwrap();
                let drift = (result.breakdown_sum() - result.total_cost).abs();
                assert!(drift <= 3, "drift {} at area {} tier {}", drift, area, tier);
            }
        }
    }

    #[test]
    fn test_other_category_is_quality_invariant() {
        let basic = estimate(&test_input(1500.0, QualityTier::Basic)).unwrap();
        let luxury = estimate(&test_input(1500.0, QualityTier::Luxury)).unwrap();
        assert_eq!(basic.breakdown.other.total, luxury.breakdown.other.total);
        assert!(luxury.breakdown.materials.total > basic.breakdown.materials.total);
        assert!(luxury.breakdown.labor.total > basic.breakdown.labor.total);
    }

    #[test]
    fn test_pie_percentages_near_100() {
        let result = estimate(&test_input(1234.56, QualityTier::Premium)).unwrap();
        let percent_sum: i64 = result.pie_chart_data.iter().map(|slice| slice.value).sum();
        // Independent rounding, so exactly 100 is not guaranteed
        assert!((97..=103).contains(&percent_sum));
        assert_eq!(result.pie_chart_data.len(), 3);
    }

    #[test]
    fn test_line_items_complete() {
        let result = estimate(&test_input(1000.0, QualityTier::Standard)).unwrap();
        assert_eq!(result.breakdown.materials.items.len(), 10);
        assert_eq!(result.breakdown.labor.items.len(), 8);
        assert_eq!(result.breakdown.other.items.len(), 4);
    }

    #[test]
    fn test_invalid_area_rejected() {
        for bad in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let result = estimate(&test_input(bad, QualityTier::Standard));
            assert!(result.is_err(), "area {} should be rejected", bad);
            assert_eq!(result.unwrap_err().error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_compare_quality_tiers() {
        let summaries = compare_quality_tiers(1000.0).unwrap();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[0].tier, QualityTier::Basic);
        assert_eq!(summaries[3].tier, QualityTier::Luxury);
        for pair in summaries.windows(2) {
            assert!(pair[0].total_cost < pair[1].total_cost);
        }
    }

    #[test]
    fn test_compare_rejects_bad_area() {
        assert!(compare_quality_tiers(-1.0).is_err());
    }

    #[test]
    fn test_phase_cost_lookup() {
        let foundation = phase_cost(1000.0, "foundation").unwrap();
        assert_eq!(foundation.phase, WorkPhase::Foundation);
        assert_eq!(foundation.amount, 380_000);
    }

    #[test]
    fn test_phase_cost_unknown_phase() {
        let err = phase_cost(1000.0, "unknown").unwrap_err();
        assert_eq!(err.error_code(), "PHASE_NOT_FOUND");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input(1850.0, QualityTier::Premium);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: EstimateInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.area_sqft, roundtrip.area_sqft);
        assert_eq!(input.quality, roundtrip.quality);
    }

    #[test]
    fn test_result_serialization() {
        let result = estimate(&test_input(1000.0, QualityTier::Standard)).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("total_cost"));
        assert!(json.contains("rate_per_sqft"));
        assert!(json.contains("pie_chart_data"));

        let roundtrip: CostEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(result.total_cost, roundtrip.total_cost);
    }
}
