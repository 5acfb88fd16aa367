//! # Proposal Data Structures
//!
//! The `Proposal` struct is the root container for a customer quote.
//! Proposals serialize to `.pqf` (Plinth quote) files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Proposal
//! ├── meta: ProposalMetadata (version, prepared by, enquiry, timestamps)
//! ├── settings: QuoteSettings (rate card year, defaults)
//! └── items: HashMap<Uuid, QuoteItem> (estimate and schedule requests)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quote_core::proposal::Proposal;
//!
//! let proposal = Proposal::new("Asha Rao", "ENQ-2024-118", "Mehta Family");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&proposal).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{ProjectType, QuoteItem};
use crate::rates::QualityTier;

/// Current schema version for .pqf files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root proposal container.
///
/// This is the top-level struct that gets serialized to `.pqf` files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    /// Proposal metadata (version, preparer, enquiry info)
    pub meta: ProposalMetadata,

    /// Quote settings (rate card year, defaults)
    pub settings: QuoteSettings,

    /// All quote items, keyed by UUID
    pub items: HashMap<Uuid, QuoteItem>,
}

impl Proposal {
    /// Create a new empty proposal.
    ///
    /// # Arguments
    ///
    /// * `prepared_by` - Name of the person preparing the quote
    /// * `enquiry_id` - Enquiry number (e.g. "ENQ-2024-118")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use quote_core::proposal::Proposal;
    ///
    /// let proposal = Proposal::new("Asha Rao", "ENQ-2024-118", "Mehta Family");
    /// assert_eq!(proposal.meta.prepared_by, "Asha Rao");
    /// ```
    pub fn new(
        prepared_by: impl Into<String>,
        enquiry_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Proposal {
            meta: ProposalMetadata {
                version: SCHEMA_VERSION.to_string(),
                prepared_by: prepared_by.into(),
                enquiry_id: enquiry_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: QuoteSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a quote item to the proposal.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: QuoteItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a quote item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<QuoteItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a quote item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&QuoteItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of items in the proposal.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Proposal {
    fn default() -> Self {
        Proposal::new("", "", "")
    }
}

/// Proposal metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the person preparing the quote
    pub prepared_by: String,

    /// Enquiry number this quote answers
    pub enquiry_id: String,

    /// Client name
    pub client: String,

    /// When the proposal was created
    pub created: DateTime<Utc>,

    /// When the proposal was last modified
    pub modified: DateTime<Utc>,
}

/// Proposal-wide quote settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// Rate card year (e.g. "2024")
    pub rate_card: String,

    /// Default quality tier for new estimates
    pub default_quality: QualityTier,

    /// Default project type for new timelines
    pub default_project_type: ProjectType,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        QuoteSettings {
            rate_card: "2024".to_string(),
            default_quality: QualityTier::Standard,
            default_project_type: ProjectType::Residential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::EstimateInput;

    #[test]
    fn test_proposal_creation() {
        let proposal = Proposal::new("Asha Rao", "ENQ-2024-118", "Mehta Family");
        assert_eq!(proposal.meta.prepared_by, "Asha Rao");
        assert_eq!(proposal.meta.enquiry_id, "ENQ-2024-118");
        assert_eq!(proposal.meta.client, "Mehta Family");
        assert_eq!(proposal.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_proposal_serialization() {
        let proposal = Proposal::new("Asha Rao", "ENQ-2024-118", "Mehta Family");
        let json = serde_json::to_string_pretty(&proposal).unwrap();

        assert!(json.contains("Asha Rao"));
        assert!(json.contains("ENQ-2024-118"));
        assert!(json.contains("2024"));

        let roundtrip: Proposal = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.prepared_by, "Asha Rao");
        assert_eq!(roundtrip.settings.default_quality, QualityTier::Standard);
    }

    #[test]
    fn test_add_remove_item() {
        let mut proposal = Proposal::new("Preparer", "ENQ-1", "Client");

        let estimate = EstimateInput {
            label: "E-1".to_string(),
            area_sqft: 1200.0,
            quality: QualityTier::Standard,
        };

        let id = proposal.add_item(QuoteItem::CostEstimate(estimate));
        assert_eq!(proposal.item_count(), 1);
        assert!(proposal.get_item(&id).is_some());

        let removed = proposal.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(proposal.item_count(), 0);
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut proposal = Proposal::new("Preparer", "ENQ-1", "Client");
        let before = proposal.meta.modified;
        proposal.touch();
        assert!(proposal.meta.modified >= before);
    }
}
