//! # Construction Phase Table
//!
//! The fixed, ordered list of construction phases used by the timeline
//! generator, plus the crew-roster and milestone lookup tables.
//!
//! Table invariants, enforced by construction and checked in tests:
//! - Phase percentages sum to exactly 100
//! - Dependency ids reference strictly earlier phases only (no cycles)

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Broad grouping of phases, used for crew-roster lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseCategory {
    /// Site setup before any structural work
    Preliminary,
    /// Load-bearing work (foundation through roof)
    Structural,
    /// Electrical and plumbing services
    Services,
    /// Surface finishes
    Finishing,
    /// Inspection and handover
    Closeout,
}

impl PhaseCategory {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PhaseCategory::Preliminary => "Preliminary",
            PhaseCategory::Structural => "Structural",
            PhaseCategory::Services => "Services",
            PhaseCategory::Finishing => "Finishing",
            PhaseCategory::Closeout => "Closeout",
        }
    }
}

impl std::fmt::Display for PhaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One entry in the fixed phase table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseDefinition {
    /// Phase id (1-based, in construction order)
    pub id: u32,
    /// Phase name
    pub name: &'static str,
    /// One-line scope description
    pub description: &'static str,
    /// Share of total project duration, in percent
    pub percentage: f64,
    /// Ids of phases this one depends on (always strictly earlier)
    pub dependencies: &'static [u32],
    /// Category for crew lookups
    pub category: PhaseCategory,
}

/// The fixed construction phase table
///
/// Percentages sum to 100. A renovation project drops the first two entries
/// (site preparation and foundation), leaving 8 phases.
pub const PHASES: [PhaseDefinition; 10] = [
    PhaseDefinition {
        id: 1,
        name: "Site Preparation",
        description: "Clearing, leveling and marking of the plot.",
        percentage: 5.0,
        dependencies: &[],
        category: PhaseCategory::Preliminary,
    },
    PhaseDefinition {
        id: 2,
        name: "Foundation Work",
        description: "Excavation, footing and plinth beam up to ground level.",
        percentage: 12.0,
        dependencies: &[1],
        category: PhaseCategory::Structural,
    },
    PhaseDefinition {
        id: 3,
        name: "Superstructure Construction",
        description: "Columns, beams and floor slabs above plinth level.",
        percentage: 20.0,
        dependencies: &[2],
        category: PhaseCategory::Structural,
    },
    PhaseDefinition {
        id: 4,
        name: "Brick Masonry",
        description: "External and internal walls.",
        percentage: 15.0,
        dependencies: &[3],
        category: PhaseCategory::Structural,
    },
    PhaseDefinition {
        id: 5,
        name: "Roofing Work",
        description: "Roof treatment and waterproofing.",
        percentage: 8.0,
        dependencies: &[3],
        category: PhaseCategory::Structural,
    },
    PhaseDefinition {
        id: 6,
        name: "Electrical & Plumbing Rough-In",
        description: "Concealed conduits, wiring runs and water lines.",
        percentage: 10.0,
        dependencies: &[4],
        category: PhaseCategory::Services,
    },
    PhaseDefinition {
        id: 7,
        name: "Plastering",
        description: "Internal and external plaster.",
        percentage: 8.0,
        dependencies: &[6],
        category: PhaseCategory::Finishing,
    },
    PhaseDefinition {
        id: 8,
        name: "Flooring & Tiling",
        description: "Floor finishes, bathroom and kitchen tiling.",
        percentage: 10.0,
        dependencies: &[7],
        category: PhaseCategory::Finishing,
    },
    PhaseDefinition {
        id: 9,
        name: "Painting & Finishing",
        description: "Putty, primer, paint and fixture installation.",
        percentage: 9.0,
        dependencies: &[8],
        category: PhaseCategory::Finishing,
    },
    PhaseDefinition {
        id: 10,
        name: "Handover & Inspection",
        description: "Snag list, final inspection and handover.",
        percentage: 3.0,
        dependencies: &[9],
        category: PhaseCategory::Closeout,
    },
];

/// Crew rosters keyed by phase category
static CREW_BY_CATEGORY: Lazy<HashMap<PhaseCategory, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            PhaseCategory::Preliminary,
            vec!["Site Engineer", "Excavator Operator", "General Worker"],
        ),
        (
            PhaseCategory::Structural,
            vec!["Site Engineer", "Mason", "Steel Fixer", "Concrete Crew"],
        ),
        (PhaseCategory::Services, vec!["Electrician", "Plumber"]),
        (
            PhaseCategory::Finishing,
            vec!["Painter", "Tile Layer", "Carpenter"],
        ),
        (
            PhaseCategory::Closeout,
            vec!["Project Manager", "Quality Inspector"],
        ),
    ])
});

/// Milestone lists keyed by phase name
static MILESTONES_BY_PHASE: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        ("Site Preparation", vec!["Site cleared and leveled"]),
        (
            "Foundation Work",
            vec!["Excavation complete", "Footing concrete poured"],
        ),
        (
            "Superstructure Construction",
            vec!["Ground floor slab cast", "Roof slab cast"],
        ),
        ("Brick Masonry", vec!["External walls complete"]),
        ("Roofing Work", vec!["Roof waterproofing done"]),
        (
            "Electrical & Plumbing Rough-In",
            vec!["Conduits and piping laid"],
        ),
        ("Plastering", vec!["Internal plaster complete"]),
        ("Flooring & Tiling", vec!["Flooring laid"]),
        ("Painting & Finishing", vec!["Final coat applied"]),
        (
            "Handover & Inspection",
            vec!["Snag list closed", "Keys handed over"],
        ),
    ])
});

/// Crew roster for a phase category, with a generic fallback
pub fn resources_for(category: PhaseCategory) -> Vec<String> {
    CREW_BY_CATEGORY
        .get(&category)
        .map(|crew| crew.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(|| vec!["General Worker".to_string()])
}

/// Milestones for a phase name, with a generic fallback
///
/// Lookup is by exact name; a phase renamed by a timeline variant falls
/// back to the generic milestone.
pub fn milestones_for(phase_name: &str) -> Vec<String> {
    MILESTONES_BY_PHASE
        .get(phase_name)
        .map(|list| list.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(|| vec!["Phase complete".to_string()])
}
