//! # Timeline Generator
//!
//! Generates a phase-by-phase construction schedule from plinth area,
//! project type and floor count.
//!
//! Durations accumulate in working days (weekends are skipped). Phases with
//! dependencies are allowed to start before their predecessor finishes: the
//! cursor for the next phase advances only 70% of the current phase's
//! duration. This is intentional schedule compression, not a bug.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use quote_core::calculations::schedule::{generate, ProjectType, TimelineInput};
//!
//! let input = TimelineInput {
//!     label: "Plot 14".to_string(),
//!     area_sqft: 1500.0,
//!     project_type: ProjectType::Residential,
//!     floor_count: 1.0,
//! };
//!
//! let timeline = generate(&input).unwrap();
//!
//! assert_eq!(timeline.phases.len(), 10);
//! assert_eq!(timeline.project_info.working_days, 900);
//! ```

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::phases::{milestones_for, resources_for, PhaseCategory, PhaseDefinition, PHASES};
use crate::units::Days;

use super::validate_area;

/// Fraction of a phase's duration that must elapse before a dependent
/// successor may start. 0.7 means 30% overlap with the predecessor.
///
/// The single tuning knob if per-phase overlap is ever needed.
pub const OVERLAP_FACTOR: f64 = 0.7;

/// Appended to every phase description for villa projects
const VILLA_DESCRIPTION_SUFFIX: &str = "Executed to premium villa specification.";

/// Project types supported by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    /// Standard residential build
    Residential,
    /// Commercial build (heavier per-sqft schedule)
    Commercial,
    /// Villa build (all durations stretched 1.3x)
    Villa,
    /// Renovation of an existing structure (no site prep or foundation,
    /// remaining durations compressed to 0.6x)
    Renovation,
}

impl ProjectType {
    /// All project types for UI selection
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Villa,
        ProjectType::Renovation,
    ];

    /// Base schedule rate in days per square foot
    pub fn base_days_per_sqft(&self) -> f64 {
        match self {
            ProjectType::Commercial => 0.8,
            _ => 0.6,
        }
    }

    /// Post-hoc scale applied to every phase duration
    fn duration_scale(&self) -> f64 {
        match self {
            ProjectType::Renovation => 0.6,
            ProjectType::Villa => 1.3,
            _ => 1.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "residential" | "house" | "home" => Ok(ProjectType::Residential),
            "commercial" | "office" | "shop" => Ok(ProjectType::Commercial),
            "villa" => Ok(ProjectType::Villa),
            "renovation" | "remodel" => Ok(ProjectType::Renovation),
            _ => Err(QuoteError::invalid_input(
                "project_type",
                s,
                "Expected one of: residential, commercial, villa, renovation",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Villa => "Villa",
            ProjectType::Renovation => "Renovation",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Schedule complexity multiplier for additional floors.
///
/// A coarse step function, not physically derived - a tuned constant table.
pub fn floor_multiplier(floor_count: f64) -> f64 {
    if floor_count <= 1.0 {
        1.0
    } else if floor_count <= 2.0 {
        1.3
    } else if floor_count <= 3.0 {
        1.6
    } else if floor_count <= 4.0 {
        1.8
    } else {
        2.0
    }
}

/// Input parameters for a timeline.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Plot 14",
///   "area_sqft": 1500.0,
///   "project_type": "Residential",
///   "floor_count": 2.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineInput {
    /// User label for this timeline
    pub label: String,

    /// Plinth area in square feet
    pub area_sqft: f64,

    /// Project type
    pub project_type: ProjectType,

    /// Number of floors (>= 1; fractional values land in the same step
    /// bracket as the next whole floor)
    pub floor_count: f64,
}

impl TimelineInput {
    /// Validate input parameters.
    pub fn validate(&self) -> QuoteResult<()> {
        validate_area(self.area_sqft)?;
        if !(self.floor_count >= 1.0) || !self.floor_count.is_finite() {
            return Err(QuoteError::invalid_input(
                "floor_count",
                self.floor_count.to_string(),
                "Floor count must be at least 1",
            ));
        }
        Ok(())
    }
}

/// One scheduled phase instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseSchedule {
    /// Phase id from the fixed phase table
    pub id: u32,
    /// Phase name (renovation projects rename construction phases)
    pub name: String,
    /// Scope description
    pub description: String,
    /// Phase category
    pub category: PhaseCategory,
    /// First day of the phase
    pub start_date: NaiveDate,
    /// Last working day of the phase (never a weekend)
    pub end_date: NaiveDate,
    /// Duration in working days
    pub duration_days: u32,
    /// Ids of prerequisite phases
    pub dependencies: Vec<u32>,
    /// Crew roster for this phase
    pub resources: Vec<String>,
    /// Milestones reached during this phase
    pub milestones: Vec<String>,
}

impl PhaseSchedule {
    /// Get the duration as a typed unit
    pub fn duration(&self) -> Days {
        Days(self.duration_days)
    }
}

/// Project-level schedule facts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Label carried over from the input
    pub label: String,
    /// Plinth area in square feet
    pub area_sqft: f64,
    /// Project type
    pub project_type: ProjectType,
    /// Number of floors
    pub floor_count: f64,
    /// Applied floor multiplier
    pub floor_multiplier: f64,
    /// Total working days: `ceil(area * base_rate * floor_multiplier)`
    pub working_days: u32,
    /// First day of the schedule
    pub start_date: NaiveDate,
}

/// Roll-up figures for the whole schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSummary {
    /// Number of scheduled phases
    pub phase_count: usize,
    /// Sum of phase durations in working days (exceeds the calendar span
    /// when phases overlap)
    pub scheduled_working_days: u32,
    /// Latest phase end date
    pub completion_date: NaiveDate,
}

/// A generated construction timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub project_info: ProjectInfo,
    pub phases: Vec<PhaseSchedule>,
    pub summary: TimelineSummary,
}

/// Generate a construction timeline anchored at today's date.
///
/// Pure apart from reading the local calendar date; use [`generate_from`]
/// for a fixed anchor.
pub fn generate(input: &TimelineInput) -> QuoteResult<Timeline> {
    generate_from(input, Local::now().date_naive())
}

/// Generate a construction timeline anchored at `start`.
///
/// # Arguments
///
/// * `input` - Area, project type and floor count
/// * `start` - First day of the schedule
///
/// # Returns
///
/// * `Ok(Timeline)` - Scheduled phases with dates, crew and milestones
/// * `Err(QuoteError::InvalidInput)` - Bad area or floor count
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use quote_core::calculations::schedule::{generate_from, ProjectType, TimelineInput};
///
/// let input = TimelineInput {
///     label: "Shop fit-out".to_string(),
///     area_sqft: 800.0,
///     project_type: ProjectType::Renovation,
///     floor_count: 1.0,
/// };
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let timeline = generate_from(&input, start).unwrap();
/// assert_eq!(timeline.phases.len(), 8);
/// ```
pub fn generate_from(input: &TimelineInput, start: NaiveDate) -> QuoteResult<Timeline> {
    input.validate()?;

    let multiplier = floor_multiplier(input.floor_count);
    let working_days =
        (input.area_sqft * input.project_type.base_days_per_sqft() * multiplier).ceil() as u32;
    let scale = input.project_type.duration_scale();
    let is_renovation = input.project_type == ProjectType::Renovation;

    // Renovation projects have no site prep or foundation work
    let definitions: &[PhaseDefinition] = if is_renovation { &PHASES[2..] } else { &PHASES[..] };

    let mut phases = Vec::with_capacity(definitions.len());
    let mut cursor = start.and_time(NaiveTime::MIN);

    for definition in definitions {
        let base_days = (definition.percentage / 100.0 * working_days as f64).ceil() as u32;
        let duration_days = (base_days as f64 * scale).ceil() as u32;

        let name = if is_renovation {
            definition.name.replace("Construction", "Renovation")
        } else {
            definition.name.to_string()
        };
        let description = match input.project_type {
            ProjectType::Villa => {
                format!("{} {}", definition.description, VILLA_DESCRIPTION_SUFFIX)
            }
            _ => definition.description.to_string(),
        };

        let start_date = cursor.date();
        let end_date = add_working_days(start_date, duration_days);

        // A dependent phase lets its successor start after only
        // OVERLAP_FACTOR of its duration; an independent phase blocks
        // until its end date.
        cursor = if definition.dependencies.is_empty() {
            end_date.and_time(NaiveTime::MIN)
        } else {
            start_date.and_time(NaiveTime::MIN)
                + Duration::seconds(
                    (duration_days as f64 * OVERLAP_FACTOR * 86_400.0).round() as i64
                )
        };

        // Milestone lookup uses the (possibly renamed) phase name, so
        // renamed renovation phases fall back to the generic milestone.
        let milestones = milestones_for(&name);

        phases.push(PhaseSchedule {
            id: definition.id,
            name,
            description,
            category: definition.category,
            start_date,
            end_date,
            duration_days,
            dependencies: definition.dependencies.to_vec(),
            resources: resources_for(definition.category),
            milestones,
        });
    }

    let summary = TimelineSummary {
        phase_count: phases.len(),
        scheduled_working_days: phases.iter().map(|p| p.duration_days).sum(),
        completion_date: phases
            .iter()
            .map(|p| p.end_date)
            .max()
            .unwrap_or(start),
    };

    Ok(Timeline {
        project_info: ProjectInfo {
            label: input.label.clone(),
            area_sqft: input.area_sqft,
            project_type: input.project_type,
            floor_count: input.floor_count,
            floor_multiplier: multiplier,
            working_days,
            start_date: start,
        },
        phases,
        summary,
    })
}

/// Renovation timeline: 8 phases, durations compressed to 0.6x.
pub fn renovation_timeline(input: &TimelineInput) -> QuoteResult<Timeline> {
    generate(&TimelineInput {
        project_type: ProjectType::Renovation,
        ..input.clone()
    })
}

/// Villa timeline: all durations stretched 1.3x, villa finish noted on
/// every phase description.
pub fn villa_timeline(input: &TimelineInput) -> QuoteResult<Timeline> {
    generate(&TimelineInput {
        project_type: ProjectType::Villa,
        ..input.clone()
    })
}

/// Commercial timeline: 0.8 days/sqft base schedule rate.
pub fn commercial_timeline(input: &TimelineInput) -> QuoteResult<Timeline> {
    generate(&TimelineInput {
        project_type: ProjectType::Commercial,
        ..input.clone()
    })
}

/// Advance `start` by `working_days` non-weekend days, one calendar day at
/// a time. The returned date is always a weekday for `working_days > 0`.
fn add_working_days(start: NaiveDate, working_days: u32) -> NaiveDate {
    let mut day = start;
    let mut counted = 0;
    while counted < working_days {
        day = day + Duration::days(1);
        if is_working_day(day) {
            counted += 1;
        }
    }
    day
}

/// Working days are Monday through Friday
fn is_working_day(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monday
    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn test_input(area_sqft: f64, project_type: ProjectType, floor_count: f64) -> TimelineInput {
        TimelineInput {
            label: "Test Timeline".to_string(),
            area_sqft,
            project_type,
            floor_count,
        }
    }

    #[test]
    fn test_residential_has_ten_phases() {
        let timeline =
            generate_from(&test_input(1500.0, ProjectType::Residential, 1.0), anchor()).unwrap();
        assert_eq!(timeline.phases.len(), 10);
        assert_eq!(timeline.summary.phase_count, 10);
    }

    #[test]
    fn test_renovation_has_eight_phases() {
        let timeline =
            generate_from(&test_input(1500.0, ProjectType::Renovation, 1.0), anchor()).unwrap();
        assert_eq!(timeline.phases.len(), 8);
        // Site prep and foundation are dropped; ids carry over
        assert_eq!(timeline.phases[0].id, 3);
    }

    #[test]
    fn test_working_days_formula() {
        let timeline =
            generate_from(&test_input(1500.0, ProjectType::Residential, 1.0), anchor()).unwrap();
        // ceil(1500 * 0.6 * 1.0) = 900
        assert_eq!(timeline.project_info.working_days, 900);
    }

    #[test]
    fn test_commercial_base_rate() {
        let timeline =
            generate_from(&test_input(1000.0, ProjectType::Commercial, 1.0), anchor()).unwrap();
        // ceil(1000 * 0.8 * 1.0) = 800
        assert_eq!(timeline.project_info.working_days, 800);
    }

    #[test]
    fn test_floor_multiplier_steps() {
        assert_eq!(floor_multiplier(1.0), 1.0);
        assert_eq!(floor_multiplier(1.5), 1.3);
        assert_eq!(floor_multiplier(2.0), 1.3);
        assert_eq!(floor_multiplier(3.0), 1.6);
        assert_eq!(floor_multiplier(4.0), 1.8);
        assert_eq!(floor_multiplier(5.0), 2.0);
        assert_eq!(floor_multiplier(12.0), 2.0);
    }

    #[test]
    fn test_floor_multiplier_applied() {
        let timeline =
            generate_from(&test_input(1000.0, ProjectType::Residential, 2.0), anchor()).unwrap();
        // ceil(1000 * 0.6 * 1.3) = 780
        assert_eq!(timeline.project_info.working_days, 780);
        assert_eq!(timeline.project_info.floor_multiplier, 1.3);
    }

    #[test]
    fn test_phase_durations_from_percentages() {
        let timeline =
            generate_from(&test_input(1500.0, ProjectType::Residential, 1.0), anchor()).unwrap();
        // 900 working days total; phase 1 is 5% => 45, phase 3 is 20% => 180
        assert_eq!(timeline.phases[0].duration_days, 45);
        assert_eq!(timeline.phases[2].duration_days, 180);
    }

    #[test]
    fn test_no_phase_ends_on_weekend() {
        for project_type in ProjectType::ALL {
            let timeline =
                generate_from(&test_input(875.5, project_type, 2.0), anchor()).unwrap();
            for phase in &timeline.phases {
                assert!(
                    is_working_day(phase.end_date),
                    "{} phase '{}' ends on {}",
                    project_type,
                    phase.name,
                    phase.end_date.weekday()
                );
            }
        }
    }

    #[test]
    fn test_dependent_phases_overlap() {
        let timeline =
            generate_from(&test_input(1500.0, ProjectType::Residential, 1.0), anchor()).unwrap();
        // Phase 1 has no dependencies, so phase 2 waits for its end
        assert_eq!(timeline.phases[1].start_date, timeline.phases[0].end_date);
        // Phase 2 has dependencies, so phase 3 starts before phase 2 ends
        assert!(timeline.phases[2].start_date < timeline.phases[1].end_date);
        assert!(timeline.phases[2].start_date > timeline.phases[1].start_date);
    }

    #[test]
    fn test_renovation_scales_durations() {
        let residential =
            generate_from(&test_input(1500.0, ProjectType::Residential, 1.0), anchor()).unwrap();
        let renovation =
            generate_from(&test_input(1500.0, ProjectType::Renovation, 1.0), anchor()).unwrap();
        // Same table entry (superstructure): 180 days scaled by 0.6 => 108
        assert_eq!(residential.phases[2].duration_days, 180);
        assert_eq!(renovation.phases[0].duration_days, 108);
    }

    #[test]
    fn test_renovation_renames_construction_phases() {
        let timeline =
            generate_from(&test_input(1200.0, ProjectType::Renovation, 1.0), anchor()).unwrap();
        let superstructure = &timeline.phases[0];
        assert_eq!(superstructure.name, "Superstructure Renovation");
        // Renamed phases miss the milestone table and fall back
        assert_eq!(superstructure.milestones, vec!["Phase complete".to_string()]);
        // Untouched names keep their milestones
        let masonry = &timeline.phases[1];
        assert_eq!(masonry.name, "Brick Masonry");
        assert_eq!(masonry.milestones, vec!["External walls complete".to_string()]);
    }

    #[test]
    fn test_villa_stretches_durations() {
        let residential =
            generate_from(&test_input(1500.0, ProjectType::Residential, 1.0), anchor()).unwrap();
        let villa = generate_from(&test_input(1500.0, ProjectType::Villa, 1.0), anchor()).unwrap();
        for (res, vil) in residential.phases.iter().zip(&villa.phases) {
            assert!(vil.duration_days >= res.duration_days);
            assert!(vil.description.ends_with("villa specification."));
        }
        // 180 days stretched by 1.3 => 234
        assert_eq!(villa.phases[2].duration_days, 234);
    }

    #[test]
    fn test_named_variants() {
        let input = test_input(1000.0, ProjectType::Residential, 1.0);
        assert_eq!(renovation_timeline(&input).unwrap().phases.len(), 8);
        assert_eq!(
            villa_timeline(&input).unwrap().project_info.project_type,
            ProjectType::Villa
        );
        assert_eq!(
            commercial_timeline(&input).unwrap().project_info.working_days,
            800
        );
    }

    #[test]
    fn test_summary_rollup() {
        let timeline =
            generate_from(&test_input(1500.0, ProjectType::Residential, 1.0), anchor()).unwrap();
        let duration_sum: u32 = timeline.phases.iter().map(|p| p.duration_days).sum();
        assert_eq!(timeline.summary.scheduled_working_days, duration_sum);
        let last_end = timeline.phases.iter().map(|p| p.end_date).max().unwrap();
        assert_eq!(timeline.summary.completion_date, last_end);
    }

    #[test]
    fn test_crew_and_milestones_attached() {
        let timeline =
            generate_from(&test_input(1500.0, ProjectType::Residential, 1.0), anchor()).unwrap();
        for phase in &timeline.phases {
            assert!(!phase.resources.is_empty());
            assert!(!phase.milestones.is_empty());
        }
        assert!(timeline.phases[5]
            .resources
            .contains(&"Electrician".to_string()));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        for bad_area in [0.0, -250.0, f64::NAN] {
            let result =
                generate_from(&test_input(bad_area, ProjectType::Residential, 1.0), anchor());
            assert!(result.is_err());
        }
        for bad_floors in [0.0, 0.5, -1.0, f64::NAN] {
            let result =
                generate_from(&test_input(1000.0, ProjectType::Residential, bad_floors), anchor());
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_project_type_parsing() {
        assert_eq!(
            ProjectType::from_str_flexible("Commercial").unwrap(),
            ProjectType::Commercial
        );
        assert_eq!(
            ProjectType::from_str_flexible(" remodel ").unwrap(),
            ProjectType::Renovation
        );
        assert!(ProjectType::from_str_flexible("warehouse").is_err());
    }

    #[test]
    fn test_add_working_days_skips_weekends() {
        // 2024-01-05 is a Friday; one working day later is Monday
        let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(
            add_working_days(friday, 1),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
        // Five working days from Monday is the next Monday
        assert_eq!(
            add_working_days(anchor(), 5),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
    }

    #[test]
    fn test_generate_uses_today() {
        let timeline = generate(&test_input(400.0, ProjectType::Residential, 1.0)).unwrap();
        assert_eq!(timeline.phases.len(), 10);
        assert_eq!(
            timeline.project_info.start_date,
            timeline.phases[0].start_date
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let timeline =
            generate_from(&test_input(1500.0, ProjectType::Villa, 2.0), anchor()).unwrap();
        let json = serde_json::to_string_pretty(&timeline).unwrap();

        assert!(json.contains("project_info"));
        assert!(json.contains("working_days"));
        assert!(json.contains("milestones"));

        let roundtrip: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.phases.len(), timeline.phases.len());
        assert_eq!(
            roundtrip.summary.completion_date,
            timeline.summary.completion_date
        );
    }
}
