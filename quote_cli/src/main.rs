//! # Plinth CLI Application
//!
//! Terminal-based quote builder: prompts for project parameters, runs the
//! cost estimator and timeline generator, and prints both a human-readable
//! report and machine-readable JSON.
//!
//! Range policy lives here, not in the engine: the engine rejects
//! non-positive area, while this frontend additionally caps area at
//! 50,000 sqft.

use std::io::{self, BufRead, Write};
use std::path::Path;

use quote_core::calculations::cost::{compare_quality_tiers, estimate, EstimateInput};
use quote_core::calculations::schedule::{generate, ProjectType, TimelineInput};
use quote_core::calculations::QuoteItem;
use quote_core::file_io::save_proposal;
use quote_core::proposal::Proposal;
use quote_core::rates::QualityTier;

/// Caller-side cap on plinth area; the engine itself has no upper bound
const MAX_AREA_SQFT: f64 = 50_000.0;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn print_error(error: &quote_core::QuoteError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() {
    println!("Plinth CLI - Construction Cost & Schedule Calculator");
    println!("====================================================");
    println!();

    let area_sqft = prompt_f64("Enter plinth area (sqft) [1200.0]: ", 1200.0);
    if area_sqft > MAX_AREA_SQFT {
        eprintln!(
            "Error: area {} sqft exceeds the {} sqft limit",
            area_sqft, MAX_AREA_SQFT
        );
        std::process::exit(1);
    }

    let quality = match QualityTier::from_str_flexible(&prompt_str(
        "Enter quality tier (basic/standard/premium/luxury) [standard]: ",
        "standard",
    )) {
        Ok(tier) => tier,
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    };

    let project_type = match ProjectType::from_str_flexible(&prompt_str(
        "Enter project type (residential/commercial/villa/renovation) [residential]: ",
        "residential",
    )) {
        Ok(kind) => kind,
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    };

    let floor_count = prompt_f64("Enter number of floors [1.0]: ", 1.0);

    println!();
    println!(
        "Calculating {} sqft {} {} build...",
        area_sqft,
        quality.display_name().to_lowercase(),
        project_type.display_name().to_lowercase()
    );
    println!();

    let estimate_input = EstimateInput {
        label: "CLI-Quote".to_string(),
        area_sqft,
        quality,
    };

    let cost = match estimate(&estimate_input) {
        Ok(result) => result,
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    };

    println!("═══════════════════════════════════════");
    println!("  COST ESTIMATE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Area:    {:.0} sqft", area_sqft);
    println!("  Quality: {}", quality);
    println!();
    println!("Breakdown:");
    println!("  Materials: Rs {:>12}", cost.breakdown.materials.total);
    println!("  Labor:     Rs {:>12}", cost.breakdown.labor.total);
    println!("  Other:     Rs {:>12}", cost.breakdown.other.total);
    println!();
    println!("  TOTAL:     Rs {:>12}  ({} Rs/sqft)", cost.total_cost, cost.rate_per_sqft);

    match compare_quality_tiers(area_sqft) {
        Ok(summaries) => {
            println!();
            println!("Quality tier comparison:");
            for summary in summaries {
                println!(
                    "  {:<10} Rs {:>12}  ({} Rs/sqft)",
                    summary.tier.display_name(),
                    summary.total_cost,
                    summary.rate_per_sqft
                );
            }
        }
        Err(e) => print_error(&e),
    }

    let timeline_input = TimelineInput {
        label: "CLI-Quote".to_string(),
        area_sqft,
        project_type,
        floor_count,
    };

    let timeline = match generate(&timeline_input) {
        Ok(result) => result,
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  CONSTRUCTION TIMELINE");
    println!("═══════════════════════════════════════");
    println!();
    println!(
        "  {} working days total ({}x floor multiplier)",
        timeline.project_info.working_days, timeline.project_info.floor_multiplier
    );
    println!();
    for phase in &timeline.phases {
        println!(
            "  {:>2}. {:<32} {} -> {}  ({} wd)",
            phase.id, phase.name, phase.start_date, phase.end_date, phase.duration_days
        );
    }
    println!();
    println!(
        "  Projected completion: {} ({} phases)",
        timeline.summary.completion_date, timeline.summary.phase_count
    );

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&cost) {
        println!("{}", json);
    }
    if let Ok(json) = serde_json::to_string_pretty(&timeline) {
        println!("{}", json);
    }

    let save_path = prompt_str("Save proposal to file (blank to skip): ", "");
    if !save_path.is_empty() {
        let mut proposal = Proposal::new(
            prompt_str("Prepared by [Site Office]: ", "Site Office"),
            prompt_str("Enquiry id [ENQ-0000]: ", "ENQ-0000"),
            prompt_str("Client [Walk-in]: ", "Walk-in"),
        );
        proposal.add_item(QuoteItem::CostEstimate(estimate_input));
        proposal.add_item(QuoteItem::Schedule(timeline_input));

        match save_proposal(&proposal, Path::new(&save_path)) {
            Ok(()) => println!("Saved proposal to {}", save_path),
            Err(e) => print_error(&e),
        }
    }
}
