//! # quote_core - Construction Cost Estimation & Scheduling Engine
//!
//! `quote_core` is the computational heart of Plinth, turning a plinth area
//! and a handful of project parameters into an itemized cost estimate and a
//! working-day construction timeline. All inputs and outputs are
//! JSON-serializable, making it ideal for integration with web frontends or
//! AI assistants.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over constant rate and phase tables
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Caller-owned limits**: The engine rejects impossible inputs
//!   (non-positive area); range policy like the 50,000 sqft cap lives in
//!   the frontend
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::calculations::cost::{estimate, EstimateInput};
//! use quote_core::rates::QualityTier;
//!
//! let input = EstimateInput {
//!     label: "Plot 14 villa".to_string(),
//!     area_sqft: 1850.0,
//!     quality: QualityTier::Premium,
//! };
//!
//! let result = estimate(&input).unwrap();
//! println!("Total: Rs {}", result.total_cost);
//! ```
//!
//! ## Modules
//!
//! - [`proposal`] - Proposal container, metadata, and settings
//! - [`calculations`] - Cost estimation and timeline generation
//! - [`rates`] - The 2024 rate card and quality tiers
//! - [`phases`] - The fixed construction phase table
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod phases;
pub mod proposal;
pub mod rates;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{QuoteError, QuoteResult};
pub use file_io::{load_proposal, save_proposal, FileLock};
pub use proposal::{Proposal, ProposalMetadata, QuoteSettings};
