//! # Studyline Domain
//!
//! Business domain types and models for the Studyline timeline engine.
//!
//! This crate contains:
//! - Unified timeline types ([`TimelineItem`], [`ReconciledTimeline`])
//! - Native source types as they arrive from the platform services
//! - Domain error types and the [`Result`] alias
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Studyline crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use constants::*;
pub use errors::*;
pub use types::*;
