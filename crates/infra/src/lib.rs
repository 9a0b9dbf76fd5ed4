//! # Studyline Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The retrying HTTP client wrapper
//! - Platform API adapters for the enrollment, schedule, calendar, and
//!   course catalog services
//! - The configuration loader
//!
//! ## Architecture
//! - Implements traits defined in `studyline-core`
//! - Contains all "impure" code (I/O, network)

pub mod config;
pub mod errors;
pub mod http;
pub mod platform_api;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use platform_api::{
    HttpCalendarSource, HttpCourseCatalog, HttpEnrollmentDirectory, HttpScheduleSource,
    PlatformApiClient,
};
