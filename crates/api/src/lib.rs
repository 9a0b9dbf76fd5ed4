//! # Studyline API
//!
//! HTTP facade over the timeline engine. This is a thin presentation
//! contract only: handlers capture "now" at request ingress, delegate to
//! [`studyline_core::TimelineService`], and serialize the structured result.

pub mod context;
pub mod error;
pub mod routes;

pub use context::AppContext;
