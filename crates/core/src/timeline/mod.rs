//! Schedule & calendar reconciliation
//!
//! Data flow for one learner query:
//! 1. [`ports`] fetch enrollments, per-course schedules, and calendar events
//! 2. [`normalize`] maps both source vocabularies onto the unified model
//! 3. [`reconcile`] merges, finalizes live status, and sorts
//! 4. [`views`] serve month-grid / upcoming-N / overdue-all read shapes
//!
//! [`service::TimelineService`] wires the steps together.

pub mod normalize;
pub mod ports;
pub mod reconcile;
pub mod service;
pub mod views;
