//! Formatted terminal output for registrations and batch runs.

mod format;

pub use format::{format_collision_report, format_registration_summary};
