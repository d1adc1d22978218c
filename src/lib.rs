//! `checkin-codes` library crate.
//!
//! The binary (`checkin`) is a thin wrapper around this library so that:
//!
//! - core logic (code derivation, barcode layout) is testable without
//!   spawning processes
//! - modules are reusable (e.g., future GUI/daemon, kiosk builds, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod code;
pub mod data;
pub mod debug;
pub mod domain;
pub mod error;
pub mod io;
pub mod render;
pub mod report;
pub mod tui;
