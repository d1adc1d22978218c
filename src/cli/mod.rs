//! Command-line parsing for the event check-in tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the derivation/rendering code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "checkin", version, about = "Event check-in codes and barcode rendering")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive a registration code from attendee details, print a summary,
    /// and optionally preview/export the barcode.
    Register(RegisterArgs),
    /// Re-render a saved registration record (or a raw 6-digit code).
    Render(RenderArgs),
    /// Generate seeded random registrations and report code collisions.
    Batch(BatchArgs),
    /// Launch the interactive registration form.
    ///
    /// This uses the same underlying pipeline as `checkin register`, but
    /// renders the barcode in a terminal UI using Ratatui.
    Tui(EventArgs),
}

/// Externally-supplied event context.
///
/// These arrive from outside the form (flags, env, `.env`) and fall back to
/// fixed defaults when absent.
#[derive(Debug, Parser, Clone)]
pub struct EventArgs {
    /// Event name ($CHECKIN_EVENT, then "Sample Event" when absent).
    #[arg(long, default_value_t = default_event_name())]
    pub event: String,

    /// Event date, YYYY-MM-DD ($CHECKIN_DATE, then today when absent).
    #[arg(long, default_value_t = default_event_date())]
    pub date: NaiveDate,
}

/// Options for one registration.
#[derive(Debug, Parser, Clone)]
pub struct RegisterArgs {
    #[command(flatten)]
    pub event: EventArgs,

    /// Attendee full name.
    #[arg(long)]
    pub name: String,

    /// Attendee email address.
    #[arg(long)]
    pub email: String,

    /// Attendee phone number.
    #[arg(long)]
    pub phone: String,

    /// Skip the ASCII preview (printed by default).
    #[arg(long)]
    pub no_preview: bool,

    /// Export the rendered barcode as a PGM image.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Export the registration record as JSON.
    #[arg(long = "export-record")]
    pub export_record: Option<PathBuf>,

    /// Write a markdown debug bundle of the derivation.
    #[arg(long)]
    pub debug: bool,
}

/// Options for re-rendering a saved registration.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Record JSON produced by `checkin register --export-record`.
    #[arg(long, value_name = "JSON")]
    pub record: Option<PathBuf>,

    /// Raw 6-digit code to render instead of a record.
    #[arg(long)]
    pub code: Option<String>,

    /// Skip the ASCII preview (printed by default).
    #[arg(long)]
    pub no_preview: bool,

    /// Export the rendered barcode as a PGM image.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Options for batch generation and collision reporting.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    #[command(flatten)]
    pub event: EventArgs,

    /// Number of synthetic registrations to generate.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    pub count: usize,

    /// Random seed for sample generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

fn default_event_name() -> String {
    std::env::var("CHECKIN_EVENT").unwrap_or_else(|_| "Sample Event".to_string())
}

fn default_event_date() -> NaiveDate {
    std::env::var("CHECKIN_DATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_on_unless_suppressed() {
        let cli = Cli::try_parse_from(["checkin", "render", "--code", "123456"]).unwrap();
        let Command::Render(args) = cli.command else { panic!("expected render") };
        assert!(!args.no_preview);

        let cli =
            Cli::try_parse_from(["checkin", "render", "--code", "123456", "--no-preview"]).unwrap();
        let Command::Render(args) = cli.command else { panic!("expected render") };
        assert!(args.no_preview);

        // The default is implicit; there is no --preview flag to pass.
        assert!(Cli::try_parse_from(["checkin", "render", "--code", "123456", "--preview"]).is_err());
    }
}
