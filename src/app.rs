//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the registration pipeline
//! - prints summaries/previews
//! - writes optional exports

use chrono::Local;
use clap::Parser;

use crate::cli::{BatchArgs, Command, RegisterArgs, RenderArgs};
use crate::domain::{BarcodeStyle, RegistrationCode, RegistrationInput, RegistrationRecord};
use crate::error::AppError;
use crate::render::PixmapSurface;

pub mod pipeline;

/// Entry point for the `checkin` binary.
pub fn run() -> Result<(), AppError> {
    // A local .env can supply CHECKIN_EVENT / CHECKIN_DATE defaults.
    dotenvy::dotenv().ok();

    // We want `checkin` and `checkin --event X` to behave like `checkin tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Register(args) => handle_register(args),
        Command::Render(args) => handle_render(args),
        Command::Batch(args) => handle_batch(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_register(args: RegisterArgs) -> Result<(), AppError> {
    let input = RegistrationInput {
        name: args.name,
        email: args.email,
        phone: args.phone,
        event_name: args.event.event,
        event_date: args.event.date,
    };

    let style = BarcodeStyle::default();
    let out = pipeline::register(&input, &style)?;

    println!("{}", crate::report::format_registration_summary(&out));

    if !args.no_preview {
        println!("{}", crate::render::ascii_preview(&out.pattern));
    }

    // Optional exports.
    if let Some(path) = &args.out {
        let mut surface = PixmapSurface::new();
        crate::render::draw(&out.pattern, &style, &mut surface);
        crate::io::write_pgm(path, &surface)?;
    }
    if let Some(path) = &args.export_record {
        crate::io::write_record_json(path, &record_from_output(&out))?;
    }

    if args.debug {
        let path = crate::debug::write_debug_bundle(&out)?;
        println!("Wrote debug bundle: {}", path.display());
    }

    Ok(())
}

fn handle_render(args: RenderArgs) -> Result<(), AppError> {
    let code = match (&args.record, &args.code) {
        (Some(path), None) => crate::io::read_record_json(path)?.code,
        (None, Some(raw)) => RegistrationCode::parse(raw)?,
        _ => return Err(AppError::usage("Provide exactly one of --record or --code.")),
    };

    let style = BarcodeStyle::default();
    let pattern = crate::render::layout(code.as_str(), &style)?;

    if !args.no_preview {
        println!("{}", crate::render::ascii_preview(&pattern));
    }

    if let Some(path) = &args.out {
        let mut surface = PixmapSurface::new();
        crate::render::draw(&pattern, &style, &mut surface);
        crate::io::write_pgm(path, &surface)?;
    }

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let inputs =
        crate::data::generate_inputs(&args.event.event, args.event.date, args.count, args.seed)?;
    let stats = crate::code::collision_stats(&inputs);

    println!(
        "{}",
        crate::report::format_collision_report(&stats, &args.event.event, args.seed)
    );

    Ok(())
}

fn record_from_output(out: &pipeline::RegistrationOutput) -> RegistrationRecord {
    RegistrationRecord {
        tool: "checkin".to_string(),
        registered_on: Local::now().date_naive(),
        name: out.input.name.clone(),
        email: out.input.email.clone(),
        phone: out.input.phone.clone(),
        event_name: out.input.event_name.clone(),
        event_date: out.input.event_date,
        code: out.code.clone(),
    }
}

/// Rewrite argv so `checkin` defaults to `checkin tui`.
///
/// Rules:
/// - `checkin`                     -> `checkin tui`
/// - `checkin --event X ...`       -> `checkin tui --event X ...`
/// - `checkin --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "register" | "render" | "batch" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
