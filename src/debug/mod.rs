//! Debug bundle writer for inspecting a derivation end to end.
//!
//! The bundle is a timestamped markdown file with the exact concatenation,
//! the raw accumulator, the resulting code, and the per-bar geometry. Handy
//! when two implementations disagree about a code.

use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::app::pipeline::RegistrationOutput;
use crate::code::{combined, hash_combined};
use crate::error::AppError;

pub fn write_debug_bundle(output: &RegistrationOutput) -> Result<PathBuf, AppError> {
    let dir = PathBuf::from("debug");
    create_dir_all(&dir)
        .map_err(|e| AppError::runtime(format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!(
        "checkin_debug_{}_{ts}.md",
        output.input.event_date.format("%Y%m%d")
    ));

    let mut file = File::create(&path)
        .map_err(|e| AppError::runtime(format!("Failed to create debug file: {e}")))?;

    write_bundle(&mut file, output)
        .map_err(|e| AppError::runtime(format!("Failed to write debug bundle: {e}")))?;

    Ok(path)
}

fn write_bundle(file: &mut File, output: &RegistrationOutput) -> std::io::Result<()> {
    let text = combined(&output.input);
    let acc = hash_combined(&text);

    writeln!(file, "# checkin debug bundle")?;
    writeln!(file, "- generated: {}", Local::now().to_rfc3339())?;
    writeln!(file, "- event: {}", output.input.event_name)?;
    writeln!(file, "- event_date: {}", output.input.event_date)?;

    writeln!(file, "\n## Derivation")?;
    writeln!(file, "| field | value |")?;
    writeln!(file, "| - | - |")?;
    writeln!(file, "| name | {} |", output.input.name)?;
    writeln!(file, "| email | {} |", output.input.email)?;
    writeln!(file, "| phone | {} |", output.input.phone)?;
    writeln!(file, "| combined | `{text}` |")?;
    writeln!(file, "| accumulator (i32) | {acc} |")?;
    writeln!(file, "| code | {} |", output.code)?;

    writeln!(file, "\n## Bar pattern")?;
    writeln!(
        file,
        "Surface: {}x{} | bar {}px, gap {}px, margin {}px",
        output.pattern.width,
        output.pattern.height,
        output.style.bar_width,
        output.style.spacing,
        output.style.margin
    )?;
    writeln!(file, "\n| i | digit | x | height |")?;
    writeln!(file, "| - | - | - | - |")?;
    for (i, (ch, bar)) in output
        .pattern
        .label
        .chars()
        .zip(output.pattern.bars.iter())
        .enumerate()
    {
        writeln!(file, "| {i} | {ch} | {} | {} |", bar.x, bar.height)?;
    }

    Ok(())
}
