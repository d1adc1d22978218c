//! Shared registration pipeline used by both the CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> derive code -> lay out bar pattern
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::domain::{BarPattern, BarcodeStyle, RegistrationCode, RegistrationInput};
use crate::error::AppError;

/// All computed outputs of one successful submission.
#[derive(Debug, Clone)]
pub struct RegistrationOutput {
    pub input: RegistrationInput,
    pub code: RegistrationCode,
    pub pattern: BarPattern,
    pub style: BarcodeStyle,
}

/// Run the full registration pipeline for one submission attempt.
///
/// Validation happens before derivation, so a missing field never reaches the
/// deriver. Layout cannot fail here in practice (derived codes are digit-only)
/// but its error path is still propagated rather than swallowed.
pub fn register(
    input: &RegistrationInput,
    style: &BarcodeStyle,
) -> Result<RegistrationOutput, AppError> {
    input.validate()?;

    let code = crate::code::derive(input);
    let pattern = crate::render::layout(code.as_str(), style)?;

    Ok(RegistrationOutput {
        input: input.clone(),
        code,
        pattern,
        style: *style,
    })
}
