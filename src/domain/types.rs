//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during a registration
//! - exported to JSON records
//! - reloaded later for re-rendering a saved barcode

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One submission attempt's worth of form data.
///
/// All free-text fields are kept exactly as entered; the event name and date
/// are the externally-supplied context values (query parameters, env, or CLI
/// flags). The derivation in [`crate::code`] is byte-sensitive to all five.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_name: String,
    pub event_date: NaiveDate,
}

impl RegistrationInput {
    /// Check that every required field is present.
    ///
    /// This is the caller-side validation gate: the deriver itself is total
    /// and never raises, so missing fields must be caught here.
    pub fn validate(&self) -> Result<(), AppError> {
        for (label, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("event name", &self.event_name),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::usage(format!("Missing required field: {label}.")));
            }
        }
        Ok(())
    }
}

/// A derived registration code: exactly 6 ASCII digits.
///
/// Codes have no identity beyond their value; two registrations may collide
/// and that is accepted (no uniqueness is enforced anywhere).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrationCode(String);

impl RegistrationCode {
    /// Validate an externally-supplied code (record JSON, `--code` flag).
    pub fn parse(s: &str) -> Result<Self, AppError> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::usage(format!(
                "Invalid registration code '{s}': expected exactly 6 ASCII digits."
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Construct from the deriver, which guarantees the digit invariant.
    pub(crate) fn from_derived(digits: String) -> Self {
        debug_assert!(digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit()));
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegistrationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Barcode geometry.
///
/// The defaults reproduce the check-in form's look: 3px bars with 2px gaps,
/// an 80px tall bar band below a 20px top margin (the band reaches the
/// bottom edge), 20px side margins, and bar heights stepping down 8px per
/// digit increment. The label sits half a margin above the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeStyle {
    pub bar_width: u32,
    pub spacing: u32,
    pub bar_height: u32,
    pub margin: u32,
    /// Height lost per digit increment (digit 0 = full bar, digit 9 = shortest).
    pub digit_step: u32,
}

impl Default for BarcodeStyle {
    fn default() -> Self {
        Self {
            bar_width: 3,
            spacing: 2,
            bar_height: 80,
            margin: 20,
            digit_step: 8,
        }
    }
}

impl BarcodeStyle {
    /// Horizontal advance per rendered character.
    pub fn slot_width(self) -> u32 {
        self.bar_width + self.spacing
    }

    /// Surface width for a code of `len` characters.
    pub fn surface_width(self, len: u32) -> u32 {
        len * self.slot_width() + 2 * self.margin
    }

    /// Surface height (independent of code length): the top margin plus the
    /// full bar band, which runs to the bottom edge.
    pub fn surface_height(self) -> u32 {
        self.bar_height + self.margin
    }
}

/// One opaque foreground rectangle of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A fully laid-out bar pattern, ready to draw on any surface.
///
/// Exists only for the duration of a render; not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarPattern {
    pub width: u32,
    pub height: u32,
    pub bars: Vec<Bar>,
    /// The code text drawn centered beneath the bars.
    pub label: String,
}

/// A saved registration (JSON).
///
/// This is the "portable" representation of one successful submission:
/// the exact inputs plus the code they derived to. Re-rendering a record
/// reproduces the same barcode bit-for-bit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub tool: String,
    pub registered_on: NaiveDate,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub code: RegistrationCode,
}

impl RegistrationRecord {
    pub fn input(&self) -> RegistrationInput {
        RegistrationInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            event_name: self.event_name.clone(),
            event_date: self.event_date,
        }
    }
}
