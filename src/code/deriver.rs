//! Deterministic 6-digit code derivation.
//!
//! The mapping is a plain 31-multiplier string hash with 32-bit signed
//! wraparound, applied to the five registration fields concatenated in a
//! fixed order. The wraparound must happen at every step (i32 wrapping ops,
//! never wider arithmetic) or codes stop matching across implementations.

use crate::domain::{RegistrationCode, RegistrationInput};

/// Concatenate the five input fields in derivation order, no separators.
///
/// The event date is rendered as an ISO calendar date (`YYYY-MM-DD`), which is
/// the form the context value arrives in.
pub fn combined(input: &RegistrationInput) -> String {
    format!(
        "{}{}{}{}{}",
        input.name,
        input.email,
        input.phone,
        input.event_name,
        input.event_date.format("%Y-%m-%d")
    )
}

/// 32-bit signed accumulator hash: `acc = acc * 31 + code_point` per character.
///
/// `acc * 31` is computed as a wrapping multiply, which is identical modulo
/// 2^32 to the `(acc << 5) - acc` formulation.
pub fn hash_combined(text: &str) -> i32 {
    let mut acc: i32 = 0;
    for ch in text.chars() {
        acc = acc.wrapping_mul(31).wrapping_add(ch as u32 as i32);
    }
    acc
}

/// Derive the registration code for one submission.
///
/// Pure and total: any input tuple maps to exactly 6 ASCII digits. Collisions
/// are possible past the hash's 32-bit precision and are not corrected.
pub fn derive(input: &RegistrationInput) -> RegistrationCode {
    let acc = hash_combined(&combined(input));
    RegistrationCode::from_derived(code_digits(acc))
}

/// Absolute value, decimal, left-padded to at least 6 digits, last 6 kept.
fn code_digits(acc: i32) -> String {
    // unsigned_abs avoids the i32::MIN overflow that a plain abs() would hit.
    let digits = format!("{:06}", acc.unsigned_abs());
    digits[digits.len() - 6..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn jane() -> RegistrationInput {
        RegistrationInput {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "+1000".to_string(),
            event_name: "Sample Event".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn hash_of_empty_string_is_zero() {
        assert_eq!(hash_combined(""), 0);
        assert_eq!(code_digits(0), "000000");
    }

    #[test]
    fn hash_golden_values() {
        assert_eq!(hash_combined("a"), 97);
        assert_eq!(hash_combined("abc"), 96_354);
        assert_eq!(
            hash_combined("Jane Doejane@x.com+1000Sample Event2024-01-01"),
            1_876_923_917
        );
    }

    #[test]
    fn short_accumulators_are_left_padded() {
        assert_eq!(code_digits(97), "000097");
        assert_eq!(code_digits(96_354), "096354");
    }

    #[test]
    fn negative_accumulators_use_absolute_value() {
        // "Jane Doejane@x.com+1001Sample Event2024-01-01" wraps negative.
        let mut input = jane();
        input.phone = "+1001".to_string();
        assert_eq!(hash_combined(&combined(&input)), -1_173_278_898);
        assert_eq!(derive(&input).as_str(), "278898");
    }

    #[test]
    fn end_to_end_golden_code() {
        assert_eq!(derive(&jane()).as_str(), "923917");
    }

    #[test]
    fn derivation_is_deterministic_across_calls() {
        let input = jane();
        let first = derive(&input);
        for _ in 0..10 {
            assert_eq!(derive(&input), first);
        }
    }

    #[test]
    fn codes_are_always_six_ascii_digits() {
        let mut inputs = vec![jane()];
        let mut unicode = jane();
        unicode.name = "Żółć Ćwikła".to_string();
        inputs.push(unicode);
        let mut empty_fields = jane();
        empty_fields.name.clear();
        empty_fields.email.clear();
        empty_fields.phone.clear();
        empty_fields.event_name.clear();
        inputs.push(empty_fields);

        for input in &inputs {
            let code = derive(input);
            assert_eq!(code.as_str().len(), 6);
            assert!(code.as_str().bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn field_order_matters() {
        let a = jane();
        let mut b = jane();
        // Swap name and email; the concatenation (and thus the code) changes.
        std::mem::swap(&mut b.name, &mut b.email);
        assert_ne!(combined(&a), combined(&b));
        assert_ne!(derive(&a), derive(&b));
    }
}
