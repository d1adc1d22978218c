//! Seeded random registration-tuple generation.
//!
//! Used by `checkin batch` to measure code collisions over a realistic
//! spread of attendee data. The generator is fully determined by its seed so
//! collision numbers are reproducible.

use rand::prelude::*;
use rand::rngs::StdRng;

use chrono::NaiveDate;

use crate::domain::RegistrationInput;
use crate::error::AppError;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Donald", "Edsger", "Frances", "Grace",
    "Hedy", "John", "Katherine", "Ken", "Leslie", "Linus", "Margaret", "Niklaus", "Radia",
    "Robin", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Backus", "Hamilton", "Hopper", "Johnson", "Kay", "Knuth", "Lamport", "Liskov",
    "Lovelace", "McCarthy", "Milner", "Perlman", "Ritchie", "Shannon", "Thompson",
    "Torvalds", "Turing", "Wilkes", "Wirth", "Berners-Lee",
];

const MAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "inbox.test"];

/// Generate `count` plausible registration tuples for one event.
///
/// Names repeat (small word lists), but emails and phones carry enough random
/// digits that exact input duplicates are effectively impossible; collisions
/// measured downstream are therefore hash collisions, not data duplicates.
pub fn generate_inputs(
    event_name: &str,
    event_date: NaiveDate,
    count: usize,
    seed: u64,
) -> Result<Vec<RegistrationInput>, AppError> {
    if count == 0 {
        return Err(AppError::usage("Batch count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut inputs = Vec::with_capacity(count);

    for i in 0..count {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let name = format!("{first} {last}");

        let domain = MAIL_DOMAINS[rng.gen_range(0..MAIL_DOMAINS.len())];
        let email = format!(
            "{}.{}{}@{domain}",
            first.to_lowercase(),
            last.to_lowercase(),
            rng.gen_range(0..10_000u32)
        );

        let mut phone = String::from("+1");
        for _ in 0..10 {
            phone.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }

        let input = RegistrationInput {
            name,
            email,
            phone,
            event_name: event_name.to_string(),
            event_date,
        };
        debug_assert!(input.validate().is_ok(), "generated input {i} invalid");
        inputs.push(input);
    }

    Ok(inputs)
}
