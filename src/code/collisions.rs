//! Exact-collision accounting over a batch of registrations.
//!
//! The 6-digit code space is tiny (10^6), so collisions are expected at
//! realistic attendance numbers. This module measures the rate so it can be
//! reported rather than pretending uniqueness exists.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::code::derive;
use crate::domain::{RegistrationCode, RegistrationInput};

/// Summary of exact code collisions in one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionStats {
    pub n_inputs: usize,
    pub n_distinct: usize,
    /// Inputs that landed on a code already taken by an earlier input.
    pub n_colliding: usize,
}

impl CollisionStats {
    pub fn rate(&self) -> f64 {
        if self.n_inputs == 0 {
            return 0.0;
        }
        self.n_colliding as f64 / self.n_inputs as f64
    }
}

/// Derive codes for every input (in parallel) and count duplicates.
pub fn collision_stats(inputs: &[RegistrationInput]) -> CollisionStats {
    let codes: Vec<RegistrationCode> = inputs.par_iter().map(derive).collect();

    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(codes.len());
    for code in &codes {
        *counts.entry(code.as_str()).or_insert(0) += 1;
    }

    let n_distinct = counts.len();
    CollisionStats {
        n_inputs: inputs.len(),
        n_distinct,
        n_colliding: inputs.len() - n_distinct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input(name: &str, phone: &str) -> RegistrationInput {
        RegistrationInput {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: phone.to_string(),
            event_name: "Sample Event".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn identical_inputs_collide_by_construction() {
        let inputs = vec![
            input("Jane Doe", "+1000"),
            input("Jane Doe", "+1000"),
            input("John Roe", "+2000"),
        ];
        let stats = collision_stats(&inputs);
        assert_eq!(stats.n_inputs, 3);
        assert_eq!(stats.n_distinct, 2);
        assert_eq!(stats.n_colliding, 1);
    }

    #[test]
    fn empty_batch_has_zero_rate() {
        let stats = collision_stats(&[]);
        assert_eq!(stats.n_colliding, 0);
        assert_eq!(stats.rate(), 0.0);
    }

    #[test]
    fn varied_sample_collides_below_one_percent() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let inputs =
            crate::data::generate_inputs("Sample Event", date, 10_000, 42).unwrap();
        let stats = collision_stats(&inputs);
        assert_eq!(stats.n_inputs, 10_000);
        assert!(
            stats.rate() < 0.01,
            "collision rate {:.4} exceeds 1% ({} of {})",
            stats.rate(),
            stats.n_colliding,
            stats.n_inputs
        );
    }
}
