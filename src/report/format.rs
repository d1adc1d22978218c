//! Terminal report formatting.
//!
//! We keep formatting code in one place so:
//! - derivation/rendering code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::RegistrationOutput;
use crate::code::CollisionStats;

/// Format the summary printed after a successful `checkin register`.
pub fn format_registration_summary(out: &RegistrationOutput) -> String {
    let mut s = String::new();

    s.push_str("=== checkin - Event Registration ===\n");
    s.push_str(&format!("Event: {}\n", out.input.event_name));
    s.push_str(&format!("Date : {}\n", out.input.event_date));
    s.push('\n');
    s.push_str(&format!("Name : {}\n", out.input.name));
    s.push_str(&format!("Email: {}\n", out.input.email));
    s.push_str(&format!("Phone: {}\n", out.input.phone));
    s.push('\n');
    s.push_str(&format!("Registration code: {}\n", out.code));
    s.push_str(&format!(
        "Barcode: {} bars on a {}x{} surface\n",
        out.pattern.bars.len(),
        out.pattern.width,
        out.pattern.height
    ));

    s
}

/// Format the collision statistics from a `checkin batch` run.
pub fn format_collision_report(
    stats: &CollisionStats,
    event_name: &str,
    seed: u64,
) -> String {
    let mut s = String::new();

    s.push_str("=== checkin - Batch Collision Report ===\n");
    s.push_str(&format!("Event: {event_name}\n"));
    s.push_str(&format!("Seed : {seed}\n"));
    s.push('\n');
    s.push_str(&format!(
        "{:<20} {:>10}\n",
        "registrations", stats.n_inputs
    ));
    s.push_str(&format!("{:<20} {:>10}\n", "distinct codes", stats.n_distinct));
    s.push_str(&format!("{:<20} {:>10}\n", "collisions", stats.n_colliding));
    s.push_str(&format!(
        "{:<20} {:>9.3}%\n",
        "collision rate",
        stats.rate() * 100.0
    ));

    s
}
