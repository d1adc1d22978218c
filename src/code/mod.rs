//! Registration-code derivation and collision accounting.

mod collisions;
mod deriver;

pub use collisions::{collision_stats, CollisionStats};
pub use deriver::{combined, derive, hash_combined};
