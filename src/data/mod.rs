//! Synthetic registration data for demos and collision measurement.

mod sample;

pub use sample::generate_inputs;
