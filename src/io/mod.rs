//! File exports: raster barcodes (PGM) and registration records (JSON).

pub mod export;
pub mod record;

pub use export::write_pgm;
pub use record::{read_record_json, write_record_json};
