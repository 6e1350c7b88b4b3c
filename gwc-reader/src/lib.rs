//! GWC Reader Library
//!
//! Reads GWC wind-statistics files: Weibull A/k parameters per direction
//! sector and measurement height, plus the frequency of each sector.
//!
//! # Architecture
//!
//! This library only parses:
//! - Reads a whole file and interprets its fixed line positions
//! - Produces an immutable `GwcDataset` keyed by whole-meter height
//!
//! The library does NOT print or format anything. Reporting lives in the
//! application layer (gwc-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use gwc_reader::parse_gwc_file;
//! use std::path::Path;
//!
//! let dataset = parse_gwc_file(Path::new("Vineyard_Wind_GWC.lib")).unwrap();
//!
//! for (height, sectors) in dataset.iter() {
//!     println!("{} m: {} sectors", height, sectors.len());
//! }
//! ```

// Public modules
pub mod parser;
pub mod types;

// Re-export main types for convenience
pub use parser::{parse_gwc_file, parse_gwc_str};
pub use types::{GwcDataset, GwcError, HeightBucket, Result, SectorRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
