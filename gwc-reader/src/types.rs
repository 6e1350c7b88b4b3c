//! Core types for the GWC reader library
//!
//! This module defines the dataset produced by a single parse call. The reader
//! is stateless: a `GwcDataset` is built once and only read afterwards.

use std::path::PathBuf;

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, GwcError>;

/// Weibull statistics for one direction sector at one measurement height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorRecord {
    /// Fraction of time the wind blows from this sector
    pub frequency: f64,
    /// Weibull scale parameter A
    pub scale_a: f64,
    /// Weibull shape parameter k
    pub shape_k: f64,
}

impl SectorRecord {
    pub fn new(frequency: f64, scale_a: f64, shape_k: f64) -> Self {
        Self {
            frequency,
            scale_a,
            shape_k,
        }
    }

    /// The record as a `(frequency, A, k)` triple
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.frequency, self.scale_a, self.shape_k)
    }
}

impl From<(f64, f64, f64)> for SectorRecord {
    fn from((frequency, scale_a, shape_k): (f64, f64, f64)) -> Self {
        Self::new(frequency, scale_a, shape_k)
    }
}

/// All sector records stored under one (truncated) measurement height
#[derive(Debug, Clone, PartialEq)]
pub struct HeightBucket {
    /// Measurement height in whole meters
    pub height: i64,
    /// Records ordered by increasing direction index
    pub sectors: Vec<SectorRecord>,
}

/// A parsed GWC file: height buckets in the order the altitude line lists them
///
/// Keys are unique. When two altitudes truncate to the same whole meter, their
/// records share one bucket and are appended in parse order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GwcDataset {
    title: String,
    direction_count: usize,
    buckets: Vec<HeightBucket>,
}

impl GwcDataset {
    pub(crate) fn new(title: impl Into<String>, direction_count: usize) -> Self {
        Self {
            title: title.into(),
            direction_count,
            buckets: Vec::new(),
        }
    }

    /// Register a height key, keeping the position of its first appearance.
    ///
    /// Returns false if the key was already present.
    pub(crate) fn insert_height(&mut self, height: i64) -> bool {
        if self.bucket(height).is_some() {
            return false;
        }
        self.buckets.push(HeightBucket {
            height,
            sectors: Vec::new(),
        });
        true
    }

    /// Append a record to the bucket for `height`, creating the bucket if needed
    pub(crate) fn push_record(&mut self, height: i64, record: SectorRecord) {
        self.insert_height(height);
        if let Some(bucket) = self.buckets.iter_mut().find(|b| b.height == height) {
            bucket.sectors.push(record);
        }
    }

    fn bucket(&self, height: i64) -> Option<&HeightBucket> {
        self.buckets.iter().find(|b| b.height == height)
    }

    /// Title line of the source file
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of direction sectors declared in the header
    pub fn direction_count(&self) -> usize {
        self.direction_count
    }

    /// Sector records for a height, ordered by direction index
    pub fn get(&self, height: i64) -> Option<&[SectorRecord]> {
        self.bucket(height).map(|b| b.sectors.as_slice())
    }

    /// Height keys in file order
    pub fn heights(&self) -> impl Iterator<Item = i64> + '_ {
        self.buckets.iter().map(|b| b.height)
    }

    /// `(height, sectors)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[SectorRecord])> + '_ {
        self.buckets.iter().map(|b| (b.height, b.sectors.as_slice()))
    }

    /// Number of distinct height keys
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of the sector frequencies stored for a height
    pub fn total_frequency(&self, height: i64) -> Option<f64> {
        self.get(height)
            .map(|sectors| sectors.iter().map(|s| s.frequency).sum())
    }
}

/// Errors that can occur while reading a GWC file
#[derive(Debug, thiserror::Error)]
pub enum GwcError {
    #[error("Failed to read GWC file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GWC file too short: non-empty line {index} (0-based) required, only {available} non-empty lines present")]
    MissingLine { index: usize, available: usize },

    #[error("Malformed GWC data on line {line}: {message}")]
    Format { line: usize, message: String },
}

impl GwcError {
    /// True for layout and number errors, false for I/O failures
    pub fn is_format(&self) -> bool {
        matches!(self, GwcError::MissingLine { .. } | GwcError::Format { .. })
    }
}
