use std::sync::Arc;

use crate::dataset::{DatasetRole, SourceRecord};

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Outcome of resolving one record's address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Some candidate query yielded a coordinate.
    Resolved(Coordinate),
    /// Every candidate query came back empty.
    Unresolved,
}

/// A source record with its resolved coordinate attached.
#[derive(Debug, Clone)]
pub struct ResolvedRecord {
    /// The originating row.
    pub record: Arc<SourceRecord>,
    /// The resolved coordinate.
    pub coordinate: Coordinate,
}

/// A record whose address could not be resolved by any candidate query.
#[derive(Debug, Clone)]
pub struct ErrorEntry {
    /// Which dataset the record came from.
    pub role: DatasetRole,
    /// The raw address text, preserved verbatim.
    pub address: String,
    /// The originating row.
    pub record: Arc<SourceRecord>,
}
