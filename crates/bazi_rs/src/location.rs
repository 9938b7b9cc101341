//! Birth locations and the resolver seam for place names.
//!
//! Geocoding and time zone lookup live outside this crate; a
//! [`LocationResolver`] supplies the precomputed longitude and UTC offset.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::chart::{BirthInput, ChartResult, compute_input};
use crate::error::ChartError;

/// Longitude and zone offset of a birth place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Degrees east positive.
    pub longitude_deg: f64,
    /// Hours east of UTC, may be fractional.
    pub utc_offset_hours: f64,
}

impl Location {
    pub const fn new(longitude_deg: f64, utc_offset_hours: f64) -> Self {
        Self {
            longitude_deg,
            utc_offset_hours,
        }
    }
}

/// Maps a place name to a location.
pub trait LocationResolver {
    fn resolve(&self, place: &str) -> Option<Location>;
}

/// In-memory resolver keyed by lowercase place name.
#[derive(Debug, Clone, Default)]
pub struct FixedLocations {
    places: HashMap<String, Location>,
}

impl FixedLocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a place.
    pub fn insert(&mut self, name: &str, location: Location) -> Option<Location> {
        self.places.insert(normalize(name), location)
    }

    pub fn with(mut self, name: &str, location: Location) -> Self {
        self.insert(name, location);
        self
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Location)> for FixedLocations {
    fn from_iter<I: IntoIterator<Item = (S, Location)>>(iter: I) -> Self {
        Self {
            places: iter
                .into_iter()
                .map(|(k, v)| (normalize(k.as_ref()), v))
                .collect(),
        }
    }
}

impl LocationResolver for FixedLocations {
    fn resolve(&self, place: &str) -> Option<Location> {
        self.places.get(&normalize(place)).copied()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolve `place` and compute its chart.
pub fn compute_for_place<R: LocationResolver + ?Sized>(
    resolver: &R,
    place: &str,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<ChartResult, ChartError> {
    let Some(location) = resolver.resolve(place) else {
        tracing::debug!(place, "place not resolved");
        return Err(ChartError::UnresolvedPlace(place.to_string()));
    };
    compute_input(&BirthInput::new(date, time, location))
}
