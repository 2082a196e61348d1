//! Real Jaipur landmarks for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap, rounded to four decimals.

#![allow(dead_code)]

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

// ============================================================================
// Old City (walled city, all within ~1.5 km)
// ============================================================================

pub const OLD_CITY: &[Location] = &[
    Location::new("Hawa Mahal", 26.9239, 75.8267),
    Location::new("City Palace", 26.9258, 75.8237),
    Location::new("Jantar Mantar", 26.9248, 75.8246),
    Location::new("Govind Dev Ji Temple", 26.9290, 75.8236),
    Location::new("Albert Hall Museum", 26.9116, 75.8195),
];

// ============================================================================
// Forts and lakes on the northern ridge
// ============================================================================

pub const NORTHERN_RIDGE: &[Location] = &[
    Location::new("Amber Fort", 26.9855, 75.8513),
    Location::new("Jal Mahal", 26.9535, 75.8462),
    Location::new("Nahargarh Fort", 26.9373, 75.8155),
    Location::new("Jaigarh Fort", 26.9851, 75.8456),
];

// ============================================================================
// South Jaipur / transport hubs
// ============================================================================

pub const SOUTH: &[Location] = &[
    Location::new("Birla Mandir", 26.8921, 75.8155),
    Location::new("Jaipur Junction", 26.9196, 75.7878),
    Location::new("Jaipur International Airport", 26.8242, 75.8122),
];

/// Every fixture location, old city first.
pub fn all() -> Vec<&'static Location> {
    OLD_CITY
        .iter()
        .chain(NORTHERN_RIDGE)
        .chain(SOUTH)
        .collect()
}
