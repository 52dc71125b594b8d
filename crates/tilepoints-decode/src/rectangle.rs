//! Geodetic bounding rectangle.

use crate::transform::lerp;

/// A longitude/latitude extent in radians.
///
/// Tiles express their rectangle in a local frame where `west <= east` and
/// `south <= north`; no antimeridian wrapping is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Rectangle {
    /// Number of `f64` values in the packed form.
    pub const PACKED_LENGTH: usize = 4;

    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Build from packed `[west, south, east, north]`.
    #[must_use]
    pub const fn from_packed(packed: [f64; Self::PACKED_LENGTH]) -> Self {
        let [west, south, east, north] = packed;
        Self::new(west, south, east, north)
    }

    #[must_use]
    pub const fn to_packed(&self) -> [f64; Self::PACKED_LENGTH] {
        [self.west, self.south, self.east, self.north]
    }

    /// Longitude at fraction `t` of the way from west to east.
    #[must_use]
    pub fn longitude_at(&self, t: f64) -> f64 {
        lerp(self.west, self.east, t)
    }

    /// Latitude at fraction `t` of the way from south to north.
    #[must_use]
    pub fn latitude_at(&self, t: f64) -> f64 {
        lerp(self.south, self.north, t)
    }
}
