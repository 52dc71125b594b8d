//! Reference ellipsoid and geodetic coordinates.

use glam::DVec3;

/// A geodetic position: longitude and latitude in radians, height in meters
/// above the ellipsoid surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cartographic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

impl Cartographic {
    #[must_use]
    pub const fn from_radians(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    #[must_use]
    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Self::from_radians(longitude.to_radians(), latitude.to_radians(), height)
    }
}

/// An ellipsoid centered at the origin, described by its semi-axis radii.
///
/// X and Y are the equatorial radii, Z the polar radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    radii: DVec3,
    radii_squared: DVec3,
}

impl Ellipsoid {
    /// Number of `f64` values in the packed form.
    pub const PACKED_LENGTH: usize = 3;

    /// The WGS84 ellipsoid.
    pub const WGS84: Self = Self::from_xyz(6_378_137.0, 6_378_137.0, 6_356_752.314_245_179);

    /// A sphere of radius 1.
    pub const UNIT_SPHERE: Self = Self::from_xyz(1.0, 1.0, 1.0);

    const fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            radii: DVec3::new(x, y, z),
            radii_squared: DVec3::new(x * x, y * y, z * z),
        }
    }

    #[must_use]
    pub fn new(radii: DVec3) -> Self {
        Self::from_xyz(radii.x, radii.y, radii.z)
    }

    /// A sphere with all three radii equal to `radius`.
    #[must_use]
    pub fn sphere(radius: f64) -> Self {
        Self::from_xyz(radius, radius, radius)
    }

    #[must_use]
    pub fn radii(&self) -> DVec3 {
        self.radii
    }

    #[must_use]
    pub fn radii_squared(&self) -> DVec3 {
        self.radii_squared
    }

    /// Build from packed `[x, y, z]` radii.
    #[must_use]
    pub fn from_packed(packed: [f64; Self::PACKED_LENGTH]) -> Self {
        Self::new(DVec3::from_array(packed))
    }

    #[must_use]
    pub fn to_packed(&self) -> [f64; Self::PACKED_LENGTH] {
        self.radii.to_array()
    }

    /// Unit normal to the ellipsoid surface at the given longitude and
    /// latitude.
    #[must_use]
    pub fn geodetic_surface_normal(&self, cartographic: Cartographic) -> DVec3 {
        let (sin_lon, cos_lon) = cartographic.longitude.sin_cos();
        let (sin_lat, cos_lat) = cartographic.latitude.sin_cos();
        DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat).normalize()
    }

    /// Convert a geodetic position to ellipsoid-centered Cartesian
    /// coordinates.
    ///
    /// The surface normal is scaled by the squared radii and renormalized so
    /// the point lies on the surface, then offset by `height` along the normal.
    #[must_use]
    pub fn cartographic_to_cartesian(&self, cartographic: Cartographic) -> DVec3 {
        let normal = self.geodetic_surface_normal(cartographic);
        let k = self.radii_squared * normal;
        let gamma = normal.dot(k).sqrt();
        k / gamma + normal * cartographic.height
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
