//! Coordinate types.
//!
//! Routing only ever looks at the horizontal plane, in metres.  Waypoints may
//! arrive already projected ([`Position`], e.g. UTM easting/northing) or as
//! WGS-84 latitude/longitude ([`GeoPoint`]).  Geographic points are projected
//! onto a local tangent plane around a reference point before any distance
//! is taken, so a degree of longitude is never weighed like a degree of
//! latitude.  Elevation is carried for consumers that draw the path.

/// Metres per degree of latitude on the mean sphere.
pub const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// A projected position: `x`/`y` in metres plus optional elevation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub z: Option<f64>,
}

impl Position {
    /// 2-D position with unknown elevation.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    #[inline]
    pub fn with_elevation(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// 2-D Euclidean distance, ignoring elevation.  Always non-negative.
    #[inline]
    pub fn planar_distance(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.z {
            Some(z) => write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, z),
            None => write!(f, "({:.3}, {:.3})", self.x, self.y),
        }
    }
}

/// A WGS-84 geographic coordinate in degrees, with optional altitude in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alt: Option<f64>,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, alt: None }
    }

    #[inline]
    pub fn with_altitude(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt: Some(alt) }
    }

    /// Equirectangular projection onto the plane tangent at `origin`.
    ///
    /// `x` points east and `y` north, both in metres from `origin`.  Accurate
    /// to well under 1 % over a few tens of kilometres, which covers any
    /// single route network.  Altitude becomes `z`.
    pub fn project(self, origin: GeoPoint) -> Position {
        // Clamp keeps the longitude scale non-zero at the poles.
        let meters_per_deg_lon = origin.lat.to_radians().cos().abs().max(0.01) * METERS_PER_DEG_LAT;
        Position {
            x: (self.lon - origin.lon) * meters_per_deg_lon,
            y: (self.lat - origin.lat) * METERS_PER_DEG_LAT,
            z: self.alt,
        }
    }

    /// Mean latitude and longitude of `points`.  `None` if `points` is empty.
    pub fn centroid<I>(points: I) -> Option<GeoPoint>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let (count, lat, lon) = points
            .into_iter()
            .fold((0usize, 0.0, 0.0), |(n, lat, lon), p| (n + 1, lat + p.lat, lon + p.lon));
        (count > 0).then(|| GeoPoint::new(lat / count as f64, lon / count as f64))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.alt {
            Some(alt) => write!(f, "({:.6}, {:.6}, {:.1})", self.lat, self.lon, alt),
            None => write!(f, "({:.6}, {:.6})", self.lat, self.lon),
        }
    }
}

/// Where a waypoint sits: already projected, or geographic.
///
/// In JSON the variant is picked by field names: `{"x", "y"}` is planar,
/// `{"lat", "lon"}` is geographic.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Location {
    Planar(Position),
    Geo(GeoPoint),
}

impl Location {
    /// Elevation or altitude, if known.
    pub fn elevation(&self) -> Option<f64> {
        match self {
            Location::Planar(p) => p.z,
            Location::Geo(g) => g.alt,
        }
    }

    pub fn as_geo(&self) -> Option<GeoPoint> {
        match self {
            Location::Geo(g) => Some(*g),
            Location::Planar(_) => None,
        }
    }
}

impl From<Position> for Location {
    fn from(p: Position) -> Self {
        Location::Planar(p)
    }
}

impl From<GeoPoint> for Location {
    fn from(g: GeoPoint) -> Self {
        Location::Geo(g)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Planar(p) => std::fmt::Display::fmt(p, f),
            Location::Geo(g) => std::fmt::Display::fmt(g, f),
        }
    }
}
