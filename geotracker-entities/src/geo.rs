use std::fmt;

pub const LAT_MIN: f64 = -90.0;
pub const LAT_MAX: f64 = 90.0;
pub const LNG_MIN: f64 = -180.0;
pub const LNG_MAX: f64 = 180.0;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    /// New York City, used whenever the device position is unknown.
    pub const DEFAULT: Self = Self::new(40.7128, -74.006);

    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (LAT_MIN..=LAT_MAX).contains(&self.lat)
            && (LNG_MIN..=LNG_MAX).contains(&self.lng)
    }

    /// Human readable latitude/longitude, e.g.
    /// `Latitude: 40.7128° N, Longitude: 74.0060° W`.
    #[must_use]
    pub const fn display(&self) -> DisplayCoordinates<'_> {
        DisplayCoordinates(self)
    }
}

impl From<(f64, f64)> for Position {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatHemisphere {
    North,
    South,
}

impl LatHemisphere {
    #[must_use]
    pub fn of(lat: f64) -> Self {
        if lat >= 0.0 {
            Self::North
        } else {
            Self::South
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LngHemisphere {
    East,
    West,
}

impl LngHemisphere {
    #[must_use]
    pub fn of(lng: f64) -> Self {
        if lng >= 0.0 {
            Self::East
        } else {
            Self::West
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::East => "E",
            Self::West => "W",
        }
    }
}

#[derive(Debug)]
pub struct DisplayCoordinates<'a>(&'a Position);

impl fmt::Display for DisplayCoordinates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Position { lat, lng } = *self.0;
        write!(
            f,
            "Latitude: {:.4}° {}, Longitude: {:.4}° {}",
            lat.abs(),
            LatHemisphere::of(lat).as_str(),
            lng.abs(),
            LngHemisphere::of(lng).as_str()
        )
    }
}

#[must_use]
pub fn format_coordinates(pos: &Position) -> String {
    pos.display().to_string()
}
