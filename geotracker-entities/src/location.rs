use thiserror::Error;

/// Why the device position could not be determined.
///
/// The numeric codes follow the W3C geolocation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Permission denied. Please allow location access.")]
    PermissionDenied,
    #[error("Location unavailable. Please try again later.")]
    PositionUnavailable,
    #[error("Location request timed out. Please try again.")]
    Timeout,
    #[error("Unable to get your location. Using default location.")]
    Unsupported,
    #[error("Unable to get your location. Using default location.")]
    Unknown(u16),
}

impl LocationError {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            Self::PERMISSION_DENIED => Self::PermissionDenied,
            Self::POSITION_UNAVAILABLE => Self::PositionUnavailable,
            Self::TIMEOUT => Self::Timeout,
            _ => Self::Unknown(code),
        }
    }

    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::PermissionDenied => Self::PERMISSION_DENIED,
            Self::PositionUnavailable => Self::POSITION_UNAVAILABLE,
            Self::Timeout => Self::TIMEOUT,
            Self::Unsupported => 0,
            Self::Unknown(code) => *code,
        }
    }

    /// The message shown to the user instead of the coordinates.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
