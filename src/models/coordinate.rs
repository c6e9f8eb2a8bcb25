use crate::error::{ProcessingError, Result};
use crate::utils::constants::{MAX_LATITUDE, MIN_LATITUDE, UTM_MAX_LATITUDE, UTM_MIN_LATITUDE};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which latitudes the transform is willing to project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LatitudeCoverage {
    /// The UTM grid proper, [-80, 84]
    #[default]
    Standard,
    /// Anything short of the poles themselves
    Extended,
}

impl LatitudeCoverage {
    pub fn contains(&self, latitude: f64) -> bool {
        match self {
            Self::Standard => (UTM_MIN_LATITUDE..=UTM_MAX_LATITUDE).contains(&latitude),
            Self::Extended => latitude > MIN_LATITUDE && latitude < MAX_LATITUDE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoCoordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate and reject anything the UTM transform cannot handle
    pub fn checked(latitude: f64, longitude: f64, coverage: LatitudeCoverage) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ProcessingError::InvalidCoordinate(format!(
                "({}, {}) is not a finite coordinate",
                latitude, longitude
            )));
        }

        let coordinate = Self::new(latitude, longitude);
        coordinate.validate().map_err(|errors| {
            let fields = errors.field_errors();
            let message = if fields.contains_key("latitude") {
                format!("latitude {} is outside [-90, 90]", latitude)
            } else {
                format!("longitude {} is outside [-180, 180]", longitude)
            };
            ProcessingError::InvalidCoordinate(message)
        })?;

        if !coverage.contains(latitude) {
            return Err(ProcessingError::InvalidCoordinate(format!(
                "latitude {} is outside UTM coverage ({:?})",
                latitude, coverage
            )));
        }

        Ok(coordinate)
    }
}
