//! Latitude/longitude to UTM transform.
//!
//! Zone selection lives in [`zone`]; the ellipsoidal math is delegated to a
//! [`Projector`] so the backing library can be swapped without touching the
//! pipeline.

pub mod proj4;
pub mod zone;

pub use proj4::Proj4Projector;
pub use zone::{band_letter, zone_for, zone_number};

use crate::error::Result;
use crate::models::{GeoCoordinate, LatitudeCoverage, ProjectedPoint, UtmProjection, UtmZone};

/// Forward and inverse WGS84 UTM projection
pub trait Projector {
    /// Pick the zone for `coordinate` and project it to easting/northing
    fn project(&self, coordinate: &GeoCoordinate) -> Result<UtmProjection>;

    /// Map a point expressed in `zone` back to latitude/longitude
    fn unproject(&self, point: &ProjectedPoint, zone: &UtmZone) -> Result<GeoCoordinate>;
}

/// Validates raw degrees and hands them to a [`Projector`]
pub struct Transformer<P = Proj4Projector> {
    projector: P,
    coverage: LatitudeCoverage,
}

impl Transformer<Proj4Projector> {
    pub fn new() -> Result<Self> {
        Ok(Self::with_projector(Proj4Projector::new()?))
    }
}

impl<P: Projector> Transformer<P> {
    pub fn with_projector(projector: P) -> Self {
        Self {
            projector,
            coverage: LatitudeCoverage::Standard,
        }
    }

    pub fn with_coverage(mut self, coverage: LatitudeCoverage) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn coverage(&self) -> LatitudeCoverage {
        self.coverage
    }

    pub fn projector(&self) -> &P {
        &self.projector
    }

    pub fn transform(&self, latitude: f64, longitude: f64) -> Result<UtmProjection> {
        let coordinate = GeoCoordinate::checked(latitude, longitude, self.coverage)?;
        self.projector.project(&coordinate)
    }
}

/// Project one coordinate with the default projector and standard UTM coverage
///
/// # Examples
/// ```
/// use utm_reproject::projection::lat_lon_to_utm;
///
/// let point = lat_lon_to_utm(40.7128, -74.0060).unwrap();
/// assert!((point.easting - 583959.4).abs() < 1.0);
/// assert!((point.northing - 4507351.0).abs() < 1.0);
/// ```
pub fn lat_lon_to_utm(latitude: f64, longitude: f64) -> Result<ProjectedPoint> {
    Transformer::new()?
        .transform(latitude, longitude)
        .map(|projection| projection.point)
}
