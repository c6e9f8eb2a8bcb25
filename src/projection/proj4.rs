use crate::error::{ProcessingError, Result};
use crate::models::{GeoCoordinate, ProjectedPoint, UtmProjection, UtmZone};
use crate::projection::zone::zone_for;
use crate::projection::Projector;
use crate::utils::constants::WGS84_GEOGRAPHIC;
use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use tracing::trace;

/// WGS84 UTM projection backed by `proj4rs`
///
/// The geographic source frame is parsed once; each call builds only the
/// projection for the zone of its coordinate.
pub struct Proj4Projector {
    geographic: Proj,
}

impl Proj4Projector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            geographic: Self::build(WGS84_GEOGRAPHIC)?,
        })
    }

    /// PROJ definition string for a zone
    pub fn proj_string(zone: &UtmZone) -> String {
        let mut definition = format!(
            "+proj=utm +zone={} +ellps=WGS84 +units=m +no_defs",
            zone.number
        );
        if zone.hemisphere.is_south() {
            definition.push_str(" +south");
        }
        definition
    }

    fn build(definition: &str) -> Result<Proj> {
        Proj::from_proj_string(definition).map_err(|e| {
            ProcessingError::ProjectionFailure(format!("cannot build '{}': {}", definition, e))
        })
    }
}

impl Projector for Proj4Projector {
    fn project(&self, coordinate: &GeoCoordinate) -> Result<UtmProjection> {
        let zone = zone_for(coordinate.latitude, coordinate.longitude);
        let utm = Self::build(&Self::proj_string(&zone))?;

        let mut xyz = (
            coordinate.longitude.to_radians(),
            coordinate.latitude.to_radians(),
            0.0,
        );
        transform(&self.geographic, &utm, &mut xyz).map_err(|e| {
            ProcessingError::ProjectionFailure(format!(
                "({}, {}) in zone {}: {}",
                coordinate.latitude, coordinate.longitude, zone, e
            ))
        })?;

        let point = ProjectedPoint::new(xyz.0, xyz.1);
        if !point.is_finite() {
            return Err(ProcessingError::ProjectionFailure(format!(
                "({}, {}) projected to a non-finite point in zone {}",
                coordinate.latitude, coordinate.longitude, zone
            )));
        }

        trace!(
            zone = %zone,
            easting = point.easting,
            northing = point.northing,
            "projected coordinate"
        );

        Ok(UtmProjection { point, zone })
    }

    fn unproject(&self, point: &ProjectedPoint, zone: &UtmZone) -> Result<GeoCoordinate> {
        let utm = Self::build(&Self::proj_string(zone))?;

        let mut xyz = (point.easting, point.northing, 0.0);
        transform(&utm, &self.geographic, &mut xyz).map_err(|e| {
            ProcessingError::ProjectionFailure(format!(
                "({}, {}) in zone {}: {}",
                point.easting, point.northing, zone, e
            ))
        })?;

        Ok(GeoCoordinate::new(xyz.1.to_degrees(), xyz.0.to_degrees()))
    }
}
