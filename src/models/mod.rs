pub mod coordinate;
pub mod record;
pub mod utm;

pub use coordinate::{GeoCoordinate, LatitudeCoverage};
pub use record::{Header, Record};
pub use utm::{Hemisphere, ProjectedPoint, UtmProjection, UtmZone};
