/// File names
pub const DEFAULT_INPUT_FILE: &str = "input.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";

/// Labels appended to the input header
pub const EASTING_LABEL: &str = "UTM X";
pub const NORTHING_LABEL: &str = "UTM Y";

/// Column positions of the source coordinates
pub const LATITUDE_COLUMN: usize = 0;
pub const LONGITUDE_COLUMN: usize = 1;

/// Geographic bounds
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;

/// Latitude range covered by the UTM grid
pub const UTM_MIN_LATITUDE: f64 = -80.0;
pub const UTM_MAX_LATITUDE: f64 = 84.0;

/// UTM zone layout
pub const UTM_ZONE_COUNT: u8 = 60;
pub const UTM_ZONE_WIDTH_DEG: f64 = 6.0;
pub const UTM_BAND_LETTERS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";

/// Reference frames
pub const WGS84_GEOGRAPHIC: &str = "+proj=longlat +ellps=WGS84 +no_defs";
