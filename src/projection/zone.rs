//! UTM zone and latitude band lookup, including the Norway and Svalbard
//! exceptions to the regular 6° longitude grid.

use crate::models::{Hemisphere, UtmZone};
use crate::utils::constants::{
    UTM_BAND_LETTERS, UTM_MAX_LATITUDE, UTM_MIN_LATITUDE, UTM_ZONE_COUNT, UTM_ZONE_WIDTH_DEG,
};

/// Zone number 1-60 for a coordinate in degrees
pub fn zone_number(latitude: f64, longitude: f64) -> u8 {
    // Southwest Norway is widened into zone 32
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return 32;
    }

    // Svalbard uses the odd zones 31-37 only
    if (72.0..=84.0).contains(&latitude) && longitude >= 0.0 {
        if longitude < 9.0 {
            return 31;
        } else if longitude < 21.0 {
            return 33;
        } else if longitude < 33.0 {
            return 35;
        } else if longitude < 42.0 {
            return 37;
        }
    }

    // Longitude 180 wraps back into zone 1
    let band = ((longitude + 180.0) / UTM_ZONE_WIDTH_DEG).floor() as i64;
    (band.rem_euclid(UTM_ZONE_COUNT as i64) + 1) as u8
}

/// Latitude band letter, `None` outside [-80, 84]
pub fn band_letter(latitude: f64) -> Option<char> {
    if !(UTM_MIN_LATITUDE..=UTM_MAX_LATITUDE).contains(&latitude) {
        return None;
    }

    // Band X is stretched to 12° so 84 still lands in it
    let index = ((latitude - UTM_MIN_LATITUDE) / 8.0).floor() as usize;
    let index = index.min(UTM_BAND_LETTERS.len() - 1);
    Some(UTM_BAND_LETTERS[index] as char)
}

/// Full zone lookup for a coordinate in degrees
pub fn zone_for(latitude: f64, longitude: f64) -> UtmZone {
    UtmZone::new(
        zone_number(latitude, longitude),
        Hemisphere::from_latitude(latitude),
        band_letter(latitude),
    )
}
