use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Self::North
        } else {
            Self::South
        }
    }

    pub fn is_south(&self) -> bool {
        matches!(self, Self::South)
    }
}

/// A UTM grid zone: number 1-60, hemisphere and (inside [-80, 84]) a band letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtmZone {
    pub number: u8,
    pub hemisphere: Hemisphere,
    pub band: Option<char>,
}

impl UtmZone {
    pub fn new(number: u8, hemisphere: Hemisphere, band: Option<char>) -> Self {
        Self {
            number,
            hemisphere,
            band,
        }
    }

    /// Grid zone designator such as `18T`
    ///
    /// `N` and `S` are band letters, so outside the lettered bands the
    /// hemisphere is spelled out: `30 south`.
    pub fn designator(&self) -> String {
        match self.band {
            Some(band) => format!("{}{}", self.number, band),
            None => match self.hemisphere {
                Hemisphere::North => format!("{} north", self.number),
                Hemisphere::South => format!("{} south", self.number),
            },
        }
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.designator())
    }
}

/// Planar UTM coordinates in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
}

impl ProjectedPoint {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }

    pub fn is_finite(&self) -> bool {
        self.easting.is_finite() && self.northing.is_finite()
    }
}

/// A projected point together with the zone it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtmProjection {
    pub point: ProjectedPoint,
    pub zone: UtmZone,
}
