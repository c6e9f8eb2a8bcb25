//! Bulk conversion of latitude/longitude CSV records into WGS84 UTM
//! easting/northing.
//!
//! The [`processors::Pipeline`] reads every row, projects it through a
//! [`projection::Transformer`] and writes the original fields followed by
//! `UTM X` and `UTM Y`.

pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod projection;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{ProcessingError, Result};
pub use projection::lat_lon_to_utm;
