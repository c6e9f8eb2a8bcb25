use crate::error::{ProcessingError, Result};
use crate::models::ProjectedPoint;
use crate::utils::constants::{EASTING_LABEL, LATITUDE_COLUMN, LONGITUDE_COLUMN, NORTHING_LABEL};
use crate::utils::coordinates::parse_coordinate;

/// Column names from the first input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub columns: Vec<String>,
}

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Input columns followed by the two projected-coordinate labels
    pub fn extended(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.columns.len() + 2);
        columns.extend(self.columns.iter().cloned());
        columns.push(EASTING_LABEL.to_string());
        columns.push(NORTHING_LABEL.to_string());
        columns
    }
}

/// One input data row, fields kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based data row index, header excluded
    pub row: usize,
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(row: usize, fields: Vec<String>) -> Self {
        Self { row, fields }
    }

    /// Parse the leading latitude and longitude fields
    pub fn lat_lon(&self) -> Result<(f64, f64)> {
        let latitude = self.parse_field(LATITUDE_COLUMN, "latitude")?;
        let longitude = self.parse_field(LONGITUDE_COLUMN, "longitude")?;
        Ok((latitude, longitude))
    }

    fn parse_field(&self, index: usize, field: &'static str) -> Result<f64> {
        let value = self
            .fields
            .get(index)
            .ok_or_else(|| ProcessingError::MalformedRow {
                row: self.row,
                field,
                value: "<missing>".to_string(),
            })?;

        parse_coordinate(value).map_err(|_| ProcessingError::MalformedRow {
            row: self.row,
            field,
            value: value.clone(),
        })
    }

    /// Original fields followed by easting and northing
    pub fn extended(self, point: &ProjectedPoint) -> Vec<String> {
        let mut fields = self.fields;
        fields.push(point.easting.to_string());
        fields.push(point.northing.to_string());
        fields
    }
}
