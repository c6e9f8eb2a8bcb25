use crate::error::{ProcessingError, Result};

/// Convert sexagesimal `DD:MM:SS` text to decimal degrees
///
/// # Examples
/// ```
/// use utm_reproject::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal("40:42:46").unwrap();
/// assert!((decimal - 40.712778).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(dms: &str) -> Result<f64> {
    let dms = dms.trim();
    let parts: Vec<&str> = dms.split(':').map(str::trim).collect();

    let [degrees, minutes, seconds] = parts.as_slice() else {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "expected 'DD:MM:SS', got '{}'",
            dms
        )));
    };

    let parse_part = |name: &str, text: &str| {
        text.parse::<f64>().map_err(|_| {
            ProcessingError::InvalidCoordinate(format!("invalid {} value '{}'", name, text))
        })
    };

    let degrees = parse_part("degrees", degrees)?;
    let minutes = parse_part("minutes", minutes)?;
    let seconds = parse_part("seconds", seconds)?;

    if !(0.0..60.0).contains(&minutes) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "minutes must be in [0, 60), got {}",
            minutes
        )));
    }

    if !(0.0..60.0).contains(&seconds) {
        return Err(ProcessingError::InvalidCoordinate(format!(
            "seconds must be in [0, 60), got {}",
            seconds
        )));
    }

    // "-0:30:00" has no negative degrees, so read the sign from the text
    let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
    Ok(if dms.starts_with('-') {
        -magnitude
    } else {
        magnitude
    })
}

/// Render decimal degrees as `D:MM:SS.ss`
pub fn decimal_to_dms(decimal: f64) -> String {
    let sign = if decimal < 0.0 { "-" } else { "" };
    let total_seconds = (decimal.abs() * 3600.0 * 100.0).round() / 100.0;

    let degrees = (total_seconds / 3600.0).floor();
    let minutes = ((total_seconds - degrees * 3600.0) / 60.0).floor();
    let seconds = total_seconds - degrees * 3600.0 - minutes * 60.0;

    format!("{}{}:{:02}:{:05.2}", sign, degrees, minutes, seconds)
}

/// Parse a coordinate field given in decimal degrees or `DD:MM:SS`
pub fn parse_coordinate(text: &str) -> Result<f64> {
    let trimmed = text.trim();

    if trimmed.contains(':') {
        dms_to_decimal(trimmed)
    } else {
        trimmed.parse::<f64>().map_err(|_| {
            ProcessingError::InvalidCoordinate(format!("'{}' is not a number", text))
        })
    }
}
