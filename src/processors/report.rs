use crate::models::UtmZone;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub total_rows: usize,
    pub input_columns: usize,
    /// Rows per grid zone designator, e.g. `18T`
    pub zone_counts: BTreeMap<String, usize>,
}

impl ConversionReport {
    pub fn new(input_columns: usize) -> Self {
        Self {
            input_columns,
            ..Self::default()
        }
    }

    pub fn record(&mut self, zone: &UtmZone) {
        self.total_rows += 1;
        *self.zone_counts.entry(zone.designator()).or_default() += 1;
    }

    pub fn distinct_zones(&self) -> usize {
        self.zone_counts.len()
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== UTM Conversion Report ===\n");
        summary.push_str(&format!("Rows Converted: {}\n", self.total_rows));
        summary.push_str(&format!(
            "Columns: {} in, {} out\n",
            self.input_columns,
            self.input_columns + 2
        ));
        summary.push_str(&format!("Distinct Zones: {}\n", self.distinct_zones()));

        for (zone, count) in &self.zone_counts {
            summary.push_str(&format!(
                "  {:>4}: {} ({:.1}%)\n",
                zone,
                count,
                100.0 * *count as f64 / self.total_rows as f64
            ));
        }

        summary
    }
}
