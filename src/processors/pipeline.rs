use crate::error::Result;
use crate::models::LatitudeCoverage;
use crate::processors::ConversionReport;
use crate::projection::{Proj4Projector, Projector, Transformer};
use crate::readers::{CsvInput, CsvRecordReader};
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvRecordWriter;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub coverage: LatitudeCoverage,
}

/// Read all rows, project each one, then write the extended file
pub struct Pipeline<P = Proj4Projector> {
    transformer: Transformer<P>,
    reader: CsvRecordReader,
    writer: CsvRecordWriter,
}

impl Pipeline<Proj4Projector> {
    pub fn new() -> Result<Self> {
        Self::from_options(PipelineOptions::default())
    }

    pub fn from_options(options: PipelineOptions) -> Result<Self> {
        Ok(Self::with_transformer(
            Transformer::new()?.with_coverage(options.coverage),
        ))
    }
}

impl<P: Projector> Pipeline<P> {
    pub fn with_transformer(transformer: Transformer<P>) -> Self {
        Self {
            transformer,
            reader: CsvRecordReader::new(),
            writer: CsvRecordWriter::new(),
        }
    }

    /// Convert `input` into `output`
    ///
    /// Every row is projected before the output is touched, so a failing run
    /// leaves no output file behind (and an existing one unchanged).
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<ConversionReport> {
        info!(
            "Reading {} ({:?} latitude coverage)",
            input.display(),
            self.transformer.coverage()
        );
        let csv_input = self.reader.read_file(input)?;
        let header = csv_input.header.clone();

        let (rows, report) = self.convert(csv_input, progress)?;

        info!("Writing {} rows to {}", rows.len(), output.display());
        self.writer.write_file(output, &header, &rows)?;

        Ok(report)
    }

    /// Project every row of `input` without writing anything
    pub fn dry_run(
        &self,
        input: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<ConversionReport> {
        info!("Checking {}", input.display());
        let csv_input = self.reader.read_file(input)?;
        let (_rows, report) = self.convert(csv_input, progress)?;
        Ok(report)
    }

    /// Extend each record with its easting and northing, stopping at the
    /// first row that fails
    pub fn convert(
        &self,
        input: CsvInput,
        progress: Option<&ProgressReporter>,
    ) -> Result<(Vec<Vec<String>>, ConversionReport)> {
        let mut report = ConversionReport::new(input.header.columns.len());
        let mut rows = Vec::with_capacity(input.records.len());

        for record in input.records {
            let row = record.row;
            let projection = record
                .lat_lon()
                .and_then(|(lat, lon)| self.transformer.transform(lat, lon))
                .map_err(|e| {
                    if let Some(p) = progress {
                        p.abandon();
                    }
                    e.at_row(row)
                })?;

            debug!(row, zone = %projection.zone, "row projected");
            report.record(&projection.zone);
            rows.push(record.extended(&projection.point));

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        if let Some(p) = progress {
            p.finish_with_message(&format!("Projected {} rows", report.total_rows));
        }

        Ok((rows, report))
    }
}
