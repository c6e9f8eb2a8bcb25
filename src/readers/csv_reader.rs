use crate::error::{ProcessingError, Result};
use crate::models::{Header, Record};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Header plus every data row of an input file, in file order
#[derive(Debug, Clone)]
pub struct CsvInput {
    pub header: Header,
    pub records: Vec<Record>,
}

pub struct CsvRecordReader;

impl CsvRecordReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the whole input file into memory
    pub fn read_file(&self, path: &Path) -> Result<CsvInput> {
        let missing = |source: io::Error| ProcessingError::MissingInputFile {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(missing)?;
        // Opening a directory succeeds on Unix, reading it does not
        if !file.metadata().map_err(missing)?.is_file() {
            return Err(missing(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let input = self.read_from(file)?;
        debug!(
            "Read {} columns and {} rows from {}",
            input.header.columns.len(),
            input.records.len(),
            path.display()
        );
        Ok(input)
    }

    /// Read header and rows from any byte source
    pub fn read_from<R: Read>(&self, source: R) -> Result<CsvInput> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);

        let mut rows = reader.records();

        let header = match rows.next() {
            Some(first) => Header::new(first?.iter().map(str::to_string).collect()),
            None => return Err(ProcessingError::MissingHeader),
        };

        let mut records = Vec::new();
        for (index, row) in rows.enumerate() {
            let row = row?;
            records.push(Record::new(
                index + 1,
                row.iter().map(str::to_string).collect(),
            ));
        }

        Ok(CsvInput { header, records })
    }
}

impl Default for CsvRecordReader {
    fn default() -> Self {
        Self::new()
    }
}
