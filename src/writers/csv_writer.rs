use crate::error::{ProcessingError, Result};
use crate::models::Header;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

pub struct CsvRecordWriter;

impl CsvRecordWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the extended header and rows, replacing `path` only once every
    /// row is on disk
    pub fn write_file(&self, path: &Path, header: &Header, rows: &[Vec<String>]) -> Result<()> {
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(directory)?;
        self.write_to(temp.as_file_mut(), header, rows)?;
        temp.as_file().sync_all()?;
        temp.persist(path)
            .map_err(|e| ProcessingError::Io(e.error))?;

        debug!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    /// Write the extended header and rows to any byte sink
    pub fn write_to<W: Write>(&self, sink: W, header: &Header, rows: &[Vec<String>]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(sink);

        writer.write_record(header.extended())?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl Default for CsvRecordWriter {
    fn default() -> Self {
        Self::new()
    }
}
