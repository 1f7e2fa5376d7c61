use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cinesynth_core::Record;

use crate::errors::GenerationError;
use crate::output::RecordSink;

/// Writes records as RFC 4180 CSV with a header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSink;

impl CsvSink {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSink for CsvSink {
    fn write<R: Record>(&self, records: &[R], path: &Path) -> Result<u64, GenerationError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(write_records_csv(path, records)?)
    }
}

/// Write records to `path`, truncating any existing file.
///
/// Columns follow [`Record::COLUMNS`]; returns the byte count of the file.
pub fn write_records_csv<R: Record>(path: &Path, records: &[R]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(R::COLUMNS)?;

    for record in records {
        let values = record.values();
        let cells: Vec<Cow<'_, str>> = values.iter().map(|value| value.to_csv()).collect();
        writer.write_record(cells.iter().map(|cell| cell.as_bytes()))?;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
