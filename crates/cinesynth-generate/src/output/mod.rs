pub mod csv;

use std::path::Path;

use cinesynth_core::Record;

use crate::errors::GenerationError;

pub use self::csv::CsvSink;

/// Destination for a homogeneous list of records.
pub trait RecordSink {
    /// Persist `records` at `path`, returning the number of bytes written.
    fn write<R: Record>(&self, records: &[R], path: &Path) -> Result<u64, GenerationError>;
}
