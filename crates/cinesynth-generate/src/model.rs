use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Number of titles to generate.
    pub title_count: usize,
    /// Number of credits to generate.
    pub credit_count: usize,
    /// Directory where the CSV files are written.
    pub out_dir: PathBuf,
    /// Also write `generation_report.json` next to the CSV files.
    pub write_report: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            title_count: 100,
            credit_count: 300,
            out_dir: PathBuf::from("Results"),
            write_report: false,
        }
    }
}

/// Summary of one written file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub entity: String,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes_written: u64,
}

/// A file that could not be written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputFailure {
    pub entity: String,
    pub path: PathBuf,
    pub message: String,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub titles_generated: u64,
    pub credits_generated: u64,
    pub files: Vec<FileReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            titles_generated: 0,
            credits_generated: 0,
            files: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_file(&mut self, file: FileReport) {
        self.bytes_written = self.bytes_written.saturating_add(file.bytes_written);
        self.files.push(file);
    }

    pub fn file(&self, entity: &str) -> Option<&FileReport> {
        self.files.iter().find(|file| file.entity == entity)
    }
}
