use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::RngCore;
use tracing::{info, warn};

use cinesynth_core::Record;

use crate::credits::CreditGenerator;
use crate::errors::GenerationError;
use crate::ids::IdSequence;
use crate::model::{FileReport, GenerateOptions, GenerationReport, OutputFailure};
use crate::output::{CsvSink, RecordSink};
use crate::titles::TitleGenerator;

pub const TITLES_FILE: &str = "titles.csv";
pub const CREDITS_FILE: &str = "credits.csv";
pub const REPORT_FILE: &str = "generation_report.json";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Generates titles then credits and hands both to a sink.
#[derive(Debug, Clone)]
pub struct GenerationEngine<S = CsvSink> {
    options: GenerateOptions,
    titles: TitleGenerator,
    credits: CreditGenerator,
    sink: S,
}

impl GenerationEngine<CsvSink> {
    pub fn new(options: GenerateOptions) -> Result<Self, GenerationError> {
        Self::with_sink(options, CsvSink::new())
    }
}

impl<S: RecordSink> GenerationEngine<S> {
    pub fn with_sink(options: GenerateOptions, sink: S) -> Result<Self, GenerationError> {
        Ok(Self {
            options,
            titles: TitleGenerator::new()?,
            credits: CreditGenerator::new()?,
            sink,
        })
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let mut rng = rand::rng();
        self.run_with_rng(&mut rng)
    }

    /// Run once with the given random source.
    ///
    /// Both files are attempted even if the first write fails; every failure
    /// is reported in [`GenerationError::Output`].
    pub fn run_with_rng(&self, rng: &mut dyn RngCore) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let out_dir = self.options.out_dir.clone();

        info!(
            run_id = %run_id,
            titles = self.options.title_count,
            credits = self.options.credit_count,
            out_dir = %out_dir.display(),
            "generation started"
        );

        let mut title_ids = IdSequence::new();
        let mut credit_ids = IdSequence::new();
        let titles = self
            .titles
            .generate(self.options.title_count, &mut title_ids, rng);
        let credits =
            self.credits
                .generate(self.options.credit_count, &titles, &mut credit_ids, rng)?;

        std::fs::create_dir_all(&out_dir)?;

        let mut report = GenerationReport::new(run_id.clone());
        report.titles_generated = titles.len() as u64;
        report.credits_generated = credits.len() as u64;

        let mut failures = Vec::new();
        self.write_output(
            "title",
            &titles,
            &out_dir.join(TITLES_FILE),
            &mut report,
            &mut failures,
        );
        self.write_output(
            "credit",
            &credits,
            &out_dir.join(CREDITS_FILE),
            &mut report,
            &mut failures,
        );

        report.duration_ms = start.elapsed().as_millis() as u64;

        if !failures.is_empty() {
            warn!(run_id = %run_id, failed = failures.len(), "generation failed");
            return Err(GenerationError::Output(failures));
        }

        if self.options.write_report {
            let report_path = out_dir.join(REPORT_FILE);
            std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;
            info!(path = %report_path.display(), "report written");
        }

        info!(
            run_id = %run_id,
            files = report.files.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );
        Ok(GenerationResult { out_dir, report })
    }

    fn write_output<R: Record>(
        &self,
        entity: &str,
        records: &[R],
        path: &Path,
        report: &mut GenerationReport,
        failures: &mut Vec<OutputFailure>,
    ) {
        match self.sink.write(records, path) {
            Ok(bytes_written) => {
                info!(
                    entity,
                    rows = records.len(),
                    bytes_written,
                    path = %path.display(),
                    "file written"
                );
                report.record_file(FileReport {
                    entity: entity.to_string(),
                    path: path.to_path_buf(),
                    rows: records.len() as u64,
                    bytes_written,
                });
            }
            Err(err) => {
                warn!(entity, path = %path.display(), error = %err, "file write failed");
                failures.push(OutputFailure {
                    entity: entity.to_string(),
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
            }
        }
    }
}
