use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cinesynth_core::Record;
use cinesynth_generate::errors::GenerationError;
use cinesynth_generate::{
    CREDITS_FILE, GenerateOptions, GenerationEngine, REPORT_FILE, RecordSink, TITLES_FILE,
};

fn options(out_dir: PathBuf, title_count: usize, credit_count: usize) -> GenerateOptions {
    GenerateOptions {
        title_count,
        credit_count,
        out_dir,
        write_report: false,
    }
}

fn column(path: &Path, name: &str) -> Vec<String> {
    let mut reader = csv::Reader::from_path(path).expect("open csv");
    let headers = reader.headers().expect("headers").clone();
    let idx = headers
        .iter()
        .position(|header| header == name)
        .unwrap_or_else(|| panic!("missing column {name}"));
    reader
        .records()
        .map(|row| row.expect("parse row")[idx].to_string())
        .collect()
}

#[test]
fn credits_reference_title_ids_in_written_files() {
    let out_dir = temp_out_dir("scenario");
    let engine = GenerationEngine::new(options(out_dir.clone(), 3, 5)).expect("engine");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = engine.run_with_rng(&mut rng).expect("run generation");

    let credits_csv = fs::read_to_string(out_dir.join(CREDITS_FILE)).expect("read credits.csv");
    assert_eq!(credits_csv.lines().count(), 6);

    let title_ids: HashSet<String> = column(&out_dir.join(TITLES_FILE), "Id")
        .into_iter()
        .collect();
    assert_eq!(title_ids.len(), 3);
    for title_id in column(&out_dir.join(CREDITS_FILE), "TitleId") {
        assert!(title_ids.contains(&title_id), "dangling TitleId {title_id}");
    }

    assert_eq!(result.report.titles_generated, 3);
    assert_eq!(result.report.credits_generated, 5);
    assert_eq!(result.report.files.len(), 2);
    assert!(!out_dir.join(REPORT_FILE).exists());
}

#[test]
fn zero_titles_write_header_only() {
    let out_dir = temp_out_dir("zero");
    let engine = GenerationEngine::new(options(out_dir.clone(), 0, 0)).expect("engine");
    engine.run().expect("run generation");

    let titles_csv = fs::read_to_string(out_dir.join(TITLES_FILE)).expect("read titles.csv");
    assert_eq!(
        titles_csv,
        "Id,Name,Description,ReleaseYear,AgeCertification,Runtime,Genres,ProductionCountry,Seasons\n"
    );
}

#[test]
fn credits_without_titles_fail_before_writing() {
    let out_dir = temp_out_dir("no_titles");
    let engine = GenerationEngine::new(options(out_dir.clone(), 0, 4)).expect("engine");
    let result = engine.run();
    assert!(matches!(result, Err(GenerationError::InvalidInput(_))));
    assert!(!out_dir.exists(), "rejected run must not create {}", out_dir.display());
}

#[test]
fn default_counts_round_trip() {
    let out_dir = temp_out_dir("defaults");
    let mut opts = GenerateOptions::default();
    opts.out_dir = out_dir.clone();
    opts.write_report = true;

    let engine = GenerationEngine::new(opts).expect("engine");
    let result = engine.run().expect("run generation");

    let titles = column(&out_dir.join(TITLES_FILE), "Id");
    let credits = column(&out_dir.join(CREDITS_FILE), "Id");
    assert_eq!(titles.len(), 100);
    assert_eq!(credits.len(), 300);

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(out_dir.join(REPORT_FILE)).expect("read report"),
    )
    .expect("parse report");
    assert_eq!(report["titles_generated"], 100);
    assert_eq!(report["credits_generated"], 300);
    assert_eq!(report["run_id"], result.report.run_id.as_str());

    let titles_file = result.report.file("title").expect("title file report");
    assert_eq!(titles_file.rows, 100);
    assert_eq!(
        titles_file.bytes_written,
        fs::metadata(out_dir.join(TITLES_FILE)).expect("metadata").len()
    );
}

#[test]
fn uncreatable_output_dir_aborts() {
    let base = temp_out_dir("blocked_dir");
    fs::create_dir_all(&base).expect("create base");
    let blocker = base.join("Results");
    fs::write(&blocker, "not a directory").expect("create blocker");

    let engine = GenerationEngine::new(options(blocker, 2, 2)).expect("engine");
    assert!(matches!(engine.run(), Err(GenerationError::Io(_))));
}

/// Sink that refuses every write, recording the attempted paths.
#[derive(Default)]
struct RejectingSink {
    attempts: std::cell::RefCell<Vec<PathBuf>>,
}

impl RecordSink for &RejectingSink {
    fn write<R: Record>(&self, _records: &[R], path: &Path) -> Result<u64, GenerationError> {
        self.attempts.borrow_mut().push(path.to_path_buf());
        Err(GenerationError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only destination",
        )))
    }
}

#[test]
fn both_writes_are_attempted_and_failures_collected() {
    let out_dir = temp_out_dir("rejecting");
    let sink = RejectingSink::default();
    let engine =
        GenerationEngine::with_sink(options(out_dir.clone(), 2, 3), &sink).expect("engine");

    let err = engine.run().expect_err("writes must fail");
    match &err {
        GenerationError::Output(failures) => {
            assert_eq!(failures.len(), 2);
            assert_eq!(failures[0].entity, "title");
            assert_eq!(failures[1].entity, "credit");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains(TITLES_FILE));
    assert!(err.to_string().contains(CREDITS_FILE));
    assert_eq!(sink.attempts.borrow().len(), 2);
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "cinesynth_engine_{label}_{}",
        uuid::Uuid::new_v4()
    ));
    dir.push("Results");
    dir
}
