//! Rule-based record generation for cinesynth.
//!
//! Titles are generated from independent field rules, credits reference the
//! already generated titles, and both are written as CSV through a sink.

pub mod credits;
pub mod engine;
pub mod errors;
pub mod ids;
pub mod model;
pub mod output;
pub mod rules;
pub mod titles;

pub use credits::{CreditGenerator, CreditRules};
pub use engine::{CREDITS_FILE, GenerationEngine, GenerationResult, REPORT_FILE, TITLES_FILE};
pub use errors::GenerationError;
pub use ids::IdSequence;
pub use model::{FileReport, GenerateOptions, GenerationReport, OutputFailure};
pub use output::{CsvSink, RecordSink};
pub use titles::{TitleGenerator, TitleRules};
