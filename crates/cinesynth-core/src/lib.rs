//! Core record contracts for cinesynth.
//!
//! This crate defines the generated record types, their cell model, and the
//! fixed value catalogs shared by the generator and the CLI.

pub mod catalog;
pub mod record;
pub mod types;

pub use catalog::{AGE_CERTIFICATIONS, CREDIT_ROLES, GENRES, PRODUCTION_COUNTRIES};
pub use record::{FieldValue, LIST_DELIMITER, Record};
pub use types::{Credit, Title};
