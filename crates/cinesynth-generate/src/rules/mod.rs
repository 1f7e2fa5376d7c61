//! Per-field generation strategies.
//!
//! A rule maps a random source to one typed field value. Rules validate their
//! parameters when constructed so that sampling itself cannot fail.

mod faker;
mod primitives;

pub use faker::{FirstName, FullName, Words};
pub use primitives::{IntRange, Optional, PastYear, PickMany, PickOne};

use rand::RngCore;

pub trait FieldRule {
    type Output;

    fn sample(&self, rng: &mut dyn RngCore) -> Self::Output;
}
