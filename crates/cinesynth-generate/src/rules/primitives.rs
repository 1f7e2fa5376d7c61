use chrono::{Datelike, Local, NaiveDate};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::errors::GenerationError;
use crate::rules::FieldRule;

const DAYS_PER_YEAR: u64 = 365;

/// Uniform integer in an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    min: u32,
    max: u32,
}

impl IntRange {
    pub fn new(min: u32, max: u32) -> Result<Self, GenerationError> {
        if min > max {
            return Err(GenerationError::InvalidRule(format!(
                "rule.int.range min ({min}) must be <= max ({max})"
            )));
        }
        Ok(Self { min, max })
    }
}

impl FieldRule for IntRange {
    type Output = u32;

    fn sample(&self, rng: &mut dyn RngCore) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

/// Uniform pick of one value from a fixed set.
#[derive(Debug, Clone, Copy)]
pub struct PickOne {
    values: &'static [&'static str],
}

impl PickOne {
    pub fn new(values: &'static [&'static str]) -> Result<Self, GenerationError> {
        if values.is_empty() {
            return Err(GenerationError::InvalidRule(
                "rule.pick.one requires at least one value".to_string(),
            ));
        }
        Ok(Self { values })
    }
}

impl FieldRule for PickOne {
    type Output = String;

    fn sample(&self, rng: &mut dyn RngCore) -> String {
        self.values[rng.random_range(0..self.values.len())].to_string()
    }
}

/// Picks between `min` and `max` distinct values from a fixed set.
#[derive(Debug, Clone, Copy)]
pub struct PickMany {
    values: &'static [&'static str],
    min: usize,
    max: usize,
}

impl PickMany {
    pub fn new(
        values: &'static [&'static str],
        min: usize,
        max: usize,
    ) -> Result<Self, GenerationError> {
        if min > max {
            return Err(GenerationError::InvalidRule(format!(
                "rule.pick.many min ({min}) must be <= max ({max})"
            )));
        }
        if max > values.len() {
            return Err(GenerationError::InvalidRule(format!(
                "rule.pick.many max ({max}) exceeds the {} available values",
                values.len()
            )));
        }
        Ok(Self { values, min, max })
    }
}

impl FieldRule for PickMany {
    type Output = Vec<String>;

    fn sample(&self, rng: &mut dyn RngCore) -> Vec<String> {
        let count = rng.random_range(self.min..=self.max);
        self.values
            .choose_multiple(rng, count)
            .map(|value| value.to_string())
            .collect()
    }
}

/// Year of a uniformly sampled date within the last `years` years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastYear {
    years: u32,
    anchor: NaiveDate,
}

impl PastYear {
    /// Anchored at today's local date.
    pub fn new(years: u32) -> Self {
        Self::with_anchor(years, Local::now().date_naive())
    }

    pub fn with_anchor(years: u32, anchor: NaiveDate) -> Self {
        Self { years, anchor }
    }
}

impl FieldRule for PastYear {
    type Output = i32;

    fn sample(&self, rng: &mut dyn RngCore) -> i32 {
        let span = u64::from(self.years) * DAYS_PER_YEAR;
        let back = rng.random_range(0..=span);
        self.anchor
            .checked_sub_days(chrono::Days::new(back))
            .unwrap_or(NaiveDate::MIN)
            .year()
    }
}

/// Wraps a rule so that it yields `None` with the given probability.
#[derive(Debug, Clone, Copy)]
pub struct Optional<R> {
    inner: R,
    none_probability: f64,
}

impl<R: FieldRule> Optional<R> {
    pub fn new(inner: R, none_probability: f64) -> Result<Self, GenerationError> {
        if !(0.0..=1.0).contains(&none_probability) {
            return Err(GenerationError::InvalidRule(format!(
                "rule.optional probability must be within [0, 1], got {none_probability}"
            )));
        }
        Ok(Self {
            inner,
            none_probability,
        })
    }
}

impl<R: FieldRule> FieldRule for Optional<R> {
    type Output = Option<R::Output>;

    fn sample(&self, rng: &mut dyn RngCore) -> Option<R::Output> {
        if rng.random_bool(self.none_probability) {
            None
        } else {
            Some(self.inner.sample(rng))
        }
    }
}
