use fake::Fake;
use fake::faker::lorem::en::Words as LoremWords;
use fake::faker::name::en::{FirstName as FakeFirstName, LastName as FakeLastName};
use rand::RngCore;

use crate::errors::GenerationError;
use crate::rules::FieldRule;

/// Between `min` and `max` dictionary words joined by single spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Words {
    min: usize,
    max: usize,
}

impl Words {
    pub fn new(min: usize, max: usize) -> Result<Self, GenerationError> {
        if min == 0 {
            return Err(GenerationError::InvalidRule(
                "rule.text.words min must be > 0".to_string(),
            ));
        }
        if min > max {
            return Err(GenerationError::InvalidRule(format!(
                "rule.text.words min ({min}) must be <= max ({max})"
            )));
        }
        Ok(Self { min, max })
    }
}

impl FieldRule for Words {
    type Output = String;

    fn sample(&self, rng: &mut dyn RngCore) -> String {
        let words: Vec<String> = LoremWords(self.min..self.max + 1).fake_with_rng(rng);
        words.join(" ")
    }
}

/// First and last name separated by a space.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullName;

impl FieldRule for FullName {
    type Output = String;

    fn sample(&self, rng: &mut dyn RngCore) -> String {
        let first: String = FakeFirstName().fake_with_rng(rng);
        let last: String = FakeLastName().fake_with_rng(rng);
        format!("{first} {last}")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FirstName;

impl FieldRule for FirstName {
    type Output = String;

    fn sample(&self, rng: &mut dyn RngCore) -> String {
        FakeFirstName().fake_with_rng(rng)
    }
}
