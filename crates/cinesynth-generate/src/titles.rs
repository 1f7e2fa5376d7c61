use rand::RngCore;
use tracing::debug;

use cinesynth_core::{AGE_CERTIFICATIONS, GENRES, PRODUCTION_COUNTRIES, Title};

use crate::errors::GenerationError;
use crate::ids::IdSequence;
use crate::rules::{FieldRule, IntRange, Optional, PastYear, PickMany, PickOne, Words};

/// One rule per generated [`Title`] field; `Id` comes from an [`IdSequence`].
#[derive(Debug, Clone)]
pub struct TitleRules {
    pub name: Words,
    pub description: Words,
    pub release_year: PastYear,
    pub age_certification: PickOne,
    pub runtime: IntRange,
    pub genres: PickMany,
    pub production_country: PickOne,
    pub seasons: Optional<IntRange>,
}

impl TitleRules {
    pub fn standard() -> Result<Self, GenerationError> {
        Ok(Self {
            name: Words::new(1, 3)?,
            description: Words::new(10, 20)?,
            release_year: PastYear::new(20),
            age_certification: PickOne::new(AGE_CERTIFICATIONS)?,
            runtime: IntRange::new(60, 180)?,
            genres: PickMany::new(GENRES, 1, 3)?,
            production_country: PickOne::new(PRODUCTION_COUNTRIES)?,
            seasons: Optional::new(IntRange::new(1, 10)?, 0.5)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TitleGenerator {
    rules: TitleRules,
}

impl TitleGenerator {
    pub fn new() -> Result<Self, GenerationError> {
        Ok(Self::with_rules(TitleRules::standard()?))
    }

    pub fn with_rules(rules: TitleRules) -> Self {
        Self { rules }
    }

    /// Generate `count` titles, taking ids from `ids` in order.
    pub fn generate(
        &self,
        count: usize,
        ids: &mut IdSequence,
        rng: &mut dyn RngCore,
    ) -> Vec<Title> {
        let first_id = ids.peek();
        let titles: Vec<Title> = (0..count).map(|_| self.generate_one(ids, rng)).collect();
        debug!(entity = "title", rows = titles.len(), first_id, "records generated");
        titles
    }

    fn generate_one(&self, ids: &mut IdSequence, rng: &mut dyn RngCore) -> Title {
        let rules = &self.rules;
        Title {
            id: ids.next_id(),
            name: rules.name.sample(rng),
            description: rules.description.sample(rng),
            release_year: rules.release_year.sample(rng),
            age_certification: rules.age_certification.sample(rng),
            runtime: rules.runtime.sample(rng),
            genres: rules.genres.sample(rng),
            production_country: rules.production_country.sample(rng),
            seasons: rules.seasons.sample(rng),
        }
    }
}
