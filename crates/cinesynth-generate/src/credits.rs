use rand::{Rng, RngCore};
use tracing::debug;

use cinesynth_core::{CREDIT_ROLES, Credit, Title};

use crate::errors::GenerationError;
use crate::ids::IdSequence;
use crate::rules::{FieldRule, FirstName, FullName, PickOne};

/// Rules for the independent [`Credit`] fields.
///
/// `Id` comes from an [`IdSequence`] and `TitleId` from the titles passed to
/// [`CreditGenerator::generate`].
#[derive(Debug, Clone)]
pub struct CreditRules {
    pub real_name: FullName,
    pub character_name: FirstName,
    pub role: PickOne,
}

impl CreditRules {
    pub fn standard() -> Result<Self, GenerationError> {
        Ok(Self {
            real_name: FullName,
            character_name: FirstName,
            role: PickOne::new(CREDIT_ROLES)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreditGenerator {
    rules: CreditRules,
}

impl CreditGenerator {
    pub fn new() -> Result<Self, GenerationError> {
        Ok(Self::with_rules(CreditRules::standard()?))
    }

    pub fn with_rules(rules: CreditRules) -> Self {
        Self { rules }
    }

    /// Generate `count` credits, each pointing at a uniformly picked title.
    ///
    /// Fails with [`GenerationError::InvalidInput`] when credits are requested
    /// but `titles` is empty.
    pub fn generate(
        &self,
        count: usize,
        titles: &[Title],
        ids: &mut IdSequence,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Credit>, GenerationError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let first_id = ids.peek();
        let mut credits = Vec::with_capacity(count);
        for _ in 0..count {
            let title = pick_title(titles, rng)?;
            credits.push(Credit {
                id: ids.next_id(),
                title_id: title.id,
                real_name: self.rules.real_name.sample(rng),
                character_name: self.rules.character_name.sample(rng),
                role: self.rules.role.sample(rng),
            });
        }
        debug!(entity = "credit", rows = credits.len(), first_id, "records generated");
        Ok(credits)
    }
}

fn pick_title<'a>(titles: &'a [Title], rng: &mut dyn RngCore) -> Result<&'a Title, GenerationError> {
    if titles.is_empty() {
        return Err(GenerationError::InvalidInput(
            "credits require at least one title to reference".to_string(),
        ));
    }
    Ok(&titles[rng.random_range(0..titles.len())])
}
