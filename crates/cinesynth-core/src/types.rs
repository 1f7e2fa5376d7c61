use serde::Serialize;

use crate::record::{FieldValue, Record};

/// A generated film or series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Title {
    /// Sequential identifier, unique within a run.
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_year: i32,
    pub age_certification: String,
    /// Length in minutes.
    pub runtime: u32,
    /// Distinct genres, at least one.
    pub genres: Vec<String>,
    /// Alpha-3 country code.
    pub production_country: String,
    /// Number of seasons for series; `None` for films.
    pub seasons: Option<u32>,
}

impl Record for Title {
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "Name",
        "Description",
        "ReleaseYear",
        "AgeCertification",
        "Runtime",
        "Genres",
        "ProductionCountry",
        "Seasons",
    ];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Int(self.id),
            FieldValue::Text(&self.name),
            FieldValue::Text(&self.description),
            FieldValue::Int(i64::from(self.release_year)),
            FieldValue::Text(&self.age_certification),
            FieldValue::Int(i64::from(self.runtime)),
            FieldValue::List(&self.genres),
            FieldValue::Text(&self.production_country),
            self.seasons
                .map(|seasons| FieldValue::Int(i64::from(seasons)))
                .unwrap_or(FieldValue::Null),
        ]
    }
}

/// A person credited on a [`Title`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Credit {
    /// Sequential identifier, numbered independently from titles.
    pub id: i64,
    /// Id of the title this credit belongs to.
    pub title_id: i64,
    pub real_name: String,
    pub character_name: String,
    pub role: String,
}

impl Record for Credit {
    const COLUMNS: &'static [&'static str] =
        &["Id", "TitleId", "RealName", "CharacterName", "Role"];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Int(self.id),
            FieldValue::Int(self.title_id),
            FieldValue::Text(&self.real_name),
            FieldValue::Text(&self.character_name),
            FieldValue::Text(&self.role),
        ]
    }
}
