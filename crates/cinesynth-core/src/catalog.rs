//! Fixed value sets that generated fields are drawn from.

pub const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "Horror",
    "Sci-Fi",
];

/// Rating strings used across national and TV rating boards.
pub const AGE_CERTIFICATIONS: &[&str] = &[
    "G", "PG", "PG-13", "R", "NC-17", "U", "U/A", "A", "S", "AL", "6", "9", "12", "12A", "15",
    "18", "18R", "R18", "R21", "M", "MA15+", "R16", "R18+", "X18", "T", "E", "E10+", "EC", "C",
    "CA", "GP", "M/PG", "TV-Y", "TV-Y7", "TV-G", "TV-PG", "TV-14", "TV-MA",
];

/// ISO 3166-1 alpha-3 codes.
pub const PRODUCTION_COUNTRIES: &[&str] = &["USA", "GBR", "CAN", "DEU", "FRA", "JPN", "IND", "UKR"];

pub const CREDIT_ROLES: &[&str] = &[
    "Director",
    "Producer",
    "Screenwriter",
    "Actor",
    "Actress",
    "Cinematographer",
    "Film Editor",
    "Production Designer",
    "Costume Designer",
    "Music Composer",
];
