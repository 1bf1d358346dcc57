//! Story mode catalog.

/// Suggested story modes presented to the user.
///
/// The mode field is free-form; these are suggestions only, and custom
/// modes are allowed.
pub const SUGGESTED_MODES: &[&str] = &[
    "horror",
    "fantasy",
    "sci-fi",
    "comedy",
    "adventure",
    "romance",
    "mystery",
    "drama",
    "thriller",
    "western",
    "historical",
    "biographical",
];
