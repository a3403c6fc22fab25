//! Default tables compiled into the crate.

use crate::table::Table;

/// `(category, contents)` for every builtin table.
pub const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("genders", include_str!("../tables/genders.txt")),
    ("male", include_str!("../tables/male.txt")),
    ("female", include_str!("../tables/female.txt")),
    ("nonbinary", include_str!("../tables/nonbinary.txt")),
    ("family", include_str!("../tables/family.txt")),
    ("hair", include_str!("../tables/hair.txt")),
    ("eyes", include_str!("../tables/eyes.txt")),
    ("skin-tones", include_str!("../tables/skin-tones.txt")),
    ("quirks", include_str!("../tables/quirks.txt")),
    ("motivations", include_str!("../tables/motivations.txt")),
    ("race", include_str!("../tables/race.txt")),
    ("jobs", include_str!("../tables/jobs.txt")),
];

/// Parse every builtin table.
pub fn tables() -> impl Iterator<Item = Table> {
    BUILTIN_TABLES
        .iter()
        .map(|(name, text)| Table::parse(*name, text))
}
