pub mod generate;
pub mod tables;

use std::path::Path;

use ng_tables::TableSet;

/// Level used when none is given or it does not parse.
const DEFAULT_LEVEL: i32 = 1;

/// Read the level argument. Missing or malformed input falls back to the
/// default instead of failing; range checks happen later.
pub fn parse_level(arg: Option<&str>) -> i32 {
    arg.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// The builtin tables, with any tables from `dir` replacing them by name.
fn load_tables(dir: Option<&Path>) -> Result<TableSet, String> {
    let builtin = TableSet::builtin();
    match dir {
        Some(dir) => {
            let custom = TableSet::from_dir(dir).map_err(|e| e.to_string())?;
            log::info!("{} table(s) loaded from {}", custom.len(), dir.display());
            Ok(builtin.merge(custom))
        }
        None => Ok(builtin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_one() {
        assert_eq!(parse_level(None), 1);
        assert_eq!(parse_level(Some("abc")), 1);
        assert_eq!(parse_level(Some("")), 1);
        assert_eq!(parse_level(Some("2.5")), 1);
    }

    #[test]
    fn level_parses_integers() {
        assert_eq!(parse_level(Some("7")), 7);
        assert_eq!(parse_level(Some(" 12 ")), 12);
        assert_eq!(parse_level(Some("-3")), -3);
        assert_eq!(parse_level(Some("0")), 0);
    }
}
