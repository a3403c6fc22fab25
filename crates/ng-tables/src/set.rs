//! Named collections of tables and the sampling interface.

use std::collections::BTreeMap;
use std::path::Path;

use rand::rngs::StdRng;

use crate::builtin;
use crate::error::{TableError, TableResult};
use crate::table::Table;

/// Something that can draw random entries from named tables.
pub trait TableSampler {
    /// Draw `count` entries from the table named `category`.
    ///
    /// A count of 1 returns a single entry; larger counts return distinct
    /// entries joined by single spaces.
    fn sample(&self, category: &str, count: usize, rng: &mut StdRng) -> TableResult<String>;
}

/// Tables keyed by category name.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    tables: BTreeMap<String, Table>,
}

impl TableSet {
    /// Create an empty table set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default tables shipped with the crate.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        for table in builtin::tables() {
            set.insert(table);
        }
        set
    }

    /// Load every `*.txt` file in `dir` as a table named after the file
    /// stem.
    pub fn from_dir(dir: &Path) -> TableResult<Self> {
        let io_err = |path: &Path, source| TableError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
            let path = entry.map_err(|e| io_err(dir, e))?.path();
            if path.extension().is_some_and(|ext| ext == "txt") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut set = Self::new();
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            let table = Table::parse(name, &text);
            log::debug!(
                "loaded table '{}' ({} entries) from {}",
                table.name(),
                table.len(),
                path.display()
            );
            set.insert(table);
        }
        Ok(set)
    }

    /// Add or replace a table.
    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name().to_string(), table);
    }

    /// Replace tables in `self` with every table from `other`.
    pub fn merge(mut self, other: TableSet) -> Self {
        self.tables.extend(other.tables);
        self
    }

    /// Look up a table by category.
    pub fn get(&self, category: &str) -> TableResult<&Table> {
        self.tables
            .get(category)
            .ok_or_else(|| TableError::CategoryNotFound(category.to_string()))
    }

    /// Category names in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the set holds no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableSampler for TableSet {
    fn sample(&self, category: &str, count: usize, rng: &mut StdRng) -> TableResult<String> {
        self.get(category)?.sample(count, rng)
    }
}
