//! A single named table of entries.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;

use crate::error::{TableError, TableResult};

/// A named list of entries to draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    entries: Vec<String>,
}

impl Table {
    /// Build a table from entries. Entries are trimmed and blank ones
    /// dropped.
    pub fn new<I, S>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Parse a table from line-delimited text.
    pub fn parse(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.lines())
    }

    /// Table name (its category).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick one entry uniformly at random.
    pub fn pick(&self, rng: &mut StdRng) -> TableResult<&str> {
        if self.entries.is_empty() {
            return Err(self.insufficient(1));
        }
        Ok(&self.entries[rng.random_range(0..self.entries.len())])
    }

    /// Draw `count` entries.
    ///
    /// A count of 1 returns a single entry. Any other count draws that many
    /// distinct entries, in random order, joined by single spaces.
    pub fn sample(&self, count: usize, rng: &mut StdRng) -> TableResult<String> {
        if count == 1 {
            return self.pick(rng).map(str::to_string);
        }
        if count > self.entries.len() {
            return Err(self.insufficient(count));
        }
        let picked: Vec<&str> = index::sample(rng, self.entries.len(), count)
            .into_iter()
            .map(|i| self.entries[i].as_str())
            .collect();
        Ok(picked.join(" "))
    }

    fn insufficient(&self, requested: usize) -> TableError {
        TableError::InsufficientEntries {
            category: self.name.clone(),
            requested,
            available: self.entries.len(),
        }
    }
}
