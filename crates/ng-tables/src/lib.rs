//! Line-based random tables for NPC generation.
//!
//! A table is a plain list of strings, one per line. Tables are grouped in
//! a [`TableSet`] by category name; the default set is compiled into the
//! crate and individual tables can be overridden from a directory of
//! `*.txt` files.

pub mod builtin;
pub mod error;
pub mod set;
pub mod table;

pub use error::{TableError, TableResult};
pub use set::{TableSampler, TableSet};
pub use table::Table;
