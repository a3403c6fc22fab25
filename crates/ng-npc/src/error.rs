//! Error types for NPC generation.

use thiserror::Error;

/// Result type for NPC generation.
pub type NpcResult<T> = Result<T, NpcError>;

/// Errors that can occur while generating an NPC.
#[derive(Debug, Error)]
pub enum NpcError {
    /// Invalid level, or a race/job missing from the bonus tables.
    #[error(transparent)]
    Mechanics(#[from] ng_mechanics::MechError),

    /// A table was missing or too small.
    #[error(transparent)]
    Tables(#[from] ng_tables::TableError),
}
