//! Error types for the stat engine.

/// Errors that can occur while computing a stat block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A race or job name is not present in its bonus table.
    #[error("unknown {table}: {name}")]
    UnknownCategory {
        /// Which table was consulted ("race" or "job").
        table: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    /// The requested level is below 1.
    #[error("invalid level {0}: level must be at least 1")]
    InvalidLevel(i32),

    /// A stat key does not name one of the ten stats.
    #[error("unknown stat: {0}")]
    UnknownStat(String),
}

/// Convenience result type for stat engine operations.
pub type MechResult<T> = Result<T, MechError>;
