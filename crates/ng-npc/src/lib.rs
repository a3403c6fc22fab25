//! NPC assembly: descriptive fields from random tables, stats from the
//! stat engine.

pub mod character;
pub mod config;
pub mod error;
pub mod generator;

pub use character::Character;
pub use config::GeneratorConfig;
pub use error::{NpcError, NpcResult};
pub use generator::NpcGenerator;
