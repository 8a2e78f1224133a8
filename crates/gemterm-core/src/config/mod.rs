//! Layered configuration.
//!
//! - `key`: key normalization and JSON flattening into `Parent:Child` keys
//! - `source`: the `ConfigSource` trait every layer implements
//! - `layered`: `LayeredConfig`, an ordered stack of sources (last wins)
//! - `memory`: in-memory source

pub mod key;
pub mod layered;
pub mod memory;
pub mod source;

pub use layered::LayeredConfig;
pub use memory::MemorySource;
pub use source::{ConfigSource, DynConfigSource};
