//! Core types for Claude Facts: fact records, the data file loader, and the
//! terminal renderer.
//!
//! The command-line frontend loads a [`FactCollection`] once per run and
//! hands it to one of the [`render`] functions. Nothing here performs I/O
//! beyond reading the data file and writing to the supplied sink.

/// Error types used throughout the crate.
pub mod error;
/// Fact records and the non-empty fact collection.
pub mod fact;
/// Locating, reading, and parsing the bundled data file.
pub mod loader;
/// Plain-text rendering of facts, listings, and the help screen.
pub mod render;

/// Re-export error types.
pub use error::{FactError, FactResult};
/// Re-export fact types.
pub use fact::{Fact, FactCollection};
/// Re-export the loader entry points.
pub use loader::{DATA_FILE_NAME, default_path, load, load_from};
