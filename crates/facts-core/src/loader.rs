//! The data file lives next to the executable under a fixed name. It is a
//! JSON object with a single `jokes` array:
//!
//! ```text
//! {
//!   "jokes": [
//!     { "icon": "🤖", "text": "..." }
//!   ]
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{FactError, FactResult};
use crate::fact::{Fact, FactCollection};

/// File name of the bundled data file, resolved relative to the executable.
pub const DATA_FILE_NAME: &str = "claude_code_jokes.json";

#[derive(Deserialize)]
struct FactFile {
    jokes: Vec<Fact>,
}

/// Path of the data file: the running executable's directory joined with
/// [`DATA_FILE_NAME`].
pub fn default_path() -> FactResult<PathBuf> {
    let exe = std::env::current_exe().map_err(FactError::ExecutablePath)?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(DATA_FILE_NAME))
}

/// Load the fact collection from [`default_path`].
pub fn load() -> FactResult<FactCollection> {
    load_from(&default_path()?)
}

/// Load the fact collection from an explicit path.
pub fn load_from(path: &Path) -> FactResult<FactCollection> {
    debug!("loading facts from {}", path.display());

    let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FactError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => FactError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let facts = parse(&source, path)?;
    debug!("loaded {} facts", facts.len());
    Ok(facts)
}

/// Parse a data document. `path` is only used in error messages.
pub fn parse(source: &str, path: &Path) -> FactResult<FactCollection> {
    let file: FactFile = serde_json::from_str(source).map_err(|e| FactError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    FactCollection::new(file.jokes)
}
