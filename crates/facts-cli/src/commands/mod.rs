pub mod help;
pub mod list;
pub mod random;

use std::io;

use facts_core::FactCollection;

/// Load the bundled facts, turning any failure into a one-line message.
fn load_facts() -> Result<FactCollection, String> {
    facts_core::load().map_err(|e| e.to_string())
}

fn write_failed(e: io::Error) -> String {
    format!("failed to write output: {e}")
}
