//! Places the bundled fact file next to the `claude-facts` binary.

use std::{env, fs, path::PathBuf};

use anyhow::Context;

const DATA_FILE: &str = "data/claude_code_jokes.json";

fn main() -> anyhow::Result<()> {
    println!("cargo::rerun-if-changed={DATA_FILE}");
    let out_dir: PathBuf = env::var("OUT_DIR")?.into();
    // OUT_DIR is <profile>/build/<package>-<hash>/out
    let profile_dir = out_dir
        .ancestors()
        .nth(3)
        .context("unexpected OUT_DIR layout")?;
    let target = profile_dir.join("claude_code_jokes.json");
    fs::copy(DATA_FILE, &target)
        .with_context(|| format!("failed to copy {DATA_FILE} to {}", target.display()))?;
    Ok(())
}
