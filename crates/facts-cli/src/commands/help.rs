use std::io::{self, Write};

use facts_core::render;

pub fn run() -> Result<(), String> {
    let mut out = io::stdout().lock();
    render::write_help(&mut out, env!("CARGO_BIN_NAME"))
        .and_then(|()| out.flush())
        .map_err(super::write_failed)
}
