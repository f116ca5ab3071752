use std::io::{self, Write};

use facts_core::render;

pub fn run() -> Result<(), String> {
    let facts = super::load_facts()?;
    let fact = facts.random(&mut rand::rng());

    let mut out = io::stdout().lock();
    render::write_random(&mut out, fact)
        .and_then(|()| out.flush())
        .map_err(super::write_failed)
}
