use std::io::{self, Write};

use crate::cell::State;
use crate::history::iterate;
use crate::patterns::pattern;
use crate::render::render;

/// Writes every generation of `iterate(seed, iterations)` to `out`, one
/// rendered block after another with nothing in between.
pub fn write_generations<W: Write>(out: &mut W, seed: State, iterations: usize) -> io::Result<()> {
    for state in iterate(seed, iterations) {
        out.write_all(render(&state).as_bytes())?;
    }
    out.flush()
}

/// Simulates the catalog pattern `name` and prints its generations to
/// standard output.
///
/// An unknown name simulates the empty state.
pub fn run(name: &str, iterations: usize) -> io::Result<()> {
    let seed = pattern(name).unwrap_or_default();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_generations(&mut out, seed, iterations)
}
