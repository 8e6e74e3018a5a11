//! # Sparse Life
//!
//! Prints the generations of a named Game of Life pattern, or watches it
//! evolve in an interactive terminal view.
//!
//! ```text
//! sparse_life rpentomino 50
//! sparse_life glider 0 --watch --tick-ms 200
//! ```

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use std::{io, time::Duration};

use sparse_life::{
    parse_iterations, pattern, pattern_names, viewer, write_generations, ViewerConfig,
};

fn usage() -> String {
    let names: Vec<_> = pattern_names().collect();
    format!("Usage: sparse_life <{}> <iterations>", names.join("|"))
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the starting pattern
    pattern: String,
    /// Number of generations to compute after the seed
    iterations: String,
    /// Open the interactive viewer instead of printing
    #[arg(short, long, default_value_t = false)]
    watch: bool,
    /// Milliseconds between generations in the viewer
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
    /// Width of the random soup the viewer seeds with `r`
    #[arg(long, default_value_t = 40)]
    soup_width: usize,
    /// Height of the random soup the viewer seeds with `r`
    #[arg(long, default_value_t = 20)]
    soup_height: usize,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("{}", usage());
            return Ok(());
        }
    };

    let (Some(seed), Some(iterations)) = (pattern(&cli.pattern), parse_iterations(&cli.iterations))
    else {
        println!("{}", usage());
        return Ok(());
    };

    if cli.watch {
        let config = ViewerConfig {
            tick_rate: Duration::from_millis(cli.tick_ms),
            soup_width: cli.soup_width,
            soup_height: cli.soup_height,
        };
        viewer::run(seed, config)
    } else {
        let mut out = io::BufWriter::new(io::stdout().lock());
        write_generations(&mut out, seed, iterations).context("failed to write generations")
    }
}
