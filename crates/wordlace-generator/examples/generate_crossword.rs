//! Example demonstrating crossword generation and best-of-N sampling.
//!
//! This example shows how to:
//! - Create a `CrosswordGenerator` from a `GeneratorConfig`
//! - Generate a crossword from a word list
//! - Display the grid, placements, and seed
//! - Sample many seeds in parallel and keep the densest grid
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_crossword -- python code test grid word place cross
//! ```
//!
//! Keep the crossword with the most placed words out of a sampling budget
//! (default: 1):
//!
//! ```sh
//! cargo run --example generate_crossword -- --max-tries 1000 python code test grid
//! ```
//!
//! Select the sampling strategy:
//!
//! ```sh
//! cargo run --example generate_crossword -- --strategy shuffled-scan python code test
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use wordlace_generator::{CrosswordGenerator, GeneratedCrossword, GeneratorConfig, SamplingStrategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    Random,
    ShuffledScan,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Sampling strategy for start positions.
    #[arg(long, value_name = "KIND", default_value = "random")]
    strategy: StrategyKind,

    /// Grid size (rows and columns).
    #[arg(long, value_name = "N", default_value_t = 15)]
    size: usize,

    /// Crosswords to sample; the one with the most placements is printed.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: usize,

    /// Candidate words.
    #[arg(value_name = "WORD", required = true)]
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let strategy = match args.strategy {
        StrategyKind::Random => SamplingStrategy::Random,
        StrategyKind::ShuffledScan => SamplingStrategy::ShuffledScan,
    };
    let generator = CrosswordGenerator::new(
        GeneratorConfig::default()
            .with_grid_size(args.size)
            .with_strategy(strategy),
    );

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|_| generator.generate(&args.words))
        .max_by_key(|generated| generated.crossword.placements().len());

    if let Some(generated) = best {
        print_crossword(&generated, args.words.len());
    }
}

fn print_crossword(generated: &GeneratedCrossword, candidates: usize) {
    let crossword = &generated.crossword;

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Grid:");
    for line in crossword.grid().to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Placements:");
    for placement in crossword.placements() {
        println!(
            "  {:>2}. {} {} at {}",
            placement.number(),
            placement.word(),
            placement.orientation(),
            placement.start()
        );
    }
    println!(
        "  placed: {} of {candidates}",
        crossword.placements().len()
    );
}
