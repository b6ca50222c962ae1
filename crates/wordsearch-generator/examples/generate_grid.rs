//! Example demonstrating word-search grid generation.
//!
//! This example shows how to:
//! - Create a `GridGenerator` for a given size
//! - Generate a grid from a random, hex, or phrase seed
//! - Display the grid, the seed, and where each word was placed
//! - Sample many seeds and keep the grid that placed the most words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_grid -- HARP DOCTOR CHIP THINK
//! ```
//!
//! Reproduce a grid from a phrase or hex seed:
//!
//! ```sh
//! cargo run --example generate_grid -- --phrase level-1 HARP DOCTOR CHIP THINK
//! cargo run --example generate_grid -- --seed <HEX> HARP DOCTOR CHIP THINK
//! ```
//!
//! Try up to 1000 random seeds until every word is placed:
//!
//! ```sh
//! cargo run --example generate_grid -- --size 8 --max-tries 1000 ADVENTURE BUTTERFLY ISLAND
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use wordsearch_core::Word;
use wordsearch_generator::{GeneratedGrid, GridGenerator, GridSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid width and height.
    #[arg(long, value_name = "SIZE", default_value_t = 10)]
    size: usize,

    /// Hex seed to reproduce a grid.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<GridSeed>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Random seeds to sample, keeping the grid with the most placed words.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: usize,

    /// Words to hide (case-insensitive).
    #[arg(required = true, value_name = "WORD")]
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();
    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let words: Vec<String> = args
        .words
        .iter()
        .map(|text| Word::normalized(text).map_or_else(|_| text.clone(), |word| word.to_string()))
        .collect();
    let generator = GridGenerator::new(args.size);

    let fixed_seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(GridSeed::from_phrase));
    if let Some(seed) = fixed_seed {
        print_grid(&generator.generate_with_seed(seed, &words), &words);
        return;
    }

    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|_| generator.generate(&words))
        .max_by_key(|generated| generated.placements.len());

    if let Some(generated) = best {
        print_grid(&generated, &words);
    }
}

fn print_grid(generated: &GeneratedGrid, words: &[String]) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Grid:");
    for line in generated.grid.to_string().lines() {
        let spaced: Vec<String> = line.chars().map(String::from).collect();
        println!("  {}", spaced.join(" "));
    }
    println!();

    println!("Placements:");
    for placed in &generated.placements {
        println!(
            "  {} at {} going {}",
            placed.word(),
            placed.start(),
            placed.direction()
        );
    }
    println!(
        "  placed: {} / {}",
        generated.placements.len(),
        words.len()
    );
}
