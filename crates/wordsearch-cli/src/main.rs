//! Wordsearch terminal front end.
//!
//! `wordsearch generate` prints a grid and where each word went.
//! `wordsearch play` runs a timed level on standard input.
//!
//! Set `RUST_LOG=debug` to see placement and scoring logs.

use std::{collections::HashSet, io, path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand, ValueEnum};
use wordsearch_core::Word;
use wordsearch_game::{Difficulty, GameError, Level, progress};
use wordsearch_generator::{GridGenerator, GridSeed};

use self::store::FileProgressStore;

mod play;
mod render;
mod store;

/// Errors that end the program.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("I/O error: {source}")]
    Io { source: io::Error },
    #[display("{source}")]
    Game { source: GameError },
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a grid and print it with the placements.
    Generate(GridArgs),
    /// Play a timed level on standard input.
    Play(PlayArgs),
}

#[derive(Debug, Args)]
struct GridArgs {
    /// Grid width and height.
    #[arg(long, value_name = "SIZE", default_value_t = 10)]
    size: usize,

    /// Hex seed to reproduce a grid.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<GridSeed>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Words to hide (case-insensitive).
    #[arg(required = true, value_name = "WORD")]
    words: Vec<String>,
}

impl GridArgs {
    fn explicit_seed(&self) -> Option<GridSeed> {
        self.seed
            .or_else(|| self.phrase.as_deref().map(GridSeed::from_phrase))
    }

    fn seed(&self) -> GridSeed {
        self.explicit_seed().unwrap_or_else(GridSeed::random)
    }
}

#[derive(Debug, Args)]
struct PlayArgs {
    #[command(flatten)]
    grid: GridArgs,

    /// Level number, used as the high score key.
    #[arg(long, value_name = "ID", default_value_t = 1)]
    level: u32,

    /// Seconds available to find every word.
    #[arg(long, value_name = "SECONDS", default_value_t = 120)]
    time_limit: u32,

    /// Score multiplier applied at the end of the level.
    #[arg(long, value_name = "LEVEL", default_value = "easy")]
    difficulty: DifficultyArg,

    /// Directory for saved progress and high scores.
    #[arg(long, value_name = "DIR")]
    save_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => {
            generate(&args);
            Ok(())
        }
        Command::Play(args) => play(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn generate(args: &GridArgs) {
    let words = normalize_words(&args.words);
    let generated = GridGenerator::new(args.size).generate_with_seed(args.seed(), &words);

    println!("Seed: {}", generated.seed);
    println!();
    print!("{}", render::render_grid(&generated.grid, &HashSet::new()));
    println!();
    for placed in &generated.placements {
        println!(
            "{} at {} going {}",
            placed.word(),
            placed.start(),
            placed.direction()
        );
    }
    println!(
        "placed {} of {} words",
        generated.placements.len(),
        words.len()
    );
}

/// Normalizes words the way a level does. Words that are not letters only are
/// passed through for the generator to report.
fn normalize_words(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|text| Word::normalized(text).map_or_else(|_| text.clone(), |word| word.to_string()))
        .collect()
}

fn play(args: PlayArgs) -> Result<(), CliError> {
    let seed = args.grid.explicit_seed();
    let level = Level::new(
        args.level,
        args.grid.size,
        args.grid.words,
        args.time_limit,
        args.difficulty.into(),
    );

    let dir = args.save_dir.unwrap_or_else(FileProgressStore::default_dir);
    let mut store = FileProgressStore::new(&dir);
    if let Some(best) = progress::load_high_scores(&store).best(args.level) {
        println!("Best score for level {}: {best}", args.level);
    }
    let mut game = play::resume_or_start(level, seed, &store)?;
    if !game.found_words().is_empty() {
        println!(
            "Resuming level {} with {} of {} words found.",
            game.level().id,
            game.found_words().len(),
            game.targets().len()
        );
    }
    println!("Seed: {}", game.seed());
    println!("Enter cells as indices or x,y pairs, e.g. `0 1 2` or `0,0 1,0 2,0`.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play::run(&mut game, stdin.lock(), &mut stdout, &mut store)?;
    Ok(())
}
