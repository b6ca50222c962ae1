//! Interactive play over line-oriented input.
//!
//! Each input line is one drag selection, written as cells separated by
//! whitespace. A cell is either a row-major index (`12`) or a coordinate pair
//! (`2,1`, column first). Commands are `words`, `restart`, and `quit`.

use std::{
    collections::HashSet,
    io::{self, BufRead, Write},
    time::Instant,
};

use wordsearch_core::{Position, Selection};
use wordsearch_generator::GridSeed;
use wordsearch_game::{
    Game, GameError, GameStatus, Level, SelectionOutcome,
    progress::{self, ProgressStore},
    score,
};

use crate::render;

/// Errors that can occur while reading a cell token.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum CellParseError {
    #[display("{token:?} is not a cell index or an x,y pair")]
    Malformed { token: String },
    #[display("{token:?} is outside the {size}x{size} grid")]
    OutOfRange { token: String, size: usize },
}

/// Parses a cell token into a row-major index.
pub(crate) fn parse_cell(token: &str, size: usize) -> Result<usize, CellParseError> {
    let malformed = || CellParseError::Malformed {
        token: token.to_owned(),
    };
    let out_of_range = || CellParseError::OutOfRange {
        token: token.to_owned(),
        size,
    };

    if let Some((x, y)) = token.split_once(',') {
        let x = x.trim().parse::<usize>().map_err(|_| malformed())?;
        let y = y.trim().parse::<usize>().map_err(|_| malformed())?;
        let pos = Position::new(x, y);
        return if pos.is_within(size) {
            Ok(pos.to_index(size))
        } else {
            Err(out_of_range())
        };
    }

    let index = token.parse::<usize>().map_err(|_| malformed())?;
    if size.checked_mul(size).is_some_and(|cells| index < cells) {
        Ok(index)
    } else {
        Err(out_of_range())
    }
}

/// Builds a selection from the cell tokens of one input line, the way a drag
/// would: each cell either extends the straight line or is ignored.
fn read_selection<W: Write>(line: &str, size: usize, out: &mut W) -> io::Result<Selection> {
    let mut selection = Selection::new();
    for token in line.split_whitespace() {
        match parse_cell(token, size) {
            Ok(index) => {
                if !selection.try_push(index, size) {
                    writeln!(out, "  ignoring {token}: not in line with the selection")?;
                }
            }
            Err(e) => writeln!(out, "  ignoring {e}")?,
        }
    }
    Ok(selection)
}

/// Starts `level`, continuing the saved attempt in `store` when there is one
/// for the same level.
///
/// An explicit `seed` always starts a fresh attempt on that grid.
pub(crate) fn resume_or_start<S>(
    level: Level,
    seed: Option<GridSeed>,
    store: &S,
) -> Result<Game, GameError>
where
    S: ProgressStore + ?Sized,
{
    if let Some(seed) = seed {
        return Game::start_with_seed(level, seed);
    }
    match progress::load_progress(store) {
        Some(saved) if saved.level == level.id => match Game::resume(level.clone(), &saved) {
            Ok(game) => Ok(game),
            Err(e) => {
                log::warn!("starting over: {e}");
                Game::start(level)
            }
        },
        _ => Game::start(level),
    }
}

/// Runs one attempt until it is completed, the time is up, or input ends.
///
/// Time is measured with the wall clock and applied to the countdown before
/// each selection, so expiry is noticed at the next input line.
pub(crate) fn run<R, W, S>(game: &mut Game, input: R, out: &mut W, store: &mut S) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: ProgressStore + ?Sized,
{
    let mut clock = Clock::start();
    print_board(game, out)?;

    for line in input.lines() {
        let line = line?;
        clock.apply(game);
        if !game.status().is_playing() {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "q" => {
                save(game, store);
                writeln!(out, "Progress saved.")?;
                return Ok(());
            }
            "restart" => {
                game.restart();
                clock = Clock::start();
                progress::clear_progress(store);
                print_board(game, out)?;
                continue;
            }
            "words" => {
                print_board(game, out)?;
                continue;
            }
            _ => {}
        }

        let selection = read_selection(&line, game.grid().size(), out)?;
        let outcome = match game.submit_selection(selection.cells()) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(out, "{e}")?;
                break;
            }
        };
        match outcome {
            SelectionOutcome::Found { word, points } => {
                writeln!(out, "Found {word}! +{points}")?;
                save(game, store);
                if !game.status().is_completed() {
                    print_board(game, out)?;
                }
            }
            SelectionOutcome::AlreadyFound(word) => writeln!(out, "{word} was already found.")?,
            SelectionOutcome::NotAWord(text) => writeln!(out, "{text} is not one of the words.")?,
            SelectionOutcome::Invalid => {
                writeln!(out, "Select at least two cells in a straight line.")?;
            }
        }
        if !game.status().is_playing() {
            break;
        }
    }

    finish(game, out, store)
}

fn finish<W, S>(game: &Game, out: &mut W, store: &mut S) -> io::Result<()>
where
    W: Write,
    S: ProgressStore + ?Sized,
{
    match game.status() {
        GameStatus::Playing => {
            save(game, store);
            return Ok(());
        }
        GameStatus::Completed => writeln!(out, "Level complete!")?,
        GameStatus::TimeUp => writeln!(out, "Time's up!")?,
    }

    let summary = game.summary();
    writeln!(out, "  Score:       {}", summary.score)?;
    writeln!(
        out,
        "  Words found: {} / {}",
        summary.words_found,
        game.targets().len()
    )?;
    writeln!(out, "  Time spent:  {}", summary.time_spent)?;
    writeln!(out, "  Difficulty:  {}", summary.difficulty)?;
    if summary.perfect {
        writeln!(out, "  Perfect!")?;
    }

    progress::clear_progress(store);
    match progress::record_high_score(store, game.level().id, summary.score) {
        Ok(true) => writeln!(out, "  New high score!")?,
        Ok(false) => {}
        Err(e) => log::warn!("failed to record high score: {e}"),
    }
    Ok(())
}

fn save<S>(game: &Game, store: &mut S)
where
    S: ProgressStore + ?Sized,
{
    if let Err(e) = progress::save_progress(store, &game.snapshot()) {
        log::warn!("failed to save progress: {e}");
    }
}

fn print_board<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    let highlighted: HashSet<usize> = game
        .highlights()
        .into_iter()
        .flat_map(|(_, path)| path)
        .collect();
    writeln!(out)?;
    write!(out, "{}", render::render_grid(game.grid(), &highlighted))?;
    writeln!(out)?;

    let words: Vec<String> = game
        .targets()
        .iter()
        .map(|word| {
            if game.is_found(word) {
                word.to_string().to_ascii_lowercase()
            } else {
                word.to_string()
            }
        })
        .collect();
    writeln!(out, "Words: {}", words.join(" "))?;
    writeln!(
        out,
        "Score: {}  Time left: {}",
        game.score(),
        score::format_time(game.time_remaining())
    )?;
    Ok(())
}

/// Converts elapsed wall-clock seconds into countdown ticks.
struct Clock {
    started: Instant,
    applied: u64,
}

impl Clock {
    fn start() -> Self {
        Self {
            started: Instant::now(),
            applied: 0,
        }
    }

    fn apply(&mut self, game: &mut Game) {
        let elapsed = self.started.elapsed().as_secs();
        while self.applied < elapsed {
            self.applied += 1;
            if !game.tick().is_running() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wordsearch_core::LetterGrid;
    use wordsearch_game::{Difficulty, Level, progress::MemoryProgressStore};
    use wordsearch_generator::{GeneratedGrid, GridSeed};

    use super::*;

    fn fixed_game() -> Game {
        let grid: LetterGrid = "CATXX/XXXXD/XXXXO/XXXXG/XXXXX".parse().unwrap();
        let generated = GeneratedGrid {
            seed: GridSeed::from_phrase("cli"),
            grid,
            placements: Vec::new(),
        };
        let level = Level::new(4, 5, ["CAT", "DOG"], 600, Difficulty::Easy);
        Game::new(level, generated).unwrap()
    }

    fn play(game: &mut Game, input: &str, store: &mut MemoryProgressStore) -> String {
        let mut out = Vec::new();
        run(game, input.as_bytes(), &mut out, store).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("12", 5), Ok(12));
        assert_eq!(parse_cell("2,1", 5), Ok(7));
        assert_eq!(parse_cell("4, 4", 5), Ok(24));
        assert!(matches!(
            parse_cell("25", 5),
            Err(CellParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_cell("5,0", 5),
            Err(CellParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_cell("a,b", 5),
            Err(CellParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_cell("-1", 5),
            Err(CellParseError::Malformed { .. })
        ));
    }

    #[test]
    fn test_read_selection_skips_off_line_cells() {
        let mut out = Vec::new();
        let selection = read_selection("0 1 7 2 zz", 5, &mut out).unwrap();
        assert_eq!(selection.cells(), [0, 1, 2]);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("ignoring 7"));
        assert!(out.contains("\"zz\""));
    }

    #[test]
    fn test_play_to_completion() {
        let mut game = fixed_game();
        let mut store = MemoryProgressStore::new();
        let out = play(&mut game, "0 1 2\n0 1 2\n0,0 1,0\n4,3 4,2 4,1\n", &mut store);

        assert!(out.contains("Found CAT! +"));
        assert!(out.contains("CAT was already found."));
        assert!(out.contains("CA is not one of the words."));
        assert!(out.contains("Found DOG! +"));
        assert!(out.contains("Level complete!"));
        assert!(out.contains("Perfect!"));
        assert!(out.contains("New high score!"));
        assert!(game.status().is_completed());
        assert_eq!(progress::load_progress(&store), None);
        assert_eq!(
            progress::load_high_scores(&store).best(4),
            Some(game.summary().score)
        );
    }

    #[test]
    fn test_quit_saves_progress() {
        let mut game = fixed_game();
        let mut store = MemoryProgressStore::new();
        let out = play(&mut game, "2 1 0\nquit\n4,1 4,2 4,3\n", &mut store);

        assert!(out.contains("Progress saved."));
        assert!(!out.contains("Found DOG"));
        let snapshot = progress::load_progress(&store).unwrap();
        assert_eq!(snapshot.level, 4);
        assert_eq!(snapshot.found_words, ["CAT"]);
        assert!(game.status().is_playing());
    }

    #[test]
    fn test_resume_or_start() {
        let level = || Level::new(5, 8, ["LANTERN", "ISLAND", "KING"], 90, Difficulty::Easy);
        let mut store = MemoryProgressStore::new();
        assert!(resume_or_start(level(), None, &store).unwrap().found_words().is_empty());

        let seed = GridSeed::from_phrase("cli-resume");
        let mut game = resume_or_start(level(), Some(seed), &store).unwrap();
        assert_eq!(game.seed(), seed);
        let path = game.placements()[0].path().to_vec();
        let out = play(&mut game, &format!("{}\nquit\n", join_cells(&path)), &mut store);
        assert!(out.contains("Found "));

        let resumed = resume_or_start(level(), None, &store).unwrap();
        assert_eq!(resumed.grid(), game.grid());
        assert_eq!(resumed.found_words(), game.found_words());
        assert_eq!(resumed.score(), game.score());

        let fresh = resume_or_start(level(), Some(GridSeed::from_phrase("other")), &store).unwrap();
        assert!(fresh.found_words().is_empty());

        let other_level = Level::new(6, 8, ["KING"], 90, Difficulty::Easy);
        assert!(resume_or_start(other_level, None, &store).unwrap().found_words().is_empty());
    }

    fn join_cells(path: &[usize]) -> String {
        path.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_invalid_selection_message() {
        let mut game = fixed_game();
        let mut store = MemoryProgressStore::new();
        let out = play(&mut game, "3\n\nwords\n", &mut store);
        assert!(out.contains("Select at least two cells in a straight line."));
        assert!(out.contains("Words: CAT DOG"));
        assert_eq!(progress::load_progress(&store).unwrap().score, 0);
    }
}
