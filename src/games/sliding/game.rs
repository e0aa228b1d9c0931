//! Sliding puzzle implementation.

use std::str::FromStr;

use tracing::{debug, info};

use crate::board::{CellView, Grid, Position};
use crate::core::{DimensionError, FormatError, GameRng, MoveError, PlayerId, RangeError, RuleViolation};
use crate::rules::{Game, GameResult, GameStatus, MoveOutcome};

/// Label of the blank cell.
pub const BLANK: u32 = 0;

/// A tile label as typed. Parsing keeps the sign so `-3` is a range error,
/// not a format error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideMove(pub i64);

impl FromStr for SlideMove {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FormatError::Empty);
        }
        s.parse::<i64>()
            .map(SlideMove)
            .map_err(|_| FormatError::NotANumber(s.to_string()))
    }
}

/// Sliding number puzzle.
#[derive(Clone, Debug)]
pub struct SlidingPuzzle {
    grid: Grid,
    /// Row-major labels; `BLANK` marks the empty cell.
    labels: Vec<u32>,
    /// Cached position of `BLANK`.
    empty: Position,
    player_name: String,
    rng: GameRng,
    status: GameStatus,
    moves_made: u32,
}

/// Builder for creating a SlidingPuzzle.
pub struct SlidingPuzzleBuilder {
    rows: i64,
    columns: i64,
    player_name: String,
}

impl Default for SlidingPuzzleBuilder {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 3,
            player_name: "Player 1".to_string(),
        }
    }
}

impl SlidingPuzzleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: i64) -> Self {
        self.rows = rows;
        self
    }

    pub fn columns(mut self, columns: i64) -> Self {
        self.columns = columns;
        self
    }

    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Build and shuffle a puzzle from a seed.
    pub fn build(self, seed: u64) -> Result<SlidingPuzzle, DimensionError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build and shuffle a puzzle, taking ownership of `rng`.
    pub fn build_with_rng(self, rng: GameRng) -> Result<SlidingPuzzle, DimensionError> {
        let grid = checked_grid(self.rows, self.columns)?;

        let mut puzzle = SlidingPuzzle {
            grid,
            labels: Vec::new(),
            empty: Position::new(0, 0),
            player_name: self.player_name,
            rng,
            status: GameStatus::Active,
            moves_made: 0,
        };
        puzzle.initialize();
        Ok(puzzle)
    }
}

fn checked_grid(rows: i64, columns: i64) -> Result<Grid, DimensionError> {
    let grid = Grid::new(rows, columns)?;
    if grid.cell_count() < 2 {
        return Err(DimensionError::TooFewCells);
    }
    Ok(grid)
}

/// Solvability of a layout under the standard parity rule.
///
/// Inversions are counted over the non-blank labels in row-major order.
/// With an odd column count the layout is solvable iff the inversion count
/// is even; with an even column count iff inversions plus the blank's row
/// counted from the bottom (1-based) is odd.
#[must_use]
pub fn is_solvable(grid: &Grid, labels: &[u32]) -> bool {
    let mut empty_row_from_bottom = 0;
    let mut tiles = Vec::with_capacity(labels.len());
    for (i, &label) in labels.iter().enumerate() {
        if label == BLANK {
            empty_row_from_bottom = grid.rows() - grid.position(i).row;
        } else {
            tiles.push(label);
        }
    }

    let inversions: usize = tiles
        .iter()
        .enumerate()
        .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| a > b).count())
        .sum();

    if grid.columns() % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + empty_row_from_bottom) % 2 == 1
    }
}

/// True iff labels read `1, 2, ..., n-1, BLANK`.
#[must_use]
pub fn is_solved(labels: &[u32]) -> bool {
    match labels.split_last() {
        Some((&last, rest)) => {
            last == BLANK && rest.iter().zip(1..).all(|(&label, expected)| label == expected)
        }
        None => false,
    }
}

impl SlidingPuzzle {
    /// Start a builder.
    pub fn builder() -> SlidingPuzzleBuilder {
        SlidingPuzzleBuilder::new()
    }

    /// Puzzle with an explicit layout (row-major labels, `0` = blank).
    ///
    /// The layout need not be solvable. A later `initialize` reshuffles with
    /// an RNG seeded from 0.
    pub fn from_labels(rows: i64, columns: i64, labels: &[u32]) -> Result<Self, DimensionError> {
        let grid = checked_grid(rows, columns)?;
        let cells = grid.cell_count();
        if labels.len() != cells {
            return Err(DimensionError::LabelCount {
                expected: cells,
                found: labels.len(),
            });
        }
        let mut sorted = labels.to_vec();
        sorted.sort_unstable();
        if !sorted.iter().zip(0..).all(|(&label, expected)| label == expected) {
            return Err(DimensionError::LabelSet { cells });
        }

        let mut puzzle = Self {
            grid,
            labels: labels.to_vec(),
            empty: Position::new(0, 0),
            player_name: "Player 1".to_string(),
            rng: GameRng::new(0),
            status: GameStatus::Active,
            moves_made: 0,
        };
        puzzle.empty = puzzle.locate(BLANK);
        if is_solved(&puzzle.labels) {
            puzzle.status = GameStatus::Won;
        }
        Ok(puzzle)
    }

    /// Row-major labels.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Label at `pos`.
    pub fn label_at(&self, pos: Position) -> u32 {
        self.labels[self.grid.index(pos)]
    }

    /// Where the blank is.
    pub fn empty_position(&self) -> Position {
        self.empty
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Legal moves applied since the last `initialize`.
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Whether the current layout can be solved.
    pub fn is_solvable(&self) -> bool {
        is_solvable(&self.grid, &self.labels)
    }

    /// Labels that can slide into the blank right now.
    pub fn movable_tiles(&self) -> Vec<u32> {
        self.grid
            .neighbors(self.empty)
            .iter()
            .map(|&pos| self.label_at(pos))
            .collect()
    }

    fn locate(&self, label: u32) -> Position {
        let index = self
            .labels
            .iter()
            .position(|&l| l == label)
            .unwrap_or_default();
        self.grid.position(index)
    }
}

impl Game for SlidingPuzzle {
    type Move = SlideMove;

    fn initialize(&mut self) {
        let cells = self.grid.cell_count() as u32;
        let mut labels: Vec<u32> = (0..cells).collect();

        let mut shuffles = 0u32;
        loop {
            self.rng.shuffle(&mut labels);
            shuffles += 1;
            if is_solvable(&self.grid, &labels) && !is_solved(&labels) {
                break;
            }
        }

        self.labels = labels;
        self.empty = self.locate(BLANK);
        self.status = GameStatus::Active;
        self.moves_made = 0;
        debug!(
            rows = self.grid.rows(),
            columns = self.grid.columns(),
            shuffles,
            "sliding puzzle shuffled"
        );
    }

    fn apply_move(&mut self, mv: SlideMove) -> Result<MoveOutcome, MoveError> {
        if !self.is_active() {
            return Err(RuleViolation::GameOver.into());
        }

        let max = self.grid.cell_count() - 1;
        let SlideMove(label) = mv;
        if label <= 0 || label > max as i64 {
            return Err(RangeError::Tile { label, max }.into());
        }
        let label = label as u32;

        let tile = self
            .grid
            .neighbors(self.empty)
            .into_iter()
            .find(|&pos| self.label_at(pos) == label)
            .ok_or(RuleViolation::NotAdjacent(label))?;

        let (a, b) = (self.grid.index(tile), self.grid.index(self.empty));
        self.labels.swap(a, b);
        self.empty = tile;
        self.moves_made += 1;
        debug!(tile = label, empty = %self.empty, "tile slid");

        if is_solved(&self.labels) {
            self.status = GameStatus::Won;
            info!(player = %self.player_name, moves = self.moves_made, "puzzle solved");
        }
        Ok(MoveOutcome::Continue)
    }

    fn quit(&mut self) {
        if self.status == GameStatus::Active {
            self.status = GameStatus::Quit;
            info!(player = %self.player_name, moves = self.moves_made, "sliding puzzle abandoned");
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn is_won(&self) -> bool {
        is_solved(&self.labels)
    }

    fn grid(&self) -> Grid {
        self.grid
    }

    fn cell_views(&self) -> Vec<Vec<CellView>> {
        (0..self.grid.rows())
            .map(|row| {
                (0..self.grid.columns())
                    .map(|col| match self.label_at(Position::new(row, col)) {
                        BLANK => CellView::boxed(" "),
                        label => CellView::boxed(label.to_string()),
                    })
                    .collect()
            })
            .collect()
    }

    fn result(&self) -> Option<GameResult> {
        self.is_won().then_some(GameResult::Winner(PlayerId::FIRST))
    }

    fn victory_message(&self) -> String {
        format!("\nCongratulations, {}! You solved the puzzle!", self.player_name)
    }

    fn summary(&self) -> String {
        if self.is_won() {
            format!(
                "Puzzle completed successfully!\nCongratulations {}!",
                self.player_name
            )
        } else {
            format!(
                "Game ended prematurely.\nThe puzzle was not completed.\nBetter luck next time, {}!",
                self.player_name
            )
        }
    }

    fn move_prompt(&self) -> String {
        format!(
            "{}, which tile do you want to slide to the empty space? ",
            self.player_name
        )
    }

    fn status_lines(&self) -> Vec<String> {
        vec![format!("Moves: {}", self.moves_made)]
    }
}
