//! Quoridor implementation.

use std::collections::VecDeque;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::board::{CellView, Direction, Grid, Position};
use crate::core::{
    player_label, DimensionError, FormatError, MoveError, PlayerId, PlayerMap, RangeError,
    RuleViolation, QUORIDOR_SIZE, QUORIDOR_WALLS,
};
use crate::games::notation::{letter, parse_direction, parse_oriented_coordinates, tokenize, Orientation};
use crate::rules::{Game, GameResult, GameStatus, MoveOutcome};

const N: usize = QUORIDOR_SIZE;

/// A Quoridor move as typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoridorMove {
    /// `M U|D|L|R`: step the pawn one cell.
    Step(Direction),
    /// `H|V r c`: wall starting at 1-indexed `(row, col)`.
    Wall {
        orientation: Orientation,
        row: i64,
        col: i64,
    },
}

impl FromStr for QuoridorMove {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s);
        let Some(&kind) = tokens.first() else {
            return Err(FormatError::Empty);
        };

        match letter(kind) {
            Some('M') => {
                if tokens.len() != 2 {
                    return Err(FormatError::WrongArity {
                        what: "Move",
                        usage: "M [U/D/L/R]",
                    });
                }
                Ok(QuoridorMove::Step(parse_direction(tokens[1])?))
            }
            Some('H' | 'V') => {
                let (orientation, row, col) = parse_oriented_coordinates(&tokens, "Wall", "H/V r c")?;
                Ok(QuoridorMove::Wall {
                    orientation,
                    row,
                    col,
                })
            }
            _ => Err(FormatError::UnknownMoveType {
                found: kind.to_string(),
                expected: "M, H, or V",
            }),
        }
    }
}

/// Quoridor on a 9×9 board, without jumps or diagonal moves.
///
/// ## Wall slots
///
/// - Horizontal slot `(r, c)` separates cell `(r, c)` from `(r + 1, c)`;
///   there are `(N - 1) × N` of them.
/// - Vertical slot `(r, c)` separates cell `(r, c)` from `(r, c + 1)`;
///   there are `N × (N - 1)` of them.
///
/// A wall fills two slots: `H r c` covers horizontal `(r, c)` and
/// `(r, c + 1)`, `V r c` covers vertical `(r, c)` and `(r + 1, c)`.
#[derive(Clone, Debug)]
pub struct Quoridor {
    grid: Grid,
    start: PlayerMap<Position>,
    pawns: PlayerMap<Position>,
    walls_per_player: u32,
    walls_left: PlayerMap<u32>,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    names: PlayerMap<String>,
    current: PlayerId,
    status: GameStatus,
}

/// Builder for creating a Quoridor game.
pub struct QuoridorBuilder {
    names: [String; 2],
    walls_per_player: u32,
    start: [Position; 2],
}

impl Default for QuoridorBuilder {
    fn default() -> Self {
        Self {
            names: ["Player 1".to_string(), "Player 2".to_string()],
            walls_per_player: QUORIDOR_WALLS,
            start: [Position::new(N - 1, N / 2), Position::new(0, N / 2)],
        }
    }
}

impl QuoridorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    pub fn walls_per_player(mut self, walls: u32) -> Self {
        self.walls_per_player = walls;
        self
    }

    /// Override the pawn starting cells (bottom and top center by default).
    ///
    /// Checked by `build`.
    pub fn starting_positions(mut self, first: Position, second: Position) -> Self {
        self.start = [first, second];
        self
    }

    /// Build the game. A pawn that starts on its goal row has already won.
    pub fn build(self) -> Result<Quoridor, DimensionError> {
        let [first_start, second_start] = self.start;
        let on_board = |pos: Position| pos.row < N && pos.col < N;
        if first_start == second_start || !on_board(first_start) || !on_board(second_start) {
            return Err(DimensionError::StartingCells { size: N });
        }

        let [first, second] = self.names;
        let names = PlayerMap::new(2, |p| if p == PlayerId::FIRST { first.clone() } else { second.clone() });
        let start = PlayerMap::new(2, |p| self.start[p.index()]);

        let mut game = Quoridor {
            grid: Grid::fixed(N, N),
            pawns: start.clone(),
            start,
            walls_per_player: self.walls_per_player,
            walls_left: PlayerMap::with_value(2, self.walls_per_player),
            horizontal: Vec::new(),
            vertical: Vec::new(),
            names,
            current: PlayerId::FIRST,
            status: GameStatus::Active,
        };
        game.initialize();
        Ok(game)
    }
}

impl Quoridor {
    /// Start a builder.
    pub fn builder() -> QuoridorBuilder {
        QuoridorBuilder::new()
    }

    /// Player to move.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn pawn(&self, player: PlayerId) -> Position {
        self.pawns[player]
    }

    pub fn walls_left(&self, player: PlayerId) -> u32 {
        self.walls_left[player]
    }

    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    /// Row `player` must reach: the top for the first player, the bottom for
    /// the second.
    pub fn goal_row(player: PlayerId) -> usize {
        if player == PlayerId::FIRST {
            0
        } else {
            N - 1
        }
    }

    /// Player whose pawn stands on its goal row, checking the first player
    /// first.
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::all(2).find(|&p| self.pawns[p].row == Self::goal_row(p))
    }

    /// Whether a wall slot is filled. Off-board slots read as empty.
    pub fn wall_at(&self, orientation: Orientation, row: usize, col: usize) -> bool {
        match orientation {
            Orientation::Horizontal => row < N - 1 && col < N && self.horizontal[row * N + col],
            Orientation::Vertical => row < N && col < N - 1 && self.vertical[row * (N - 1) + col],
        }
    }

    /// Filled slots of one orientation.
    pub fn wall_slots_filled(&self, orientation: Orientation) -> usize {
        let slots = match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        };
        slots.iter().filter(|&&filled| filled).count()
    }

    /// Whether a wall slot separates two orthogonally adjacent cells.
    pub fn is_wall_between(&self, from: Position, to: Position) -> bool {
        if from.row == to.row {
            self.wall_at(Orientation::Vertical, from.row, from.col.min(to.col))
        } else if from.col == to.col {
            self.wall_at(Orientation::Horizontal, from.row.min(to.row), from.col)
        } else {
            false
        }
    }

    /// Whether `player` can still walk to its goal row, ignoring pawns.
    ///
    /// Wall placement does not consult this; it is reported for diagnostics.
    pub fn has_path_to_goal(&self, player: PlayerId) -> bool {
        let goal = Self::goal_row(player);
        let mut seen = vec![false; self.grid.cell_count()];
        let mut queue = VecDeque::from([self.pawns[player]]);
        seen[self.grid.index(self.pawns[player])] = true;

        while let Some(pos) = queue.pop_front() {
            if pos.row == goal {
                return true;
            }
            for next in self.grid.neighbors(pos) {
                let index = self.grid.index(next);
                if !seen[index] && !self.is_wall_between(pos, next) {
                    seen[index] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }

    fn step_pawn(&mut self, direction: Direction) -> Result<(), MoveError> {
        let from = self.pawns[self.current];
        let target = self.grid.step(from, direction).ok_or(RangeError::OffBoard)?;

        if self.is_wall_between(from, target) {
            return Err(RuleViolation::WallBlocked.into());
        }
        if target == self.pawns[self.current.other()] {
            return Err(RuleViolation::PawnBlocked.into());
        }

        self.pawns[self.current] = target;
        debug!(player = %self.current, %from, to = %target, "pawn moved");
        Ok(())
    }

    fn place_wall(&mut self, orientation: Orientation, row: i64, col: i64) -> Result<(), MoveError> {
        if self.walls_left[self.current] == 0 {
            return Err(RuleViolation::NoWallsLeft.into());
        }

        let limit = (N - 1) as i64;
        if !(1..=limit).contains(&row) || !(1..=limit).contains(&col) {
            let what = match orientation {
                Orientation::Horizontal => "Horizontal wall",
                Orientation::Vertical => "Vertical wall",
            };
            return Err(RangeError::Coordinates {
                what,
                row,
                col,
                max_row: N - 1,
                max_col: N - 1,
            }
            .into());
        }
        let (r, c) = ((row - 1) as usize, (col - 1) as usize);

        let (slots, crossing) = match orientation {
            Orientation::Horizontal => (
                [r * N + c, r * N + c + 1],
                self.wall_at(Orientation::Vertical, r, c) && self.wall_at(Orientation::Vertical, r + 1, c),
            ),
            Orientation::Vertical => (
                [r * (N - 1) + c, (r + 1) * (N - 1) + c],
                self.wall_at(Orientation::Horizontal, r, c) && self.wall_at(Orientation::Horizontal, r, c + 1),
            ),
        };
        let map = match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        };

        if slots.iter().any(|&slot| map[slot]) {
            return Err(RuleViolation::WallOverlap.into());
        }
        if crossing {
            return Err(RuleViolation::WallCrossing.into());
        }

        for slot in slots {
            map[slot] = true;
        }
        self.walls_left[self.current] -= 1;
        debug!(
            player = %self.current,
            %orientation,
            row,
            col,
            remaining = self.walls_left[self.current],
            "wall placed"
        );

        for player in PlayerId::all(2) {
            if !self.has_path_to_goal(player) {
                warn!(%player, "wall leaves no path to the goal row");
            }
        }
        Ok(())
    }
}

impl Game for Quoridor {
    type Move = QuoridorMove;

    fn initialize(&mut self) {
        self.pawns = self.start.clone();
        self.walls_left = PlayerMap::with_value(2, self.walls_per_player);
        self.horizontal = vec![false; (N - 1) * N];
        self.vertical = vec![false; N * (N - 1)];
        self.current = PlayerId::FIRST;
        self.status = match self.winner() {
            Some(_) => GameStatus::Won,
            None => GameStatus::Active,
        };
    }

    fn apply_move(&mut self, mv: QuoridorMove) -> Result<MoveOutcome, MoveError> {
        if !self.is_active() {
            return Err(RuleViolation::GameOver.into());
        }

        match mv {
            QuoridorMove::Step(direction) => self.step_pawn(direction)?,
            QuoridorMove::Wall {
                orientation,
                row,
                col,
            } => self.place_wall(orientation, row, col)?,
        }

        if let Some(winner) = self.winner() {
            self.status = GameStatus::Won;
            info!(%winner, name = %self.names[winner], "goal reached");
        } else {
            self.current = self.current.other();
        }
        Ok(MoveOutcome::Continue)
    }

    fn quit(&mut self) {
        if self.status == GameStatus::Active {
            self.status = GameStatus::Quit;
            info!("quoridor abandoned");
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn is_won(&self) -> bool {
        self.winner().is_some()
    }

    fn grid(&self) -> Grid {
        self.grid
    }

    fn cell_views(&self) -> Vec<Vec<CellView>> {
        let labels = PlayerMap::new(2, |p| player_label(&self.names[p]).to_string());
        (0..N)
            .map(|r| {
                (0..N)
                    .map(|c| {
                        let pos = Position::new(r, c);
                        let center = PlayerId::all(2)
                            .find(|&p| self.pawns[p] == pos)
                            .map_or_else(|| " ".to_string(), |p| labels[p].clone());
                        CellView::empty().with_center(center).with_edges(
                            r > 0 && self.wall_at(Orientation::Horizontal, r - 1, c),
                            self.wall_at(Orientation::Horizontal, r, c),
                            c > 0 && self.wall_at(Orientation::Vertical, r, c - 1),
                            self.wall_at(Orientation::Vertical, r, c),
                        )
                    })
                    .collect()
            })
            .collect()
    }

    fn result(&self) -> Option<GameResult> {
        self.winner().map(GameResult::Winner)
    }

    fn victory_message(&self) -> String {
        let winner = self.winner().unwrap_or(PlayerId::SECOND);
        format!(
            "\nGame Over! Congratulations {}, you reached the goal!",
            self.names[winner]
        )
    }

    fn summary(&self) -> String {
        let [first, second] = [PlayerId::FIRST, PlayerId::SECOND].map(|p| {
            let pos = self.pawns[p];
            format!("{} at ({}, {})", self.names[p], pos.row + 1, pos.col + 1)
        });
        format!("Game ended prematurely. Final positions:\n{first}\n{second}")
    }

    fn move_prompt(&self) -> String {
        format!(
            "{} to move (M U/D/L/R | H/V r c | q): ",
            self.names[self.current]
        )
    }

    fn status_lines(&self) -> Vec<String> {
        let describe = |p: PlayerId| {
            format!(
                "{} ({}): {}",
                self.names[p],
                player_label(&self.names[p]),
                self.walls_left[p]
            )
        };
        vec![
            "\nWalls Remaining:".to_string(),
            format!("{} | {}", describe(PlayerId::FIRST), describe(PlayerId::SECOND)),
            format!("It is {}'s turn.", self.names[self.current]),
        ]
    }

    fn instructions(&self) -> Vec<String> {
        vec![
            format!("\nQuoridor ({N}x{N}) Instructions:"),
            "Move Pawn: M [U/D/L/R] → Move your pawn one square: Up, Down, Left, or Right.".to_string(),
            "Wall (1-indexed): H r c   → Place horizontal wall starting at (r, c) (spans c and c+1)".to_string(),
            "Wall (1-indexed): V r c   → Place vertical wall starting at (r, c) (spans r and r+1)".to_string(),
            "Q                 → Quit".to_string(),
        ]
    }
}
