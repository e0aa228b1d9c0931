//! Dots and Boxes implementation.

use std::str::FromStr;

use tracing::{debug, info};

use crate::board::{CellView, Grid, Position};
use crate::core::{player_label, DimensionError, FormatError, MoveError, PlayerId, PlayerMap, RangeError, RuleViolation};
use crate::games::notation::{parse_oriented_coordinates, tokenize, Orientation};
use crate::rules::{Game, GameResult, GameStatus, MoveOutcome};

const EDGE_USAGE: &str = "H r c | V r c";

/// An edge as typed: orientation plus 1-indexed row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeMove {
    pub orientation: Orientation,
    pub row: i64,
    pub col: i64,
}

impl EdgeMove {
    #[must_use]
    pub const fn new(orientation: Orientation, row: i64, col: i64) -> Self {
        Self {
            orientation,
            row,
            col,
        }
    }
}

impl FromStr for EdgeMove {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s);
        if tokens.is_empty() {
            return Err(FormatError::Empty);
        }
        let (orientation, row, col) = parse_oriented_coordinates(&tokens, "Edge", EDGE_USAGE)?;
        Ok(Self::new(orientation, row, col))
    }
}

impl std::fmt::Display for EdgeMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.orientation, self.row, self.col)
    }
}

/// Dots and Boxes on a `rows × columns` grid of boxes.
///
/// ## Edge layout
///
/// - Horizontal edges: `(rows + 1) × columns`; edge `(r, c)` is the top of
///   box `(r, c)` and the bottom of box `(r - 1, c)`.
/// - Vertical edges: `rows × (columns + 1)`; edge `(r, c)` is the left of
///   box `(r, c)` and the right of box `(r, c - 1)`.
#[derive(Clone, Debug)]
pub struct DotsAndBoxes {
    grid: Grid,
    horizontal: Vec<Option<PlayerId>>,
    vertical: Vec<Option<PlayerId>>,
    boxes: Vec<Option<PlayerId>>,
    scores: PlayerMap<u32>,
    names: PlayerMap<String>,
    current: PlayerId,
    status: GameStatus,
}

/// Builder for creating a DotsAndBoxes game.
pub struct DotsAndBoxesBuilder {
    rows: i64,
    columns: i64,
    names: [String; 2],
}

impl Default for DotsAndBoxesBuilder {
    fn default() -> Self {
        Self {
            rows: 2,
            columns: 2,
            names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

impl DotsAndBoxesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of boxes.
    pub fn rows(mut self, rows: i64) -> Self {
        self.rows = rows;
        self
    }

    /// Columns of boxes.
    pub fn columns(mut self, columns: i64) -> Self {
        self.columns = columns;
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    pub fn build(self) -> Result<DotsAndBoxes, DimensionError> {
        let grid = Grid::new(self.rows, self.columns)?;
        let [first, second] = self.names;
        let names = PlayerMap::new(2, |p| if p == PlayerId::FIRST { first.clone() } else { second.clone() });

        let mut game = DotsAndBoxes {
            grid,
            horizontal: Vec::new(),
            vertical: Vec::new(),
            boxes: Vec::new(),
            scores: PlayerMap::with_default(2),
            names,
            current: PlayerId::FIRST,
            status: GameStatus::Active,
        };
        game.initialize();
        Ok(game)
    }
}

impl DotsAndBoxes {
    /// Start a builder.
    pub fn builder() -> DotsAndBoxesBuilder {
        DotsAndBoxesBuilder::new()
    }

    /// Player to move.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Boxes owned by `player`.
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    /// Owner of an edge, 0-indexed. `None` if unclaimed or off the board.
    pub fn edge_owner(&self, orientation: Orientation, row: usize, col: usize) -> Option<PlayerId> {
        self.edge_index(orientation, row, col)
            .and_then(|i| self.edges(orientation)[i])
    }

    /// Owner of a box. `None` if unclaimed or off the board.
    pub fn box_owner(&self, pos: Position) -> Option<PlayerId> {
        self.grid
            .is_valid_position(pos.row as isize, pos.col as isize)
            .then(|| self.boxes[self.grid.index(pos)])
            .flatten()
    }

    /// Boxes owned by anyone.
    pub fn owned_boxes(&self) -> usize {
        self.boxes.iter().filter(|b| b.is_some()).count()
    }

    /// `(rows, columns)` of the edge map for `orientation`.
    pub fn edge_dimensions(&self, orientation: Orientation) -> (usize, usize) {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        match orientation {
            Orientation::Horizontal => (rows + 1, columns),
            Orientation::Vertical => (rows, columns + 1),
        }
    }

    fn edges(&self, orientation: Orientation) -> &[Option<PlayerId>] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn edges_mut(&mut self, orientation: Orientation) -> &mut [Option<PlayerId>] {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    fn edge_index(&self, orientation: Orientation, row: usize, col: usize) -> Option<usize> {
        let (rows, columns) = self.edge_dimensions(orientation);
        (row < rows && col < columns).then_some(row * columns + col)
    }

    /// Map a typed (1-indexed) edge to its slot, or report it off the board.
    fn locate_edge(&self, mv: EdgeMove) -> Result<(usize, usize, usize), RangeError> {
        let (rows, columns) = self.edge_dimensions(mv.orientation);
        let in_range = (1..=rows as i64).contains(&mv.row) && (1..=columns as i64).contains(&mv.col);
        if !in_range {
            let what = match mv.orientation {
                Orientation::Horizontal => "Horizontal edge",
                Orientation::Vertical => "Vertical edge",
            };
            return Err(RangeError::Coordinates {
                what,
                row: mv.row,
                col: mv.col,
                max_row: rows,
                max_col: columns,
            });
        }
        let (row, col) = ((mv.row - 1) as usize, (mv.col - 1) as usize);
        Ok((row, col, row * columns + col))
    }

    /// Boxes bordered by an edge: one on the boundary, two inside.
    fn adjacent_boxes(&self, orientation: Orientation, row: usize, col: usize) -> [Option<Position>; 2] {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        match orientation {
            Orientation::Horizontal => [
                (row > 0).then(|| Position::new(row - 1, col)),
                (row < rows).then(|| Position::new(row, col)),
            ],
            Orientation::Vertical => [
                (col > 0).then(|| Position::new(row, col - 1)),
                (col < columns).then(|| Position::new(row, col)),
            ],
        }
    }

    fn is_enclosed(&self, pos: Position) -> bool {
        let columns = self.grid.columns();
        let top = self.horizontal[pos.row * columns + pos.col];
        let bottom = self.horizontal[(pos.row + 1) * columns + pos.col];
        let left = self.vertical[pos.row * (columns + 1) + pos.col];
        let right = self.vertical[pos.row * (columns + 1) + pos.col + 1];
        top.is_some() && bottom.is_some() && left.is_some() && right.is_some()
    }

    /// Give `pos` to `player` if it is unowned and now enclosed.
    fn try_close_box(&mut self, pos: Position, player: PlayerId) -> bool {
        let index = self.grid.index(pos);
        if self.boxes[index].is_some() || !self.is_enclosed(pos) {
            return false;
        }
        self.boxes[index] = Some(player);
        true
    }

    fn score_line(&self) -> String {
        format!(
            "Scores -> {}: {} | {}: {}",
            self.names[PlayerId::FIRST],
            self.scores[PlayerId::FIRST],
            self.names[PlayerId::SECOND],
            self.scores[PlayerId::SECOND],
        )
    }
}

impl Game for DotsAndBoxes {
    type Move = EdgeMove;

    fn initialize(&mut self) {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        self.horizontal = vec![None; (rows + 1) * columns];
        self.vertical = vec![None; rows * (columns + 1)];
        self.boxes = vec![None; rows * columns];
        self.scores = PlayerMap::with_default(2);
        self.current = PlayerId::FIRST;
        self.status = GameStatus::Active;
    }

    fn apply_move(&mut self, mv: EdgeMove) -> Result<MoveOutcome, MoveError> {
        if !self.is_active() {
            return Err(RuleViolation::GameOver.into());
        }

        let (row, col, index) = self.locate_edge(mv)?;
        if self.edges(mv.orientation)[index].is_some() {
            return Err(RuleViolation::EdgeClaimed.into());
        }

        let player = self.current;
        self.edges_mut(mv.orientation)[index] = Some(player);

        let closed = self
            .adjacent_boxes(mv.orientation, row, col)
            .into_iter()
            .flatten()
            .filter(|&pos| self.try_close_box(pos, player))
            .count();

        debug!(%player, edge = %mv, closed, "edge claimed");

        let outcome = if closed > 0 {
            self.scores[player] += closed as u32;
            MoveOutcome::ExtraTurn { closed }
        } else {
            self.current = player.other();
            MoveOutcome::Continue
        };

        if self.boxes.iter().all(Option::is_some) {
            self.status = GameStatus::Won;
            info!(
                first = self.scores[PlayerId::FIRST],
                second = self.scores[PlayerId::SECOND],
                "all boxes claimed"
            );
        }
        Ok(outcome)
    }

    fn quit(&mut self) {
        if self.status == GameStatus::Active {
            self.status = GameStatus::Quit;
            info!(owned = self.owned_boxes(), "dots and boxes abandoned");
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn is_won(&self) -> bool {
        self.boxes.iter().all(Option::is_some)
    }

    fn grid(&self) -> Grid {
        self.grid
    }

    fn cell_views(&self) -> Vec<Vec<CellView>> {
        let columns = self.grid.columns();
        (0..self.grid.rows())
            .map(|r| {
                (0..columns)
                    .map(|c| {
                        let center = match self.boxes[r * columns + c] {
                            Some(owner) => player_label(&self.names[owner]).to_string(),
                            None => " ".to_string(),
                        };
                        CellView::empty().with_center(center).with_edges(
                            self.horizontal[r * columns + c].is_some(),
                            self.horizontal[(r + 1) * columns + c].is_some(),
                            self.vertical[r * (columns + 1) + c].is_some(),
                            self.vertical[r * (columns + 1) + c + 1].is_some(),
                        )
                    })
                    .collect()
            })
            .collect()
    }

    fn result(&self) -> Option<GameResult> {
        if !self.is_won() {
            return None;
        }
        let (first, second) = (self.scores[PlayerId::FIRST], self.scores[PlayerId::SECOND]);
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    fn victory_message(&self) -> String {
        match self.result() {
            Some(GameResult::Winner(p)) => format!("Congratulations {}, you win!", self.names[p]),
            _ => "It's a tie!".to_string(),
        }
    }

    fn summary(&self) -> String {
        let (first, second) = (self.scores[PlayerId::FIRST], self.scores[PlayerId::SECOND]);
        let verdict = match first.cmp(&second) {
            std::cmp::Ordering::Greater => format!("{} wins!", self.names[PlayerId::FIRST]),
            std::cmp::Ordering::Less => format!("{} wins!", self.names[PlayerId::SECOND]),
            std::cmp::Ordering::Equal => "It's a tie!".to_string(),
        };
        format!(
            "Final score: {}: {} | {}: {}\n{}",
            self.names[PlayerId::FIRST],
            first,
            self.names[PlayerId::SECOND],
            second,
            verdict
        )
    }

    fn move_prompt(&self) -> String {
        format!("{} to move. Edge ({} | q): ", self.names[self.current], EDGE_USAGE)
    }

    fn status_lines(&self) -> Vec<String> {
        vec![self.score_line()]
    }

    fn instructions(&self) -> Vec<String> {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        vec![
            "\nInput format (1-indexed):".to_string(),
            format!(
                "H r c   → horizontal edge at row r, col c   (r∈[1,{}], c∈[1,{}])",
                rows + 1,
                columns
            ),
            format!(
                "V r c   → vertical edge   at row r, col c   (r∈[1,{}], c∈[1,{}])",
                rows,
                columns + 1
            ),
        ]
    }
}
