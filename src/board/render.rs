//! Text rendering of a grid of `CellView`s.
//!
//! A `rows × columns` view grid becomes `2 * rows + 1` lines:
//!
//! ```text
//! +---+---+      border: top edges of row 0
//! | 1   2 |      content: left edges, centers, last right edge
//! +   +---+      border: top edges of row 1
//! | 3 |   |
//! +---+---+      final border: bottom edges of the last row
//! ```

use super::cell::CellView;
use super::grid::Grid;

/// Width of every cell's content area.
pub const CELL_WIDTH: usize = 3;

/// Returned in place of a board when the views do not fit the grid.
pub const INVALID_GRID_MESSAGE: &str = "Error: Invalid display grid provided to Board.";

/// Renders view grids of one fixed shape.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    grid: Grid,
}

impl Renderer {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Render `views` (row-major, `views[r][c]`).
    ///
    /// An empty grid or a shape mismatch yields the single line
    /// `INVALID_GRID_MESSAGE` instead of an error: this is a display path.
    #[must_use]
    pub fn render(&self, views: &[Vec<CellView>]) -> Vec<String> {
        let rows = self.grid.rows();
        let columns = self.grid.columns();

        if columns == 0 || views.len() != rows || views.iter().any(|row| row.len() != columns) {
            return vec![INVALID_GRID_MESSAGE.to_string()];
        }
        let Some(last) = views.last() else {
            return vec![INVALID_GRID_MESSAGE.to_string()];
        };

        let mut lines = Vec::with_capacity(rows * 2 + 1);
        for row in views {
            lines.push(border_line(row.iter().map(|v| v.top)));
            lines.push(content_line(row));
        }
        lines.push(border_line(last.iter().map(|v| v.bottom)));
        lines
    }
}

fn border_line(edges: impl Iterator<Item = bool>) -> String {
    let mut line = String::from("+");
    for drawn in edges {
        let fill = if drawn { '-' } else { ' ' };
        line.extend(std::iter::repeat(fill).take(CELL_WIDTH));
        line.push('+');
    }
    line
}

fn content_line(row: &[CellView]) -> String {
    let mut line = String::new();
    for view in row {
        line.push(edge_char(view.left));
        line.push_str(&format!("{:^width$}", view.center, width = CELL_WIDTH));
    }
    if let Some(last) = row.last() {
        line.push(edge_char(last.right));
    }
    line
}

fn edge_char(drawn: bool) -> char {
    if drawn {
        '|'
    } else {
        ' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_single_cell() {
        let grid = Grid::new(1, 1).unwrap();
        let lines = Renderer::new(grid).render(&[vec![CellView::boxed("5")]]);
        assert_eq!(lines, vec!["+---+", "| 5 |", "+---+"]);
    }

    #[test]
    fn test_open_cells() {
        let grid = Grid::new(1, 2).unwrap();
        let lines = Renderer::new(grid).render(&[vec![CellView::empty(), CellView::empty()]]);
        assert_eq!(lines, vec!["+   +   +", "         ", "+   +   +"]);
    }

    #[test]
    fn test_line_count_and_width() {
        let grid = Grid::new(3, 4).unwrap();
        let views = vec![vec![CellView::boxed("x"); 4]; 3];
        let lines = Renderer::new(grid).render(&views);

        assert_eq!(lines.len(), 7);
        for line in &lines {
            assert_eq!(line.chars().count(), 4 * (CELL_WIDTH + 1) + 1);
        }
    }

    #[test]
    fn test_two_digit_center_keeps_width() {
        let grid = Grid::new(1, 1).unwrap();
        let lines = Renderer::new(grid).render(&[vec![CellView::boxed("10")]]);
        assert_eq!(lines[1], "|10 |");
    }

    #[test]
    fn test_mismatched_views() {
        let grid = Grid::new(2, 2).unwrap();
        let renderer = Renderer::new(grid);

        assert_eq!(renderer.render(&[]), vec![INVALID_GRID_MESSAGE]);
        assert_eq!(
            renderer.render(&[vec![CellView::empty(); 2], vec![CellView::empty(); 3]]),
            vec![INVALID_GRID_MESSAGE]
        );
    }

    #[test]
    fn test_empty_grid_soft_fails() {
        assert_eq!(Renderer::new(Grid::fixed(0, 3)).render(&[]), vec![INVALID_GRID_MESSAGE]);
        assert_eq!(
            Renderer::new(Grid::fixed(2, 0)).render(&[Vec::new(), Vec::new()]),
            vec![INVALID_GRID_MESSAGE]
        );
    }
}
