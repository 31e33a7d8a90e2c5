//! Copy-on-write 19×19 board of stones and annotation markers.

use std::sync::Arc;

use thiserror::Error;

use crate::tool::Tool;

/// Number of lines in each direction.
pub const BOARD_SIZE: usize = 19;

/// Line indices of the nine star points (hoshi).
pub const STAR_LINES: [usize; 3] = [3, 9, 15];

/// Stone occupying an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stone {
    /// Empty intersection.
    #[default]
    None,
    /// Black stone.
    Black,
    /// White stone.
    White,
}

/// Annotation overlaid on an intersection, independent of the stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(missing_docs)]
pub enum Marker {
    #[default]
    None,
    Triangle,
    Square,
    Cross,
    Circle,
    Letter,
    Number,
}

impl Marker {
    /// Shape glyph for the marker. Letter and number markers draw their label instead.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Marker::Cross => Some("×"),
            Marker::Triangle => Some("△"),
            Marker::Square => Some("□"),
            Marker::Circle => Some("○"),
            Marker::None | Marker::Letter | Marker::Number => None,
        }
    }

    /// Whether the marker displays the cell label.
    pub fn is_label(self) -> bool {
        matches!(self, Marker::Letter | Marker::Number)
    }
}

/// State of a single intersection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// Stone layer.
    pub stone: Stone,
    /// Annotation layer.
    pub marker: Marker,
    /// Text stamped by the last letter or number marker.
    pub label: Option<String>,
}

impl Cell {
    /// True when neither a stone nor a marker is present.
    pub fn is_empty(&self) -> bool {
        self.stone == Stone::None && self.marker == Marker::None
    }

    /// Text to draw for the marker, if any.
    pub fn marker_text(&self) -> Option<&str> {
        if self.marker.is_label() {
            self.label.as_deref()
        } else {
            self.marker.glyph()
        }
    }

    fn apply(&mut self, tool: Tool, label: &str) {
        match tool {
            Tool::Black => self.stone = Stone::Black,
            Tool::White => self.stone = Stone::White,
            Tool::Letter | Tool::Number => {
                self.marker = tool.marker();
                self.label = Some(label.to_string());
            }
            // Any earlier label is left in place.
            Tool::Cross | Tool::Triangle | Tool::Square | Tool::Circle => {
                self.marker = tool.marker();
            }
        }
    }
}

type Row = [Cell; BOARD_SIZE];

/// Errors raised by board access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum BoardError {
    /// Row or column outside `0..BOARD_SIZE`.
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },
}

/// Immutable board value. Edits return a new board sharing every untouched row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Arc<Row>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with every cell cleared.
    pub fn new() -> Self {
        let rows = (0..BOARD_SIZE)
            .map(|_| Arc::new(std::array::from_fn(|_| Cell::default())))
            .collect();
        Self { rows }
    }

    /// Cell at the given coordinate.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        check_bounds(row, col)?;
        Ok(&self.rows[row][col])
    }

    /// Apply `tool` at the coordinate and return the resulting board.
    ///
    /// `label` is stamped on the cell only for letter and number tools. The
    /// receiver is left as it was; on `OutOfRange` no board is produced.
    pub fn place_at(
        &self,
        row: usize,
        col: usize,
        tool: Tool,
        label: &str,
    ) -> Result<Board, BoardError> {
        check_bounds(row, col)?;
        let mut rows = self.rows.clone();
        Arc::make_mut(&mut rows[row])[col].apply(tool, label);
        Ok(Board { rows })
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Whether two boards share storage for the given row.
    pub fn shares_row_with(&self, other: &Board, row: usize) -> bool {
        match (self.rows.get(row), other.rows.get(row)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of intersections holding a stone.
    pub fn stone_count(&self) -> usize {
        self.rows()
            .flatten()
            .filter(|cell| cell.stone != Stone::None)
            .count()
    }
}

/// True for the nine hoshi intersections.
pub fn is_star_point(row: usize, col: usize) -> bool {
    STAR_LINES.contains(&row) && STAR_LINES.contains(&col)
}

fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(BoardError::OutOfRange { row, col });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(board: &Board, row: usize, col: usize) -> Cell {
        board.cell_at(row, col).cloned().expect("coordinate in range")
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.rows().count(), BOARD_SIZE);
        assert!(board.rows().all(|row| row.len() == BOARD_SIZE));
        assert!(board.rows().flatten().all(Cell::is_empty));
        assert_eq!(cell(&board, 0, 0), Cell::default());
    }

    #[test]
    fn stones_leave_markers_untouched() -> Result<(), BoardError> {
        let board = Board::new()
            .place_at(4, 7, Tool::Letter, "Q")?
            .place_at(4, 7, Tool::Black, "ignored")?;
        let placed = cell(&board, 4, 7);
        assert_eq!(placed.stone, Stone::Black);
        assert_eq!(placed.marker, Marker::Letter);
        assert_eq!(placed.label.as_deref(), Some("Q"));

        let board = board.place_at(4, 7, Tool::White, "ignored")?;
        let placed = cell(&board, 4, 7);
        assert_eq!(placed.stone, Stone::White);
        assert_eq!(placed.marker, Marker::Letter);
        assert_eq!(placed.label.as_deref(), Some("Q"));
        Ok(())
    }

    #[test]
    fn last_marker_wins() -> Result<(), BoardError> {
        let board = Board::new()
            .place_at(2, 2, Tool::Cross, "A")?
            .place_at(2, 2, Tool::Triangle, "A")?;
        assert_eq!(cell(&board, 2, 2).marker, Marker::Triangle);
        assert_eq!(cell(&board, 2, 2).label, None);
        Ok(())
    }

    #[test]
    fn shape_marker_keeps_stale_label() -> Result<(), BoardError> {
        let board = Board::new()
            .place_at(1, 1, Tool::Number, "7")?
            .place_at(1, 1, Tool::Circle, "8")?;
        let placed = cell(&board, 1, 1);
        assert_eq!(placed.marker, Marker::Circle);
        assert_eq!(placed.label.as_deref(), Some("7"));
        assert_eq!(placed.marker_text(), Some("○"));
        Ok(())
    }

    #[test]
    fn stone_then_square_scenario() -> Result<(), BoardError> {
        let board = Board::new();
        assert_eq!(cell(&board, 0, 0).stone, Stone::None);
        assert_eq!(cell(&board, 0, 0).marker, Marker::None);

        let board = board.place_at(0, 0, Tool::Black, "A")?;
        assert_eq!(cell(&board, 0, 0).stone, Stone::Black);
        assert_eq!(cell(&board, 0, 0).marker, Marker::None);

        let board = board.place_at(0, 0, Tool::Square, "A")?;
        assert_eq!(cell(&board, 0, 0).stone, Stone::Black);
        assert_eq!(cell(&board, 0, 0).marker, Marker::Square);
        Ok(())
    }

    #[test]
    fn edits_do_not_alias_previous_board() -> Result<(), BoardError> {
        let before = Board::new().place_at(5, 4, Tool::White, "A")?;
        let after = before.place_at(5, 5, Tool::Black, "A")?;

        assert_eq!(cell(&before, 5, 5).stone, Stone::None);
        assert_eq!(cell(&after, 5, 5).stone, Stone::Black);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (row, col) != (5, 5) {
                    assert_eq!(cell(&before, row, col), cell(&after, row, col));
                }
            }
            assert_eq!(after.shares_row_with(&before, row), row != 5);
        }
        Ok(())
    }

    #[test]
    fn reads_are_stable() -> Result<(), BoardError> {
        let board = Board::new().place_at(18, 18, Tool::Square, "A")?;
        assert_eq!(board.cell_at(18, 18)?, board.cell_at(18, 18)?);
        Ok(())
    }

    #[test]
    fn out_of_range_is_rejected() {
        let board = Board::new();
        assert_eq!(
            board.place_at(19, 0, Tool::Black, "A"),
            Err(BoardError::OutOfRange { row: 19, col: 0 })
        );
        assert_eq!(
            board.cell_at(0, 42),
            Err(BoardError::OutOfRange { row: 0, col: 42 })
        );
        assert_eq!(board.stone_count(), 0);
    }

    #[test]
    fn star_points() {
        let stars: Vec<_> = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| is_star_point(row, col))
            .collect();
        assert_eq!(stars.len(), 9);
        assert!(stars.contains(&(9, 9)));
        assert!(!is_star_point(0, 0));
    }
}
