//! Editing session combining the board, the active tool and the label cursor.

use tracing::debug;

use crate::{
    board::{Board, BoardError, Cell},
    label::LabelCursor,
    tool::{Tool, ToolSelector},
};

/// Owns the editable state and applies cell activations atomically.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    board: Board,
    tools: ToolSelector,
    labels: LabelCursor,
}

impl Editor {
    /// Empty board, black stone tool, label cursor at `A`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current board value.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at the given coordinate on the current board.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        self.board.cell_at(row, col)
    }

    /// Tool applied by the next activation.
    pub fn current_tool(&self) -> Tool {
        self.tools.current_tool()
    }

    /// Select the tool for subsequent activations.
    pub fn set_tool(&mut self, tool: Tool) {
        debug!(tool = tool.name(), "tool selected");
        self.tools.set_tool(tool);
    }

    /// Next label a letter or number placement will stamp.
    pub fn label_cursor(&self) -> &str {
        self.labels.current()
    }

    /// Apply the active tool at `(row, col)`.
    ///
    /// Letter and number placements stamp the current label and advance the
    /// cursor in the same step. On error neither the board nor the cursor change.
    pub fn activate(&mut self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        let tool = self.tools.current_tool();
        let board = self.board.place_at(row, col, tool, self.labels.current())?;
        if let Some(kind) = tool.label_kind() {
            debug!(row, col, label = self.labels.current(), "label stamped");
            self.labels.advance(kind);
        } else {
            debug!(row, col, tool = tool.name(), "cell painted");
        }
        self.board = board;
        self.board.cell_at(row, col)
    }
}
