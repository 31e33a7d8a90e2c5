use goban_core::{
    board::{is_star_point, Board, Cell, Stone, BOARD_SIZE},
    Tool,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal columns used per intersection: the glyph and the line to its right.
pub const CELL_WIDTH: u16 = 2;
/// Width of the rendered grid without borders.
pub const GRID_WIDTH: u16 = BOARD_SIZE as u16 * CELL_WIDTH - 1;
/// Height of the rendered grid without borders.
pub const GRID_HEIGHT: u16 = BOARD_SIZE as u16;

const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNOPQRST";
const THUMBNAIL_LINES: usize = 5;
const OVERFLOW_GLYPH: char = '…';

/// Colours used to paint the board.
#[derive(Debug, Clone)]
pub struct BoardPalette {
    pub wood: Color,
    pub line: Color,
    pub black_stone: Color,
    pub white_stone: Color,
    pub marker: Color,
}

impl Default for BoardPalette {
    fn default() -> Self {
        Self {
            wood: Color::Rgb(222, 184, 135),
            line: Color::Rgb(40, 30, 20),
            black_stone: Color::Rgb(20, 20, 20),
            white_stone: Color::Rgb(245, 245, 245),
            marker: Color::Rgb(150, 20, 20),
        }
    }
}

/// Render the board as one line per row, highlighting `cursor`.
pub fn board_lines(
    board: &Board,
    cursor: Option<(usize, usize)>,
    palette: &BoardPalette,
) -> Vec<Line<'static>> {
    board
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            let mut spans = Vec::with_capacity(BOARD_SIZE * 2);
            let mut skip_connector = false;
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    if skip_connector {
                        skip_connector = false;
                    } else {
                        spans.push(Span::styled(
                            "─",
                            Style::default().fg(palette.line).bg(palette.wood),
                        ));
                    }
                }
                let (text, mut style) = intersection(row, col, cell, palette);
                if text.chars().count() > 1 {
                    skip_connector = true;
                }
                if cursor == Some((row, col)) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(text, style));
            }
            Line::from(spans)
        })
        .collect()
}

fn intersection(row: usize, col: usize, cell: &Cell, palette: &BoardPalette) -> (String, Style) {
    let stone_color = match cell.stone {
        Stone::Black => Some(palette.black_stone),
        Stone::White => Some(palette.white_stone),
        Stone::None => None,
    };

    if let Some(text) = cell.marker_text() {
        // The last column has no connector slot to spill into.
        let room = if col + 1 == BOARD_SIZE {
            1
        } else {
            usize::from(CELL_WIDTH)
        };
        let text = fit_label(text, room);
        let style = match stone_color {
            Some(color) => Style::default()
                .fg(contrast_color(&color, Color::Black))
                .bg(color)
                .add_modifier(Modifier::BOLD),
            None => Style::default()
                .fg(palette.marker)
                .bg(palette.wood)
                .add_modifier(Modifier::BOLD),
        };
        return (text, style);
    }

    if let Some(color) = stone_color {
        return ("●".to_string(), Style::default().fg(color).bg(palette.wood));
    }

    (
        grid_glyph(row, col).to_string(),
        Style::default().fg(palette.line).bg(palette.wood),
    )
}

/// Clip `text` to `room` columns, ending in an ellipsis when anything was cut.
fn fit_label(text: &str, room: usize) -> String {
    if text.chars().count() <= room {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(room.saturating_sub(1)).collect();
    clipped.push(OVERFLOW_GLYPH);
    clipped
}

fn grid_glyph(row: usize, col: usize) -> char {
    let last = BOARD_SIZE - 1;
    match (row, col) {
        (0, 0) => '┌',
        (0, c) if c == last => '┐',
        (r, 0) if r == last => '└',
        (r, c) if r == last && c == last => '┘',
        (0, _) => '┬',
        (r, _) if r == last => '┴',
        (_, 0) => '├',
        (_, c) if c == last => '┤',
        (r, c) if is_star_point(r, c) => '╋',
        _ => '┼',
    }
}

/// Pick black or white text for legibility on `color`.
pub fn contrast_color(color: &Color, fallback: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let luminance =
                0.299 * f64::from(*r) + 0.587 * f64::from(*g) + 0.114 * f64::from(*b);
            if luminance > 186.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => fallback,
    }
}

/// Intersection under the terminal position `(x, y)` inside the grid `area`.
pub fn intersection_at(area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    if x < area.x || y < area.y {
        return None;
    }
    let (dx, dy) = (x - area.x, y - area.y);
    if dx >= area.width || dy >= area.height {
        return None;
    }
    let col = usize::from(dx / CELL_WIDTH);
    let row = usize::from(dy);
    (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
}

/// Conventional Go coordinate, e.g. `D16` for row 3, column 3.
pub fn coordinate_label(row: usize, col: usize) -> String {
    let letter = COLUMN_LETTERS.chars().nth(col).unwrap_or('?');
    format!("{letter}{}", BOARD_SIZE.saturating_sub(row))
}

/// Toolbar icon for a tool.
pub fn tool_icon(tool: Tool) -> &'static str {
    match tool {
        Tool::Black => "●",
        Tool::White => "○",
        Tool::Cross => "×",
        Tool::Triangle => "△",
        Tool::Square => "□",
        Tool::Circle => "◯",
        Tool::Letter => "A",
        Tool::Number => "#",
    }
}

/// Empty 5×5 grid shown next to history entries.
pub fn thumbnail_lines() -> [&'static str; THUMBNAIL_LINES] {
    ["┌┬┬┬┐", "├┼┼┼┤", "├┼┼┼┤", "├┼┼┼┤", "└┴┴┴┘"]
}
