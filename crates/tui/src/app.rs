use std::{io, thread, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use goban_core::{
    AppConfig, Commentary, CommentaryPanels, Editor, HistoryEntry, Tool, BOARD_SIZE,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::board_view::{self, BoardPalette, GRID_HEIGHT, GRID_WIDTH};

const TICK_RATE: Duration = Duration::from_millis(250);
const SIDEBAR_WIDTH: u16 = 30;
const COMMENTARY_HEIGHT: u16 = 10;
const TOOLBAR_HEIGHT: u16 = 4;
const STATUS_HEIGHT: u16 = 4;

#[derive(Debug, Clone)]
struct Theme {
    accent: Color,
    muted: Color,
    selection_bg: Color,
    selection_fg: Color,
    danger: Color,
    board: BoardPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            danger: Color::Red,
            board: BoardPalette::default(),
        }
    }
}

enum AppEvent {
    Input(Event),
    Tick,
}

/// Terminal frontend for the board editor.
pub struct GobanApp {
    editor: Editor,
    history: Vec<HistoryEntry>,
    commentary: CommentaryPanels,
    cursor: (usize, usize),
    grid_area: Option<Rect>,
    status: String,
    status_is_error: bool,
    should_quit: bool,
    theme: Theme,
}

impl GobanApp {
    pub fn new(config: AppConfig) -> Self {
        let center = BOARD_SIZE / 2;
        Self {
            editor: Editor::new(),
            history: config.history,
            commentary: config.commentary,
            cursor: (center, center),
            grid_area: None,
            status: "Ready".to_string(),
            status_is_error: false,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(128);
        spawn_input_thread(event_tx);
        info!("editor started");

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.should_quit {
                break;
            }
            match event_rx.recv().await {
                Some(AppEvent::Input(event)) => {
                    if let Err(err) = self.handle_input(event) {
                        error!(?err, "input rejected");
                        self.set_error(format!("Error: {err}"));
                    }
                }
                Some(AppEvent::Tick) => {}
                None => break,
            }
        }

        restore_terminal(&mut terminal)?;
        info!("editor closed");
        Ok(())
    }

    fn handle_input(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => Ok(()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, col) = self.cursor;
                self.activate(row, col)?;
            }
            KeyCode::Tab => self.select_tool(self.editor.current_tool().next()),
            KeyCode::BackTab => self.select_tool(self.editor.current_tool().previous()),
            KeyCode::Char(ch) => {
                if let Some(tool) = Tool::from_shortcut(ch) {
                    self.select_tool(tool);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        let Some(area) = self.grid_area else {
            return Ok(());
        };
        if let Some((row, col)) = board_view::intersection_at(area, mouse.column, mouse.row) {
            self.cursor = (row, col);
            self.activate(row, col)?;
        }
        Ok(())
    }

    fn move_cursor(&mut self, delta_row: isize, delta_col: isize) {
        let max = BOARD_SIZE as isize - 1;
        let row = (self.cursor.0 as isize + delta_row).clamp(0, max) as usize;
        let col = (self.cursor.1 as isize + delta_col).clamp(0, max) as usize;
        self.cursor = (row, col);
    }

    fn select_tool(&mut self, tool: Tool) {
        self.editor.set_tool(tool);
        self.set_status(format!("Tool: {}", tool.name()));
    }

    fn activate(&mut self, row: usize, col: usize) -> Result<()> {
        let tool = self.editor.current_tool();
        let cell = self.editor.activate(row, col)?;
        let label = match (tool.label_kind(), cell.label.as_deref()) {
            (Some(_), Some(label)) => format!(" \"{label}\""),
            _ => String::new(),
        };
        let message = format!(
            "{}{label} at {}",
            tool.name(),
            board_view::coordinate_label(row, col)
        );
        self.set_status(message);
        Ok(())
    }

    fn set_status(&mut self, message: String) {
        self.status = message;
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: String) {
        self.status = message;
        self.status_is_error = true;
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(area);
        let board_height = columns[1].height.saturating_sub(TOOLBAR_HEIGHT + STATUS_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(board_height),
                Constraint::Length(TOOLBAR_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(columns[1]);
        let side_width = rows[0].width.saturating_sub(GRID_WIDTH + 2) / 2;
        let board_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(side_width),
                Constraint::Length(GRID_WIDTH + 2),
                Constraint::Min(0),
            ])
            .split(rows[0]);

        self.render_history(frame, columns[0]);
        self.render_commentary(frame, board_row[0], &self.commentary.black);
        self.render_board(frame, board_row[1]);
        self.render_commentary(frame, board_row[2], &self.commentary.white);
        self.render_toolbar(frame, rows[1]);
        self.render_status(frame, rows[2]);
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Go History");
        let thumbnail_style = Style::default()
            .fg(self.theme.board.line)
            .bg(self.theme.board.wood);
        let mut lines = Vec::new();
        for entry in &self.history {
            for (index, grid) in board_view::thumbnail_lines().into_iter().enumerate() {
                let caption = match index {
                    1 => Span::styled(
                        entry.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    2 => Span::styled(entry.date_label(), Style::default().fg(self.theme.muted)),
                    _ => Span::raw(""),
                };
                lines.push(Line::from(vec![
                    Span::styled(grid, thumbnail_style),
                    Span::raw("  "),
                    caption,
                ]));
            }
            lines.push(Line::from(""));
        }
        if self.history.is_empty() {
            lines.push(Line::from(Span::styled(
                "No games recorded",
                Style::default().fg(self.theme.muted),
            )));
        }
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_commentary(&self, frame: &mut Frame, area: Rect, commentary: &Commentary) {
        let area = centered_rect(area.width, COMMENTARY_HEIGHT, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                commentary.title.clone(),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let paragraph = Paragraph::new(commentary.body.clone())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_board(&mut self, frame: &mut Frame, area: Rect) {
        let area = centered_rect(GRID_WIDTH + 2, GRID_HEIGHT + 2, area);
        let (row, col) = self.cursor;
        let title = format!("Board · {}", board_view::coordinate_label(row, col));
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(
                Style::default()
                    .bg(self.theme.board.wood)
                    .fg(self.theme.board.line),
            );
        let inner = block.inner(area);
        self.grid_area = Some(inner);

        let lines =
            board_view::board_lines(self.editor.board(), Some(self.cursor), &self.theme.board);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_toolbar(&self, frame: &mut Frame, area: Rect) {
        let current = self.editor.current_tool();
        let mut spans = Vec::new();
        for (index, tool) in Tool::ALL.into_iter().enumerate() {
            let style = if tool == current {
                Style::default()
                    .fg(self.theme.selection_fg)
                    .bg(self.theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(
                format!(" {}:{} {} ", index + 1, board_view::tool_icon(tool), tool.name()),
                style,
            ));
        }
        let next_label = Line::from(Span::styled(
            format!("Next label: {}", self.editor.label_cursor()),
            Style::default().fg(self.theme.accent),
        ));
        let paragraph = Paragraph::new(vec![Line::from(spans), next_label])
            .block(Block::default().borders(Borders::ALL).title("Tools"))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Status");
        let primary = if self.status_is_error {
            Line::from(Span::styled(
                self.status.clone(),
                Style::default().fg(self.theme.danger),
            ))
        } else {
            Line::from(self.status.clone())
        };
        let shortcuts = Tool::ALL
            .into_iter()
            .map(|tool| format!("{} {}", tool.shortcut(), tool.name().to_lowercase()))
            .collect::<Vec<_>>()
            .join(" · ");
        let secondary = Line::from(Span::styled(
            format!("arrows/hjkl move · enter/space place · click place · {shortcuts} · q quit"),
            Style::default().fg(self.theme.muted),
        ));
        let paragraph = Paragraph::new(vec![primary, secondary])
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        match event::poll(TICK_RATE) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if sender.blocking_send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
