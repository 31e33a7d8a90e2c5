#![warn(clippy::all, missing_docs)]

//! Core model for the goban editor.
//!
//! This crate hosts the copy-on-write board, the painting tools, the
//! auto-label cursor and the editor that ties them together, plus the
//! static display data and configuration consumed by the terminal UI.

pub mod board;
pub mod config;
pub mod display;
pub mod editor;
pub mod label;
pub mod tool;

pub use board::{Board, BoardError, Cell, Marker, Stone, BOARD_SIZE};
pub use crate::config::AppConfig;
pub use display::{Commentary, CommentaryPanels, HistoryEntry};
pub use editor::Editor;
pub use label::{LabelCursor, LabelKind};
pub use tool::{Tool, ToolSelector};
