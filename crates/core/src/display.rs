#![allow(missing_docs)]

//! Read-only display data shown beside the board.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Past game listed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub name: String,
    pub date: NaiveDate,
}

impl HistoryEntry {
    /// Date formatted for the sidebar.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// A titled block of commentary text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    pub title: String,
    pub body: String,
}

/// Commentary panels flanking the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentaryPanels {
    pub black: Commentary,
    pub white: Commentary,
}

impl Default for CommentaryPanels {
    fn default() -> Self {
        (*DEFAULT_COMMENTARY).clone()
    }
}

static DEFAULT_HISTORY: Lazy<Vec<HistoryEntry>> = Lazy::new(|| {
    [(1, "Game 1", (2023, 5, 1)), (2, "Game 2", (2023, 5, 5)), (3, "Game 3", (2023, 5, 10))]
        .into_iter()
        .filter_map(|(id, name, (y, m, d))| {
            Some(HistoryEntry {
                id,
                name: name.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
            })
        })
        .collect()
});

static DEFAULT_COMMENTARY: Lazy<CommentaryPanels> = Lazy::new(|| CommentaryPanels {
    black: Commentary {
        title: "Black's Commentary".to_string(),
        body: "The AI suggests that Black should focus on strengthening the bottom right corner..."
            .to_string(),
    },
    white: Commentary {
        title: "White's Commentary".to_string(),
        body: "The AI recommends that White consider a more aggressive approach in the top left quadrant..."
            .to_string(),
    },
});

/// Placeholder history list.
pub fn default_history() -> Vec<HistoryEntry> {
    (*DEFAULT_HISTORY).clone()
}
