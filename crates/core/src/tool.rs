#![allow(missing_docs)]

//! Painting tools and the selector holding the active one.

use crate::{board::Marker, label::LabelKind};

/// Operation applied on the next cell activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Black,
    White,
    Cross,
    Triangle,
    Square,
    Circle,
    Letter,
    Number,
}

impl Tool {
    /// Toolbar order.
    pub const ALL: [Tool; 8] = [
        Tool::Black,
        Tool::White,
        Tool::Cross,
        Tool::Triangle,
        Tool::Square,
        Tool::Circle,
        Tool::Letter,
        Tool::Number,
    ];

    /// Human-readable tool name.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Black => "Black",
            Tool::White => "White",
            Tool::Cross => "Cross",
            Tool::Triangle => "Triangle",
            Tool::Square => "Square",
            Tool::Circle => "Circle",
            Tool::Letter => "Letter",
            Tool::Number => "Number",
        }
    }

    /// Keyboard shortcut selecting the tool.
    pub fn shortcut(self) -> char {
        match self {
            Tool::Black => 'b',
            Tool::White => 'w',
            Tool::Cross => 'x',
            Tool::Triangle => 't',
            Tool::Square => 's',
            Tool::Circle => 'c',
            Tool::Letter => 'a',
            Tool::Number => 'n',
        }
    }

    /// Tool bound to `ch`, either its letter shortcut or its 1-based toolbar slot.
    pub fn from_shortcut(ch: char) -> Option<Tool> {
        let ch = ch.to_ascii_lowercase();
        if let Some(slot) = ch.to_digit(10) {
            return (slot as usize)
                .checked_sub(1)
                .and_then(|index| Tool::ALL.get(index).copied());
        }
        Tool::ALL.into_iter().find(|tool| tool.shortcut() == ch)
    }

    /// Stones place on the stone layer, everything else is a marker.
    pub fn is_stone(self) -> bool {
        matches!(self, Tool::Black | Tool::White)
    }

    /// Marker painted by this tool; `Marker::None` for stones.
    pub fn marker(self) -> Marker {
        match self {
            Tool::Black | Tool::White => Marker::None,
            Tool::Cross => Marker::Cross,
            Tool::Triangle => Marker::Triangle,
            Tool::Square => Marker::Square,
            Tool::Circle => Marker::Circle,
            Tool::Letter => Marker::Letter,
            Tool::Number => Marker::Number,
        }
    }

    /// Label sequence consumed by this tool, if it stamps labels.
    pub fn label_kind(self) -> Option<LabelKind> {
        match self {
            Tool::Letter => Some(LabelKind::Letter),
            Tool::Number => Some(LabelKind::Number),
            _ => None,
        }
    }

    /// Next tool in toolbar order, wrapping around.
    pub fn next(self) -> Tool {
        let index = self.index();
        Tool::ALL[(index + 1) % Tool::ALL.len()]
    }

    /// Previous tool in toolbar order, wrapping around.
    pub fn previous(self) -> Tool {
        let index = self.index();
        Tool::ALL[(index + Tool::ALL.len() - 1) % Tool::ALL.len()]
    }

    fn index(self) -> usize {
        Tool::ALL
            .iter()
            .position(|tool| *tool == self)
            .unwrap_or_default()
    }
}

/// Holds the currently active tool. Any tool may follow any other.
#[derive(Debug, Clone, Default)]
pub struct ToolSelector {
    current: Tool,
}

impl ToolSelector {
    pub fn set_tool(&mut self, tool: Tool) {
        self.current = tool;
    }

    pub fn current_tool(&self) -> Tool {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_black() {
        assert_eq!(ToolSelector::default().current_tool(), Tool::Black);
    }

    #[test]
    fn any_tool_reachable_from_any_other() {
        let mut selector = ToolSelector::default();
        for from in Tool::ALL {
            for to in Tool::ALL {
                selector.set_tool(from);
                selector.set_tool(to);
                assert_eq!(selector.current_tool(), to);
            }
        }
    }

    #[test]
    fn shortcuts_resolve() {
        assert_eq!(Tool::from_shortcut('t'), Some(Tool::Triangle));
        assert_eq!(Tool::from_shortcut('N'), Some(Tool::Number));
        assert_eq!(Tool::from_shortcut('1'), Some(Tool::Black));
        assert_eq!(Tool::from_shortcut('8'), Some(Tool::Number));
        assert_eq!(Tool::from_shortcut('0'), None);
        assert_eq!(Tool::from_shortcut('9'), None);
        assert_eq!(Tool::from_shortcut('z'), None);
        for tool in Tool::ALL {
            assert_eq!(Tool::from_shortcut(tool.shortcut()), Some(tool));
        }
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(Tool::Number.next(), Tool::Black);
        assert_eq!(Tool::Black.previous(), Tool::Number);
        assert_eq!(Tool::Cross.next().previous(), Tool::Cross);
    }

    #[test]
    fn label_tools() {
        assert_eq!(Tool::Letter.label_kind(), Some(LabelKind::Letter));
        assert_eq!(Tool::Number.label_kind(), Some(LabelKind::Number));
        assert!(Tool::ALL
            .into_iter()
            .filter(|tool| !matches!(tool, Tool::Letter | Tool::Number))
            .all(|tool| tool.label_kind().is_none()));
        assert!(Tool::White.is_stone());
        assert_eq!(Tool::Square.marker(), Marker::Square);
    }
}
