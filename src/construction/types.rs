//! Core types for the house construction simulation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of windows every house gets
pub const WINDOW_COUNT: usize = 4;

/// Identifies one buildable part of the house
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartKind {
    Basement,
    Walls,
    Door,
    /// Window by index, 0-based
    Window(usize),
    Roof,
}

impl PartKind {
    /// Narration while the part is being built
    pub fn building_message(&self) -> &'static str {
        match self {
            PartKind::Basement => "Строится фундамент...",
            PartKind::Walls => "Строятся стены...",
            PartKind::Door => "Строится дверь...",
            PartKind::Window(_) => "Строится окно...",
            PartKind::Roof => "Строится крыша...",
        }
    }

    /// Narration when somebody tries to build it a second time
    pub fn already_built_message(&self) -> &'static str {
        match self {
            PartKind::Basement => "Фундамент уже построен.",
            PartKind::Walls => "Стены уже построены.",
            PartKind::Door => "Дверь уже построена.",
            PartKind::Window(_) => "Окно уже построено.",
            PartKind::Roof => "Крыша уже построена.",
        }
    }

    /// Label used in the leader's status report
    pub fn report_label(&self) -> &'static str {
        match self {
            PartKind::Basement => "Фундамент",
            PartKind::Walls => "Стены",
            PartKind::Door => "Дверь",
            PartKind::Window(_) => "Окна",
            PartKind::Roof => "Крыша",
        }
    }

    /// Built / not built wording, agreeing with the part's grammatical gender
    pub fn status_word(&self, built: bool) -> &'static str {
        match (self, built) {
            (PartKind::Basement, true) => "Построен",
            (PartKind::Basement, false) => "Не построен",
            (PartKind::Walls | PartKind::Window(_), true) => "Построены",
            (PartKind::Walls | PartKind::Window(_), false) => "Не построены",
            (PartKind::Door | PartKind::Roof, true) => "Построена",
            (PartKind::Door | PartKind::Roof, false) => "Не построена",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartKind::Window(i) => write!(f, "window #{}", i + 1),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Result of asking a part to build itself
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildOutcome {
    Built,
    AlreadyBuilt,
}

/// Who gets the current turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Leader,
    Worker,
}
