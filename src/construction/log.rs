//! Build Log
//!
//! Records every narrated line of a construction run in order. When echo is
//! enabled each line is also printed to stdout as soon as it is logged, which
//! is how the console narration is produced.

use serde::{Deserialize, Serialize};

/// Category of a narrated line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogCategory {
    /// A part was built
    Construction,
    /// Someone tried to build a finished part, or a worker had nothing to do
    Idle,
    /// Line of the leader's status report
    Report,
    /// Start or completion of the whole house
    Milestone,
}

impl LogCategory {
    /// Short label for debugging output
    pub fn label(&self) -> &'static str {
        match self {
            LogCategory::Construction => "BLD",
            LogCategory::Idle => "IDL",
            LogCategory::Report => "REP",
            LogCategory::Milestone => "!!",
        }
    }
}

/// One narrated line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Turn during which this was logged (0 before the first turn)
    pub turn: u64,
    pub category: LogCategory,
    pub message: String,
}

/// Counters over everything logged so far
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogStats {
    pub total_lines: u64,
    pub parts_built: u64,
    pub idle_lines: u64,
    pub report_lines: u64,
}

/// The build log store
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BuildLog {
    entries: Vec<LogEntry>,
    current_turn: u64,
    echo: bool,
    pub stats: LogStats,
}

impl BuildLog {
    /// A log that only records
    pub fn new() -> Self {
        BuildLog::default()
    }

    /// A log that also prints each line to stdout
    pub fn echoing() -> Self {
        BuildLog {
            echo: true,
            ..BuildLog::default()
        }
    }

    /// Set the turn number stamped on subsequent entries
    pub fn set_turn(&mut self, turn: u64) {
        self.current_turn = turn;
    }

    /// Add a line
    pub fn log(&mut self, category: LogCategory, message: impl Into<String>) {
        let message = message.into();

        self.stats.total_lines += 1;
        match category {
            LogCategory::Construction => self.stats.parts_built += 1,
            LogCategory::Idle => self.stats.idle_lines += 1,
            LogCategory::Report => self.stats.report_lines += 1,
            LogCategory::Milestone => {}
        }

        tracing::trace!(turn = self.current_turn, category = category.label(), "{}", message);
        if self.echo {
            println!("{}", message);
        }

        self.entries.push(LogEntry {
            turn: self.current_turn,
            category,
            message,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages only, in order
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Entries of one category
    pub fn by_category(&self, category: LogCategory) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
