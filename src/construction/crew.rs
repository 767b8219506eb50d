//! Crew members: workers who build and the leader who reports

use serde::{Deserialize, Serialize};

use crate::construction::house::House;
use crate::construction::log::{BuildLog, LogCategory};
use crate::construction::types::{PartKind, WINDOW_COUNT};

/// Builds one part per turn, always the highest-priority missing one
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub name: String,
}

impl Worker {
    pub fn new(name: impl Into<String>) -> Self {
        Worker { name: name.into() }
    }

    /// Build the next missing part. Returns what was built, or None if the
    /// house was already finished.
    pub fn act(&self, house: &mut House, log: &mut BuildLog) -> Option<PartKind> {
        let Some(kind) = house.next_unbuilt() else {
            tracing::debug!(worker = %self.name, "nothing left to build");
            log.log(LogCategory::Idle, format!("{}: Дом уже построен.", self.name));
            return None;
        };

        tracing::debug!(worker = %self.name, part = %kind, "building");
        house.part_mut(kind)?.build(log);
        Some(kind)
    }
}

/// Reports progress. Never touches the house.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLeader {
    pub name: String,
}

impl TeamLeader {
    pub fn new(name: impl Into<String>) -> Self {
        TeamLeader { name: name.into() }
    }

    pub fn report(&self, house: &House, log: &mut BuildLog) {
        tracing::debug!(leader = %self.name, built = house.built_part_count(), "status report");

        log.log(
            LogCategory::Report,
            format!("{}: Отчет о ходе строительства:", self.name),
        );
        for part in [&house.basement, &house.walls, &house.door] {
            log.log(LogCategory::Report, status_line(part.kind(), part.is_built()));
        }
        log.log(
            LogCategory::Report,
            format!(
                "{}: {} из {} построены.",
                PartKind::Window(0).report_label(),
                house.built_window_count(),
                WINDOW_COUNT
            ),
        );
        log.log(
            LogCategory::Report,
            status_line(PartKind::Roof, house.roof.is_built()),
        );
    }
}

fn status_line(kind: PartKind, built: bool) -> String {
    format!("{}: {}", kind.report_label(), kind.status_word(built))
}

/// Anyone who can take a turn on the house
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrewMember<'a> {
    Worker(&'a Worker),
    Leader(&'a TeamLeader),
}

impl CrewMember<'_> {
    pub fn name(&self) -> &str {
        match self {
            CrewMember::Worker(w) => &w.name,
            CrewMember::Leader(l) => &l.name,
        }
    }

    /// Take a turn. Only workers change the house; a leader's turn always
    /// yields None.
    pub fn act(&self, house: &mut House, log: &mut BuildLog) -> Option<PartKind> {
        match self {
            CrewMember::Worker(worker) => worker.act(house, log),
            CrewMember::Leader(leader) => {
                leader.report(house, log);
                None
            }
        }
    }
}
