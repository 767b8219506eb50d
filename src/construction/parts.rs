//! A single buildable piece of the house

use serde::{Deserialize, Serialize};

use crate::construction::log::{BuildLog, LogCategory};
use crate::construction::types::{BuildOutcome, PartKind};

/// One part of the house. Once built it stays built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildablePart {
    kind: PartKind,
    built: bool,
}

impl BuildablePart {
    pub fn new(kind: PartKind) -> Self {
        BuildablePart { kind, built: false }
    }

    pub fn kind(&self) -> PartKind {
        self.kind
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Build the part, narrating either progress or that it is already done
    pub fn build(&mut self, log: &mut BuildLog) -> BuildOutcome {
        if self.built {
            log.log(LogCategory::Idle, self.kind.already_built_message());
            return BuildOutcome::AlreadyBuilt;
        }

        log.log(LogCategory::Construction, self.kind.building_message());
        self.built = true;
        BuildOutcome::Built
    }
}
