//! House Construction Simulation
//!
//! A crew of workers finishes a house one part at a time while the leader
//! occasionally interrupts with a status report.
//!
//! # Module Structure
//!
//! - `types`: Part kinds, build outcomes and turn kinds
//! - `parts`: A single buildable part
//! - `house`: The house and its build priority
//! - `crew`: Workers, the team leader and the crew member union
//! - `turns`: Turn sources (seeded dice, fixed and scripted turns)
//! - `team`: The team and its turn loop
//! - `params`: Crew and turn policy configuration
//! - `log`: Narration log
//! - `error`: Configuration and run errors
//! - `harness`: Batch runs over many seeds
//!
//! # Usage
//!
//! ```ignore
//! use house_crew::construction::{BuildLog, BuildParams, run_construction};
//!
//! let mut log = BuildLog::echoing();
//! let finished = run_construction(&BuildParams::default(), 42, &mut log)?;
//! ```

pub mod types;
pub mod parts;
pub mod house;
pub mod crew;
pub mod turns;
pub mod team;
pub mod params;
pub mod log;
pub mod error;
pub mod harness;

// Re-export main types for convenience
pub use types::{PartKind, BuildOutcome, Turn, WINDOW_COUNT};
pub use parts::BuildablePart;
pub use house::House;
pub use crew::{Worker, TeamLeader, CrewMember};
pub use turns::{TurnSource, DiceRoll, FixedTurns, ScriptedTurns};
pub use team::{Team, BuildSummary, FinishedBuild, run_construction};
pub use params::BuildParams;
pub use log::{BuildLog, LogEntry, LogCategory, LogStats};
pub use error::{BuildError, BuildResult, ConfigError};
pub use harness::{BatchConfig, BatchResults, run_batch, compare_batches};
