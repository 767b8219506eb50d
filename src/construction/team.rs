//! The crew and its turn loop

use serde::{Deserialize, Serialize};

use crate::construction::crew::{CrewMember, TeamLeader, Worker};
use crate::construction::error::{BuildError, BuildResult, ConfigError};
use crate::construction::house::House;
use crate::construction::log::{BuildLog, LogCategory};
use crate::construction::params::BuildParams;
use crate::construction::turns::{DiceRoll, TurnSource};
use crate::construction::types::{PartKind, Turn};

/// Statistics gathered during one run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub turns: u64,
    pub worker_turns: u64,
    pub leader_turns: u64,
    /// Parts in the order they were finished, with who finished them
    pub built_by: Vec<(PartKind, String)>,
}

/// A finished house together with how it got built
#[derive(Clone, Debug)]
pub struct FinishedBuild {
    pub house: House,
    pub summary: BuildSummary,
}

/// Workers in rotation plus one leader
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TeamRecord")]
pub struct Team {
    workers: Vec<Worker>,
    leader: TeamLeader,
    max_turns: Option<u64>,
}

/// Serialized shape of a team, checked by `Team::new` on the way in
#[derive(Deserialize)]
struct TeamRecord {
    workers: Vec<Worker>,
    leader: TeamLeader,
    max_turns: Option<u64>,
}

impl TryFrom<TeamRecord> for Team {
    type Error = ConfigError;

    fn try_from(record: TeamRecord) -> Result<Self, Self::Error> {
        let names: Vec<&str> = record.workers.iter().map(|w| w.name.as_str()).collect();
        let team = Team::new(names.as_slice(), &record.leader.name)?;
        Ok(team.with_max_turns(record.max_turns))
    }
}

impl Team {
    /// Rejects an empty crew and blank names
    pub fn new<S: AsRef<str>>(
        worker_names: &[S],
        leader_name: &str,
    ) -> Result<Self, ConfigError> {
        if worker_names.is_empty() {
            return Err(ConfigError::NoWorkers);
        }
        if worker_names.iter().any(|n| n.as_ref().trim().is_empty()) {
            return Err(ConfigError::EmptyName { role: "worker" });
        }
        if leader_name.trim().is_empty() {
            return Err(ConfigError::EmptyName { role: "leader" });
        }
        Ok(Team {
            workers: worker_names.iter().map(|n| Worker::new(n.as_ref())).collect(),
            leader: TeamLeader::new(leader_name),
            max_turns: None,
        })
    }

    pub fn from_params(params: &BuildParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let team = Team::new(params.worker_names.as_slice(), &params.leader_name)?;
        Ok(team.with_max_turns(params.max_turns))
    }

    /// Give up with `BuildError::TurnLimitReached` after this many turns
    pub fn with_max_turns(mut self, max_turns: Option<u64>) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn leader(&self) -> &TeamLeader {
        &self.leader
    }

    /// Build a fresh house, asking `turns` who acts each turn.
    ///
    /// Leader turns only report. Worker turns go to the next worker in
    /// rotation, and the rotation advances whether or not anything was built.
    pub fn build_house<T: TurnSource>(
        &self,
        turns: &mut T,
        log: &mut BuildLog,
    ) -> BuildResult<FinishedBuild> {
        let mut house = House::new();
        let mut summary = BuildSummary::default();
        let mut worker_index = 0;

        while !house.is_complete() {
            if let Some(limit) = self.max_turns {
                if summary.turns >= limit {
                    tracing::warn!(
                        turns = summary.turns,
                        built = house.built_part_count(),
                        "turn limit reached"
                    );
                    return Err(BuildError::TurnLimitReached { turns: summary.turns });
                }
            }

            summary.turns += 1;
            log.set_turn(summary.turns);

            match turns.next_turn() {
                Turn::Leader => {
                    CrewMember::Leader(&self.leader).act(&mut house, log);
                    summary.leader_turns += 1;
                }
                Turn::Worker => {
                    let worker = &self.workers[worker_index];
                    if let Some(kind) = CrewMember::Worker(worker).act(&mut house, log) {
                        summary.built_by.push((kind, worker.name.clone()));
                    }
                    summary.worker_turns += 1;
                    worker_index = (worker_index + 1) % self.workers.len();
                }
            }
        }

        log.log(LogCategory::Milestone, "Строительство дома завершено!");
        log.log(LogCategory::Milestone, house.completion_message());

        tracing::info!(
            turns = summary.turns,
            worker_turns = summary.worker_turns,
            leader_turns = summary.leader_turns,
            "house complete"
        );

        Ok(FinishedBuild { house, summary })
    }
}

/// Run one full construction with seeded dice
pub fn run_construction(
    params: &BuildParams,
    seed: u64,
    log: &mut BuildLog,
) -> BuildResult<FinishedBuild> {
    let team = Team::from_params(params)?;
    let mut dice = DiceRoll::seeded(seed, params.report_die_sides);

    tracing::info!(
        seed,
        workers = team.workers().len(),
        leader = %team.leader().name,
        report_die_sides = params.report_die_sides,
        "starting construction"
    );

    team.build_house(&mut dice, log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::turns::{FixedTurns, ScriptedTurns};

    fn crew() -> Team {
        Team::new(&["Иван", "Петр", "Сидор"], "Бригадир").unwrap()
    }

    #[test]
    fn test_workers_only_finish_in_eight_turns() {
        let mut log = BuildLog::new();
        let result = crew()
            .build_house(&mut FixedTurns(Turn::Worker), &mut log)
            .unwrap();

        assert!(result.house.is_complete());
        assert_eq!(result.summary.turns, House::total_parts() as u64);
        assert_eq!(result.summary.leader_turns, 0);
        assert_eq!(log.stats.parts_built, 8);
        assert_eq!(log.stats.idle_lines, 0);
    }

    #[test]
    fn test_rotation_order() {
        let mut log = BuildLog::new();
        let result = crew()
            .build_house(&mut FixedTurns(Turn::Worker), &mut log)
            .unwrap();

        let builders: Vec<&str> = result
            .summary
            .built_by
            .iter()
            .map(|(_, name)| name.as_str())
            .collect();
        assert_eq!(
            builders,
            vec!["Иван", "Петр", "Сидор", "Иван", "Петр", "Сидор", "Иван", "Петр"]
        );

        let parts: Vec<PartKind> = result.summary.built_by.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            parts,
            vec![
                PartKind::Basement,
                PartKind::Walls,
                PartKind::Door,
                PartKind::Window(0),
                PartKind::Window(1),
                PartKind::Window(2),
                PartKind::Window(3),
                PartKind::Roof,
            ]
        );
    }

    #[test]
    fn test_leader_turns_do_not_advance_rotation() {
        let mut log = BuildLog::new();
        let mut script = ScriptedTurns::new(vec![Turn::Worker, Turn::Leader]);
        let result = crew().build_house(&mut script, &mut log).unwrap();

        assert_eq!(result.summary.worker_turns, 8);
        assert_eq!(result.summary.leader_turns, 7);
        assert_eq!(result.summary.built_by[1].1, "Петр");
        assert_eq!(log.stats.report_lines, 7 * 6);
    }

    #[test]
    fn test_always_leader_hits_turn_limit() {
        let team = crew().with_max_turns(Some(50));
        let mut log = BuildLog::new();

        let err = team
            .build_house(&mut FixedTurns(Turn::Leader), &mut log)
            .unwrap_err();

        assert!(matches!(err, BuildError::TurnLimitReached { turns: 50 }));
        assert_eq!(log.stats.parts_built, 0);
    }

    #[test]
    fn test_completion_lines_close_the_log() {
        let mut log = BuildLog::new();
        crew()
            .build_house(&mut FixedTurns(Turn::Worker), &mut log)
            .unwrap();

        let messages = log.messages();
        let tail = &messages[messages.len() - 2..];
        assert_eq!(tail, ["Строительство дома завершено!", "Дом готов нащальника"]);
    }

    #[test]
    fn test_dice_run_terminates_complete() {
        let params = BuildParams::quick_test();
        for seed in 0..50 {
            let mut log = BuildLog::new();
            let result = run_construction(&params, seed, &mut log).unwrap();
            assert!(result.house.is_complete());
            assert!(result.summary.turns <= 10_000);
            assert_eq!(result.summary.worker_turns, 8);
            assert_eq!(
                result.summary.turns,
                result.summary.worker_turns + result.summary.leader_turns
            );
        }
    }

    #[test]
    fn test_same_seed_same_log() {
        let params = BuildParams::default();
        let mut log_a = BuildLog::new();
        let mut log_b = BuildLog::new();
        run_construction(&params, 1234, &mut log_a).unwrap();
        run_construction(&params, 1234, &mut log_b).unwrap();
        assert_eq!(log_a.entries(), log_b.entries());
    }

    #[test]
    fn test_single_worker_crew() {
        let team = Team::new(&["Иван"], "Бригадир").unwrap();
        let mut log = BuildLog::new();
        let result = team
            .build_house(&mut FixedTurns(Turn::Worker), &mut log)
            .unwrap();
        assert!(result.summary.built_by.iter().all(|(_, n)| n == "Иван"));
    }

    #[test]
    fn test_empty_crew_rejected() {
        let names: [&str; 0] = [];
        assert!(matches!(Team::new(&names, "Бригадир"), Err(ConfigError::NoWorkers)));
    }

    #[test]
    fn test_blank_names_rejected() {
        assert!(matches!(
            Team::new(&["   "], "Бригадир"),
            Err(ConfigError::EmptyName { role: "worker" })
        ));
        assert!(matches!(
            Team::new(&["Иван"], ""),
            Err(ConfigError::EmptyName { role: "leader" })
        ));
    }

    #[test]
    fn test_deserialized_team_is_validated() {
        let empty = r#"{"workers":[],"leader":{"name":"Бригадир"},"max_turns":null}"#;
        assert!(serde_json::from_str::<Team>(empty).is_err());

        let blank = r#"{"workers":[{"name":""}],"leader":{"name":"Бригадир"},"max_turns":null}"#;
        assert!(serde_json::from_str::<Team>(blank).is_err());
    }

    #[test]
    fn test_team_json_round_trip() {
        let team = crew().with_max_turns(Some(20));
        let json = serde_json::to_string(&team).unwrap();
        let restored: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, team);

        let mut log = BuildLog::new();
        let result = restored
            .build_house(&mut FixedTurns(Turn::Worker), &mut log)
            .unwrap();
        assert!(result.house.is_complete());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut params = BuildParams::default();
        params.report_die_sides = 0;
        let mut log = BuildLog::new();
        let err = run_construction(&params, 1, &mut log).unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidParams(ConfigError::DieTooSmall(0))
        ));
    }
}
