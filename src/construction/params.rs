//! Configuration parameters for a construction run

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::construction::error::ConfigError;

/// Main configuration for the crew and its turn policy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildParams {
    // Crew
    /// Workers in rotation order
    pub worker_names: Vec<String>,
    /// Name the leader signs reports with
    pub leader_name: String,

    // Turn policy
    /// Sides on the die rolled each turn; a zero hands the turn to the leader
    pub report_die_sides: u32,
    /// Stop with an error after this many turns (None = run until done)
    pub max_turns: Option<u64>,
}

impl Default for BuildParams {
    fn default() -> Self {
        BuildParams {
            worker_names: vec![
                "Иван".to_string(),
                "Петр".to_string(),
                "Сидор".to_string(),
            ],
            leader_name: "Бригадир".to_string(),

            report_die_sides: 3,
            max_turns: None,
        }
    }
}

impl BuildParams {
    /// Params for tests: default crew with a generous turn cap
    pub fn quick_test() -> Self {
        let mut params = Self::default();
        params.max_turns = Some(10_000);
        params
    }

    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let params: BuildParams = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_names.is_empty() {
            return Err(ConfigError::NoWorkers);
        }
        if self.worker_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::EmptyName { role: "worker" });
        }
        if self.leader_name.trim().is_empty() {
            return Err(ConfigError::EmptyName { role: "leader" });
        }
        if self.report_die_sides < 2 {
            return Err(ConfigError::DieTooSmall(self.report_die_sides));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = BuildParams::default();
        assert_eq!(params.worker_names, vec!["Иван", "Петр", "Сидор"]);
        assert_eq!(params.leader_name, "Бригадир");
        assert_eq!(params.report_die_sides, 3);
        assert_eq!(params.max_turns, None);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params = BuildParams::from_json_str(r#"{ "report_die_sides": 5 }"#).unwrap();
        assert_eq!(params.report_die_sides, 5);
        assert_eq!(params.leader_name, "Бригадир");
        assert_eq!(params.worker_names.len(), 3);
    }

    #[test]
    fn test_rejects_empty_crew() {
        let err = BuildParams::from_json_str(r#"{ "worker_names": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoWorkers));
    }

    #[test]
    fn test_rejects_blank_names() {
        let mut params = BuildParams::default();
        params.leader_name = "  ".to_string();
        assert!(matches!(
            params.validate(),
            Err(ConfigError::EmptyName { role: "leader" })
        ));

        let mut params = BuildParams::default();
        params.worker_names.push(String::new());
        assert!(matches!(
            params.validate(),
            Err(ConfigError::EmptyName { role: "worker" })
        ));
    }

    #[test]
    fn test_rejects_one_sided_die() {
        let mut params = BuildParams::default();
        params.report_die_sides = 1;
        assert!(matches!(params.validate(), Err(ConfigError::DieTooSmall(1))));
    }

    #[test]
    fn test_bad_json() {
        let err = BuildParams::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = BuildParams::from_json_file("/nonexistent/crew.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
