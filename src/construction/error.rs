use thiserror::Error;

/// Problems with the crew configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("The crew needs at least one worker")]
    NoWorkers,

    #[error("Empty {role} name")]
    EmptyName { role: &'static str },

    #[error("Report die needs at least 2 sides, got {0}")]
    DieTooSmall(u32),
}

/// Errors that stop a construction run
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    InvalidParams(#[from] ConfigError),

    #[error("House still unfinished after {turns} turns")]
    TurnLimitReached { turns: u64 },
}

pub type BuildResult<T> = Result<T, BuildError>;
