use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Dependency cycle: {} task(s) cannot be resolved: {}", .unresolved.len(), .unresolved.join(", "))]
    CyclicDependency {
        /// Names of tasks left without a priority, in discovery order.
        unresolved: Vec<String>,
    },

    #[error("Invalid executor count: {count} (must be at least 1)")]
    InvalidExecutorCount { count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
