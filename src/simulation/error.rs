// src/simulation/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{id}: missing required field `{field}`")]
    MissingField { id: String, field: &'static str },
    #[error("no launch records to evaluate")]
    EmptyBatch,
    #[error("{id}: {reason}")]
    InvalidLaunch { id: String, reason: String },
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
