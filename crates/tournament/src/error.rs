use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid results JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid match config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown engine '{0}' (expected classical, random or random:SEED)")]
    UnknownEngine(String),
}
