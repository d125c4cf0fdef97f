//! JSON reader/writer for session directories

use crate::contactable::ParticipantConfig;
use foreach_domain::{Poll, Response, ResponseOption, Statement};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const INPUT_FILE: &str = "input.json";
pub const OUTPUT_FILE: &str = "output.json";

/// Errors reading or writing session files
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Contents of `input.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInput {
    #[serde(default)]
    pub options: Vec<ResponseOption>,
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub participants_config: Vec<ParticipantConfig>,
    /// Time budget in milliseconds
    #[serde(default)]
    pub max_time: Option<u64>,
}

impl SessionInput {
    /// Build the poll, using `max_time` as the resolved budget
    pub fn to_poll(&self, max_time: u64) -> Poll {
        Poll::new(self.options.clone(), self.statements.clone(), max_time)
    }
}

/// Read `dir/input.json`
pub fn read_input(dir: &Path) -> Result<SessionInput, IoError> {
    read_input_file(&dir.join(INPUT_FILE))
}

/// Read a session input from an explicit path
pub fn read_input_file(path: &Path) -> Result<SessionInput, IoError> {
    let content = std::fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let input: SessionInput = serde_json::from_str(&content).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Read {} options, {} statements, {} participants from {}",
        input.options.len(),
        input.statements.len(),
        input.participants_config.len(),
        path.display()
    );
    Ok(input)
}

/// Write `responses` to `dir/output.json`, returning the path written
pub fn write_output(dir: &Path, responses: &[Response]) -> Result<PathBuf, IoError> {
    let path = dir.join(OUTPUT_FILE);
    let json = serde_json::to_string_pretty(responses)?;
    std::fs::write(&path, json).map_err(|source| IoError::Write {
        path: path.clone(),
        source,
    })?;

    info!("Wrote {} responses to {}", responses.len(), path.display());
    Ok(path)
}
