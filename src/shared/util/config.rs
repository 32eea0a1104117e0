//! Loads config from config.toml

use serde_derive::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::jobs::util::generate::{JobPool, DEFAULT_BACKENDS, DEFAULT_QUBITS, DEFAULT_SHOTS};
use crate::shared::types::app::DashboardError;

#[derive(Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub jobs: JobsConfig
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log: bool,
    pub log_level: String,
    pub keep_alive_seconds: u64,
    pub workers: Option<usize>
}

impl Default for ServerConfig {
    fn default() -> ServerConfig {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log: true,
            log_level: "info".to_string(),
            keep_alive_seconds: 30,
            workers: None
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct JobsConfig {
    pub backends: Vec<String>,
    pub shots: Vec<u32>,
    pub min_qubits: u32,
    pub max_qubits: u32,
    pub recent_limit: usize,
    pub max_recent_limit: usize
}

impl Default for JobsConfig {
    fn default() -> JobsConfig {
        JobsConfig {
            backends: DEFAULT_BACKENDS.iter().map(|b| b.to_string()).collect(),
            shots: DEFAULT_SHOTS.to_vec(),
            min_qubits: *DEFAULT_QUBITS.start(),
            max_qubits: *DEFAULT_QUBITS.end(),
            recent_limit: 5,
            max_recent_limit: 100
        }
    }
}

impl JobsConfig {
    pub fn pool(&self) -> Result<JobPool, DashboardError> {
        JobPool::new(self.backends.clone(), self.shots.clone(), self.min_qubits..=self.max_qubits)
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), DashboardError> {
        self.jobs.pool()?;
        if self.jobs.recent_limit > self.jobs.max_recent_limit {
            return Err(DashboardError::Config(format!(
                "recent_limit ({}) exceeds max_recent_limit ({})",
                self.jobs.recent_limit, self.jobs.max_recent_limit)));
        }
        Ok(())
    }
}

pub fn parse_config(contents: &str) -> Result<Config, DashboardError> {
    let data: Config = toml::from_str(contents)
        .map_err(|e| DashboardError::Config(format!("unable to load data from config: {e}")))?;
    data.validate()?;
    Ok(data)
}

/// Read the config at `path`. A missing file means every setting takes its default.
pub fn load_config(path: &Path) -> Result<Config, DashboardError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            eprintln!("Could not find {}, using default settings", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(DashboardError::Config(format!("could not read {}: {e}", path.display())))
    };
    parse_config(&contents)
}
