// Daemon settings, read from JOBBOARD_* environment variables

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "JOBBOARD";
const FALLBACK_DB_PATH: &str = "~/.jobboard/jobs.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// `sqlite:` URL or a plain file path (`~` is expanded)
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// Daily rolling log files go here when set
    pub log_dir: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", default_db_path())?
            .set_default("max_connections", 5)?
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("log_format", "pretty")?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Connection URL for the pool.
    ///
    /// Plain paths are expanded and their parent directory is created.
    pub fn connection_url(&self) -> std::io::Result<String> {
        if self.database_url.starts_with("sqlite:") {
            return Ok(self.database_url.clone());
        }

        let path = PathBuf::from(shellexpand::tilde(&self.database_url).into_owned());
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(format!("sqlite://{}", path.display()))
    }
}

fn default_db_path() -> String {
    ProjectDirs::from("", "", "jobboard")
        .map(|dirs| path_string(&dirs.data_dir().join("jobs.db")))
        .unwrap_or_else(|| FALLBACK_DB_PATH.to_string())
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
