use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_DATA_DIR: &str = "data";

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// Directory holding `jobs.csv`, `courses.csv`, `internships.csv`,
    /// `scholarships.csv` and `projects.csv`.
    pub data_dir: PathBuf,
}

impl Config {
    /// Optional:
    /// - `CHATBOT_LISTEN_ADDR` (default: "127.0.0.1:5000")
    /// - `CHATBOT_DATA_DIR` (default: "data")
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let listen_addr = lookup("CHATBOT_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!("CHATBOT_LISTEN_ADDR '{listen_addr}' is not a socket address: {e}"))
        })?;

        let data_dir = PathBuf::from(
            lookup("CHATBOT_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
        );
        if !data_dir.is_dir() {
            return Err(AppError::Config(format!(
                "data directory not found: {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            listen_addr,
            data_dir,
        })
    }
}
