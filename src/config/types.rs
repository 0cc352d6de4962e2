use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated catalog fetch latency in milliseconds.
    pub fetch_latency_ms: u64,
    /// UI tick rate in milliseconds (drives the loading spinner).
    pub tick_rate_ms: u64,
    /// Where the persisted state file lives. When unset, the platform data
    /// dir is used.
    pub state_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_latency_ms: 2000,
            tick_rate_ms: 250,
            state_path: None,
        }
    }
}

impl Config {
    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Resolved state file path.
    pub fn state_path(&self) -> PathBuf {
        self.state_path.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("stocklist").join("state.json")
        })
    }
}
