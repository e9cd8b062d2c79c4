use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use kalah_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use kalah_common::games::kalah::BoardSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "kalah_server_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WebConfig {
    pub address: String,
}

impl WebConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.address
            .parse()
            .map_err(|e| format!("Invalid web address '{}': {}", self.address, e))
    }
}

impl Validate for WebConfig {
    fn validate(&self) -> Result<(), String> {
        self.socket_addr().map(|_| ())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CleanupConfig {
    pub check_interval_secs: u64,
    pub inactivity_timeout_secs: u64,
}

impl CleanupConfig {
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_secs)
    }
}

impl Validate for CleanupConfig {
    fn validate(&self) -> Result<(), String> {
        if self.check_interval_secs == 0 {
            return Err("Cleanup check interval must be positive".to_string());
        }
        if self.inactivity_timeout_secs == 0 {
            return Err("Inactivity timeout must be positive".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub web: WebConfig,
    #[serde(default)]
    pub board: BoardSettings,
    pub cleanup: CleanupConfig,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.web.validate()?;
        self.board.validate()?;
        self.cleanup.validate()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web: WebConfig {
                address: "0.0.0.0:5000".to_string(),
            },
            board: BoardSettings::default(),
            cleanup: CleanupConfig {
                check_interval_secs: 300,
                inactivity_timeout_secs: 3600,
            },
        }
    }
}
