use std::env;
use std::fs;
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_PATH};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub access_token: Option<String>,
    pub default_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            access_token: None,
            default_path: None,
        }
    }
}

pub fn load_config() -> Config {
    let home_dir = dirs::home_dir().expect("Could not find home directory");
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).expect("Failed to read config file");
        serde_json::from_str(&config_str).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

/// Personal access token, read once at startup. The environment variable
/// wins over the config file. Callers that can work unauthenticated treat
/// the error as "no token".
pub fn get_access_token() -> Result<String, Box<dyn std::error::Error>> {
    // First check environment variable
    if let Ok(token) = env::var("GITHUB_PERSONAL_ACCESS_TOKEN") {
        return Ok(token);
    }

    // Then check config file
    let config = load_config();
    if let Some(token) = config.access_token {
        return Ok(token);
    }

    Err("No access token found. Set GITHUB_PERSONAL_ACCESS_TOKEN or run 'gh-issues auth' to configure.".into())
}

/// The `organization/repository` path to browse when the command line does
/// not supply one.
pub fn get_default_path() -> String {
    load_config()
        .default_path
        .unwrap_or_else(|| DEFAULT_PATH.to_string())
}
