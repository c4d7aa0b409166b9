// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;

use crate::config::{AnimationConfig, StyleConfig, TimingConfig, WindowConfig};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub timing: TimingConfig,
    pub animation: AnimationConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try the executable's directory (build.rs puts a copy
        // there), then fall back to the current working directory.
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }
}
