use std::path::PathBuf;
use colored::Colorize;
use json_comments::StripComments;
use serde::{Serialize, Deserialize};

use crate::error::ConfigError;
use crate::roles;

#[derive(Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub debug: bool,
    pub api_addr: String,
    pub api_key: String,
    pub model: String,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "roles::default_role")]
    pub role: String,
    #[serde(default = "roles::default_roles")]
    pub roles: Vec<String>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

pub fn get_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("AIGEN_CONFIG_PATH") {
        return PathBuf::from(path);
    }
    let mut config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.push("aigen");
    config_dir.push("aigen.config.json");
    config_dir
}

pub fn load_config() -> Config {
    let mut config = Config {
        debug: false,
        api_addr: "https://api.openai.com/v1".to_string(),
        api_key: "".to_string(),
        model: "gpt-4o-mini".to_string(),
        temperature: 0.0,
        role: roles::default_role(),
        roles: roles::default_roles(),
    };

    let config_path = get_config_path();
    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                println!(
                    "{}",
                    format!("Failed to create config directory '{}': {}", parent.display(), e).red()
                );
            } else {
                let default_json = serde_json::to_string_pretty(&config).unwrap_or_else(|_| "{}".to_string());
                if let Err(e) = std::fs::write(&config_path, default_json) {
                    println!(
                        "{}",
                        format!("Failed to write default config to '{}': {}", config_path.display(), e).red()
                    );
                } else {
                    println!(
                        "{}",
                        format!("Created default config at '{}'", config_path.display()).green()
                    );
                }
            }
        }
    }

    if let Ok(json) = std::fs::read_to_string(&config_path) {
        let stripped = StripComments::new(json.as_bytes());
        match serde_json::from_reader(stripped) {
            Ok(file_config) => config = file_config,
            Err(e) => println!(
                "{} {} {}\n{}",
                "Failed to parse".red(),
                config_path.display().to_string().red(),
                format!(": {}", e).red(),
                "Using default config"
            ),
        }
    }

    if let Ok(debug) = std::env::var("AIGEN_DEBUG") { config.debug = debug.to_lowercase() == "true"; }
    if let Ok(api_addr) = std::env::var("AIGEN_API_ADDR") { config.api_addr = api_addr; }
    if let Ok(api_key) = std::env::var("AIGEN_API_KEY").or_else(|_| std::env::var("OPENAI_API_KEY")) {
        config.api_key = api_key;
    }
    if let Ok(model) = std::env::var("AIGEN_MODEL") { config.model = model; }
    if let Ok(temperature) = std::env::var("AIGEN_TEMPERATURE") {
        if let Ok(t) = temperature.parse() { config.temperature = t; }
    }
    if let Ok(role) = std::env::var("AIGEN_ROLE") { config.role = role; }

    config
}
