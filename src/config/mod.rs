//! # Configuration
//!
//! TOML configuration for the game, loaded once at startup.
//!
//! ## Sections
//!
//! - [`GameConfig`] - score thresholds
//! - [`AdviceConfig`] - real-advice endpoint, fallback text and fixtures file
//! - [`LoggingConfig`] - log level and optional log file
//!
//! Every section has defaults, so an empty file (or no file at all, see
//! `main.rs`) gives the classic 10 / 20 / 0 game against the public advice API.
//!
//! ```toml
//! [game]
//! initial_score = 10
//! win_score = 20
//! lose_score = 0
//!
//! [advice]
//! endpoint = "https://api.adviceslip.com/advice"
//! fallback_advice = "The true secret is to never give up."
//! # fixtures_file = "data/fake_advice.json"
//! # timeout_seconds = 5
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::advice::FALLBACK_ADVICE;
use crate::game::state::{ScoreRules, INITIAL_SCORE, LOSE_SCORE, WIN_SCORE};

pub const DEFAULT_ADVICE_ENDPOINT: &str = "https://api.adviceslip.com/advice";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub advice: AdviceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub initial_score: i32,
    pub win_score: i32,
    pub lose_score: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_score: INITIAL_SCORE,
            win_score: WIN_SCORE,
            lose_score: LOSE_SCORE,
        }
    }
}

impl GameConfig {
    /// Thresholds as game rules; rejects settings that would end a game before
    /// the first guess.
    pub fn score_rules(&self) -> Result<ScoreRules> {
        let rules = ScoreRules {
            initial: self.initial_score,
            win_at: self.win_score,
            lose_at: self.lose_score,
        };
        if !rules.is_valid() {
            return Err(anyhow!(
                "Invalid score thresholds: need lose_score ({}) < initial_score ({}) < win_score ({})",
                self.lose_score,
                self.initial_score,
                self.win_score
            ));
        }
        Ok(rules)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceConfig {
    /// Real-advice endpoint; a `timestamp` query parameter is appended per request
    pub endpoint: String,
    /// Text shown (as true advice) when the endpoint fails
    pub fallback_advice: String,
    /// JSON array of fabricated advice replacing the built-in list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures_file: Option<String>,
    /// Request timeout in seconds; unset means wait for the endpoint indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ADVICE_ENDPOINT.to_string(),
            fallback_advice: FALLBACK_ADVICE.to_string(),
            fixtures_file: None,
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `warn` so a typo never silences errors.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!("Invalid logging level '{}', defaulting to warn", self.level);
                log::LevelFilter::Warn
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.game.score_rules()?;
        Ok(config)
    }

    /// Write the default configuration to `path`
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
