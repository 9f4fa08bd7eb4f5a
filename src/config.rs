use crate::error::{VideoPairError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use video_pair_common::error::validate_threshold;
use video_pair_common::{MatchStrategy, DEFAULT_THRESHOLD};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub default_threshold: f64,
    pub default_strategy: MatchStrategy,
    /// サブフォルダも再帰的にスキャン
    pub recursive: bool,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_THRESHOLD,
            default_strategy: MatchStrategy::Threshold,
            recursive: true,
            log_level: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            validate_threshold(config.default_threshold)
                .map_err(|e| VideoPairError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        // 環境変数を優先
        if let Ok(path) = std::env::var("VIDEO_PAIR_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| VideoPairError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("video-pair").join("config.json"))
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        self.default_threshold = validate_threshold(threshold)?;
        Ok(())
    }

    pub fn set_strategy(&mut self, strategy: MatchStrategy) {
        self.default_strategy = strategy;
    }
}
