use crate::error::{DoctorFinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データソースURLを上書きする環境変数
pub const DATA_URL_ENV: &str = "DOCTOR_FINDER_DATA_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 既定のデータソース（http(s) URL またはJSONファイルのパス）
    pub data_url: Option<String>,
    /// 共有URLを表示するときのパス
    pub base_path: String,
    /// HTTPタイムアウト（秒）
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: None,
            base_path: "/".into(),
            timeout_seconds: 30,
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
        let home = dirs::home_dir()
            .ok_or_else(|| DoctorFinderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("doctor-finder").join("config.json"))
    }

    /// データソースを決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_source(&self, cli_source: Option<&str>) -> Result<String> {
        if let Some(source) = cli_source.filter(|s| !s.trim().is_empty()) {
            return Ok(source.to_string());
        }

        if let Ok(url) = std::env::var(DATA_URL_ENV) {
            if !url.trim().is_empty() {
                return Ok(url);
            }
        }

        self.data_url
            .clone()
            .filter(|s| !s.trim().is_empty())
            .ok_or(DoctorFinderError::MissingDataSource)
    }

    pub fn set_data_url(&mut self, url: String) -> Result<()> {
        self.data_url = Some(url);
        self.save()
    }
}
