//! 医師データの取得
//!
//! データソースは http(s) URL またはローカルのJSONファイル。
//! 取得は1回のみでリトライしない。失敗の扱い（空リストに倒す）は呼び出し側の
//! `FinderController::receive_doctors` に任せる。

use crate::error::{DoctorFinderError, Result};
use doctor_finder_common::parse_payload;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// http(s) のURLか
pub fn is_remote(source: &str) -> bool {
    let lower = source.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// データソースからJSONを取得
///
/// 本文が空の場合は `Value::Null`（データなし）を返す。
/// JSONとして不正な本文は `DoctorFinderError::Common`。
pub async fn fetch_payload(source: &str, timeout_seconds: u64) -> Result<Value> {
    let body = if is_remote(source) {
        fetch_remote(source, timeout_seconds).await?
    } else {
        read_local(Path::new(source))?
    };

    Ok(parse_payload(&body)?)
}

async fn fetch_remote(url: &str, timeout_seconds: u64) -> Result<String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("取得中: {}", url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = request(url, timeout_seconds).await;
    spinner.finish_and_clear();

    let body = result?;
    tracing::debug!(url, bytes = body.len(), "doctors fetched");
    Ok(body)
}

async fn request(url: &str, timeout_seconds: u64) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DoctorFinderError::Fetch(format!("HTTP {}: {}", status, url)));
    }

    Ok(response.text().await?)
}

fn read_local(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DoctorFinderError::FileNotFound(path.display().to_string()));
    }
    let body = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = body.len(), "doctors read from file");
    Ok(body)
}
