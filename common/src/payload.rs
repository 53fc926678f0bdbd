//! データソースのレスポンス正規化
//!
//! 外部データソースは配列・単一オブジェクト・空（null）のいずれかを返す。
//! どの形でも `Vec<Doctor>` に揃え、レコード単位の不正は読み飛ばす。

use crate::error::{Error, Result};
use crate::types::Doctor;
use serde_json::Value;

/// JSON値を医師リストに正規化
///
/// - 配列 → 各要素をデシリアライズ（失敗した要素は警告して除外）
/// - オブジェクト → 1件のリスト
/// - それ以外（null含む） → 空リスト
pub fn normalize_doctors(payload: Value) -> Vec<Doctor> {
    match payload {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<Doctor>(item) {
                Ok(doctor) => Some(doctor),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed doctor record");
                    None
                }
            })
            .collect(),
        Value::Object(_) => match serde_json::from_value::<Doctor>(payload) {
            Ok(doctor) => vec![doctor],
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed doctor record");
                Vec::new()
            }
        },
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(kind = json_kind(&other), "unexpected doctors payload");
            Vec::new()
        }
    }
}

/// レスポンス本文をJSON値にパース（CLI/WASMの取得処理で共通）
///
/// 空文字（本文なし）は `Value::Null`（データなし）。JSONとして不正な場合のみエラー。
pub fn parse_payload(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("doctors payload is not valid JSON: {}", e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
