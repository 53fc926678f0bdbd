//! URLクエリとフィルタ状態の相互変換
//!
//! | key            | 個数 | 内容                         |
//! |----------------|------|------------------------------|
//! | `search`       | 0..1 | 名前の検索語                 |
//! | `consultation` | 0..1 | `video` または `clinic`      |
//! | `specialty`    | 0..N | 選択中の診療科（選択順）     |
//! | `sort`         | 0..1 | 並び替えキー                 |
//!
//! 既定値のフィールドは出力しない。
//! エンコードは `application/x-www-form-urlencoded`（ブラウザの URLSearchParams と同じ）。

use crate::types::{ConsultationType, FilterState, SortKey};
use url::form_urlencoded;

pub const KEY_SEARCH: &str = "search";
pub const KEY_CONSULTATION: &str = "consultation";
pub const KEY_SPECIALTY: &str = "specialty";
pub const KEY_SORT: &str = "sort";

/// フィルタ状態をクエリ文字列に変換（先頭の '?' は付けない）
pub fn encode_filters(filters: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !filters.search.is_empty() {
        serializer.append_pair(KEY_SEARCH, &filters.search);
    }

    if let Some(consultation) = filters.consultation_type {
        serializer.append_pair(KEY_CONSULTATION, consultation.as_str());
    }

    for specialty in &filters.specialties {
        serializer.append_pair(KEY_SPECIALTY, specialty);
    }

    if let Some(sort_by) = filters.sort_by {
        serializer.append_pair(KEY_SORT, sort_by.as_str());
    }

    serializer.finish()
}

/// クエリ文字列からフィルタ状態を復元
///
/// - 先頭の '?' は無視する
/// - 単一値のキーが重複した場合は最初の値を使う
/// - `consultation` / `sort` の未知の値は未設定として扱う
pub fn decode_filters(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search: Option<String> = None;
    let mut consultation: Option<Option<ConsultationType>> = None;
    let mut sort_by: Option<Option<SortKey>> = None;
    let mut specialties = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            KEY_SEARCH => {
                search.get_or_insert_with(|| value.into_owned());
            }
            KEY_CONSULTATION => {
                consultation.get_or_insert_with(|| ConsultationType::from_token(&value));
            }
            KEY_SPECIALTY => specialties.push(value.into_owned()),
            KEY_SORT => {
                sort_by.get_or_insert_with(|| SortKey::from_token(&value));
            }
            other => {
                tracing::debug!(key = other, "unknown query key ignored");
            }
        }
    }

    FilterState {
        search: search.unwrap_or_default(),
        consultation_type: consultation.flatten(),
        specialties,
        sort_by: sort_by.flatten(),
    }
}

/// パスとクエリを連結（クエリが空なら '?' を付けない）
pub fn join_path_and_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// パスとフィルタ状態からURLを組み立てる
pub fn build_url(path: &str, filters: &FilterState) -> String {
    join_path_and_query(path, &encode_filters(filters))
}
