//! データ取得テスト
//!
//! ローカルJSONファイルからの取得とコントローラへの受け渡しを検証

use doctor_finder::error::DoctorFinderError;
use doctor_finder::fetch::fetch_payload;
use doctor_finder_common::{FilterPatch, FinderController, MemoryHistory, SortKey, ViewStateStore};
use tempfile::tempdir;

const DOCTORS_JSON: &str = r#"[
  {
    "id": "1",
    "name": "Alice",
    "name_initials": "A",
    "specialities": [{"name": "Dentist"}],
    "fees": "₹300",
    "experience": "5 Years of experience",
    "languages": ["English"],
    "clinic": null,
    "video_consult": true,
    "in_clinic": false
  },
  {
    "id": "2",
    "name": "Bob",
    "name_initials": "B",
    "specialities": [{"name": "ENT"}],
    "fees": "₹100",
    "experience": "10 Years of experience",
    "languages": [],
    "video_consult": false,
    "in_clinic": true
  }
]"#;

/// ファイルから取得してコントローラで絞り込む
#[tokio::test]
async fn test_fetch_local_file_into_controller() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("doctors.json");
    std::fs::write(&path, DOCTORS_JSON).unwrap();

    let payload = fetch_payload(path.to_str().unwrap(), 5).await;
    assert!(payload.is_ok());

    let mut controller = FinderController::new(MemoryHistory::new("sort=fees_asc"));
    controller.receive_doctors(payload);

    let names: Vec<&str> = controller.visible().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
    assert_eq!(controller.specialties(), &["Dentist".to_string(), "ENT".to_string()]);

    controller.set_filters(FilterPatch::sort_by(Some(SortKey::ExperienceAsc)));
    let names: Vec<&str> = controller.visible().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(controller.store().current_query(), "sort=experience_asc");
}

/// 存在しないファイル
#[tokio::test]
async fn test_fetch_missing_file() {
    let result = fetch_payload("/nonexistent/path/doctors-12345.json", 5).await;
    assert!(matches!(result, Err(DoctorFinderError::FileNotFound(_))));
}

/// 取得失敗は空リストに倒れる
#[tokio::test]
async fn test_fetch_failure_degrades_to_empty_list() {
    let result = fetch_payload("/nonexistent/path/doctors-12345.json", 5).await;

    let mut controller = FinderController::new(MemoryHistory::default());
    controller.receive_doctors(result);

    assert!(!controller.is_loading());
    assert!(controller.visible().is_empty());
}

/// 空ファイルはデータなし
#[tokio::test]
async fn test_fetch_empty_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "").unwrap();

    let payload = fetch_payload(path.to_str().unwrap(), 5).await.expect("取得失敗");
    assert!(payload.is_null());
}

/// 単一オブジェクトのレスポンス
#[tokio::test]
async fn test_fetch_single_object() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("single.json");
    std::fs::write(&path, r#"{"id": "9", "name": "Solo", "fees": "₹900"}"#).unwrap();

    let mut controller = FinderController::new(MemoryHistory::default());
    controller.receive_doctors(fetch_payload(path.to_str().unwrap(), 5).await);

    assert_eq!(controller.visible_count(), 1);
    assert_eq!(controller.visible()[0].name, "Solo");
}

/// JSONとして不正なファイルは共通ライブラリのパースエラー
#[tokio::test]
async fn test_fetch_invalid_json_is_common_parse_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = fetch_payload(path.to_str().unwrap(), 5).await;
    assert!(matches!(
        result,
        Err(DoctorFinderError::Common(doctor_finder_common::Error::Parse(_)))
    ));

    // 空白のみの本文はデータなし
    let blank = dir.path().join("blank.json");
    std::fs::write(&blank, "  \n").unwrap();
    let payload = fetch_payload(blank.to_str().unwrap(), 5).await.expect("取得失敗");
    assert!(payload.is_null());
}
