//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use doctor_finder::error::DoctorFinderError;

/// DoctorFinderErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        DoctorFinderError::Config("テスト設定エラー".to_string()),
        DoctorFinderError::MissingDataSource,
        DoctorFinderError::FileNotFound("doctors.json".to_string()),
        DoctorFinderError::Fetch("HTTP 500".to_string()),
        DoctorFinderError::Prompt("interrupted".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingDataSourceエラーのメッセージ確認
#[test]
fn test_missing_data_source_message() {
    let display = format!("{}", DoctorFinderError::MissingDataSource);

    assert!(display.contains("--source"));
    assert!(display.contains("doctor-finder config"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DoctorFinderError = io_err.into();

    assert!(matches!(err, DoctorFinderError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: DoctorFinderError = json_err.into();

    assert!(matches!(err, DoctorFinderError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = doctor_finder_common::Error::Parse("パースエラー".to_string());
    let err: DoctorFinderError = common_err.into();

    assert!(matches!(err, DoctorFinderError::Common(_)));
    assert_eq!(format!("{}", err), "Parse error: パースエラー");
}
