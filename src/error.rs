use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoctorFinderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データソースが設定されていません。`--source` を指定するか `doctor-finder config --set-data-url URL` で設定してください")]
    MissingDataSource,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("データ取得エラー: {0}")]
    Fetch(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] doctor_finder_common::Error),
}

impl From<reqwest::Error> for DoctorFinderError {
    fn from(e: reqwest::Error) -> Self {
        DoctorFinderError::Fetch(e.to_string())
    }
}

impl From<dialoguer::Error> for DoctorFinderError {
    fn from(e: dialoguer::Error) -> Self {
        DoctorFinderError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DoctorFinderError>;
