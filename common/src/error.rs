//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown model type: {0}")]
    UnknownModel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_str = "invalid json";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("サーバーURLが空です".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Config error: サーバーURLが空です");
    }

    #[test]
    fn test_error_display_unknown_model() {
        let error = Error::UnknownModel("lung".to_string());
        assert_eq!(error.to_string(), "Unknown model type: lung");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownModel("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownModel"));
        assert!(debug.contains("テスト"));
    }
}
