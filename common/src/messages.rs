//! 画面表示用の文言

/// 初期表示・リセット時の案内文
pub const DEFAULT_PROMPT: &str =
    "Select a model, upload an image, and click 'Get Diagnosis' to see the result.";

/// 送信中の表示
pub const PROCESSING: &str = "Processing...";

/// ファイル未選択時のエラー
pub const NO_FILE_SELECTED: &str = "Please select an image file.";

/// サーバーがエラー内容を返さなかった場合の文言
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong.";

/// 送信ボタンのラベル
pub const SUBMIT_LABEL: &str = "Get Diagnosis";

pub fn predicted_class(prediction: &str) -> String {
    format!("Predicted Class: {}", prediction)
}

pub fn confidence(value: impl std::fmt::Display) -> String {
    format!("Confidence: {}%", value)
}

pub fn server_error(message: Option<&str>) -> String {
    format!("Error: {}", message.unwrap_or(GENERIC_SERVER_ERROR))
}

pub fn transport_error(description: &str) -> String {
    format!("Network or server error: {}", description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_lines() {
        assert_eq!(predicted_class("benign"), "Predicted Class: benign");
        assert_eq!(confidence(97), "Confidence: 97%");
    }

    #[test]
    fn test_server_error_fallback() {
        assert_eq!(server_error(Some("bad image")), "Error: bad image");
        assert_eq!(server_error(None), "Error: Something went wrong.");
    }

    #[test]
    fn test_transport_error() {
        assert_eq!(
            transport_error("connection refused"),
            "Network or server error: connection refused"
        );
    }
}
