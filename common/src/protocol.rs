//! `/predict` エンドポイントの通信仕様
//!
//! リクエスト: multipart/form-data (`file`, `model_type`)
//! レスポンス: 成功時 `{"prediction": ..., "confidence": ...}`、
//! 失敗時 `{"error": ...}`（任意）

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 推論エンドポイントのパス
pub const PREDICT_PATH: &str = "/predict";

/// 画像ファイルのフィールド名
pub const FIELD_FILE: &str = "file";

/// モデル選択のフィールド名
pub const FIELD_MODEL_TYPE: &str = "model_type";

/// サーバーからの生レスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx かどうか
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 通信エラー（レスポンスが得られなかった、または本文を読めなかった）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn description(&self) -> &str {
        &self.0
    }
}

/// 信頼度（サーバーによって数値または数値文字列で返る）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(f64),
    Text(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Number(n) => write!(f, "{}", n),
            Confidence::Text(s) => f.write_str(s),
        }
    }
}

/// 診断結果（成功レスポンス本文）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: Confidence,
}

/// エラーレスポンス本文
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// レスポンス解釈の失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    /// 非2xx。メッセージは本文の `error`（無ければNone）
    Server { status: u16, message: Option<String> },
    /// 2xxだが本文を解釈できない
    Transport(TransportError),
}

/// レスポンスを診断結果に変換
///
/// 非2xxは本文の形に関わらずサーバーエラーとして扱う。
/// 成功レスポンスの本文が読めない場合は通信エラー扱い。
pub fn interpret_reply(reply: &HttpReply) -> Result<Prediction, ReplyError> {
    if !reply.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&reply.body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        return Err(ReplyError::Server {
            status: reply.status,
            message,
        });
    }

    serde_json::from_str::<Prediction>(&reply.body).map_err(|e| {
        ReplyError::Transport(TransportError::new(format!("invalid response body: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(HttpReply::new(200, "").is_success());
        assert!(HttpReply::new(204, "").is_success());
        assert!(!HttpReply::new(302, "").is_success());
        assert!(!HttpReply::new(500, "").is_success());
    }

    #[test]
    fn test_interpret_success_number() {
        let reply = HttpReply::new(200, r#"{"prediction":"benign","confidence":97}"#);
        let p = interpret_reply(&reply).unwrap();
        assert_eq!(p.prediction, "benign");
        assert_eq!(p.confidence.to_string(), "97");
    }

    #[test]
    fn test_interpret_success_text_confidence() {
        let reply = HttpReply::new(200, r#"{"prediction":"COVID","confidence":"0.93"}"#);
        let p = interpret_reply(&reply).unwrap();
        assert_eq!(p.confidence, Confidence::Text("0.93".into()));
        assert_eq!(p.confidence.to_string(), "0.93");
    }

    #[test]
    fn test_confidence_fraction_display() {
        assert_eq!(Confidence::Number(97.5).to_string(), "97.5");
        assert_eq!(Confidence::Number(97.0).to_string(), "97");
    }

    #[test]
    fn test_interpret_server_error_with_message() {
        let reply = HttpReply::new(400, r#"{"error":"bad image"}"#);
        assert_eq!(
            interpret_reply(&reply),
            Err(ReplyError::Server {
                status: 400,
                message: Some("bad image".into())
            })
        );
    }

    #[test]
    fn test_interpret_server_error_without_message() {
        for body in ["{}", "<html>Internal Server Error</html>", "", r#"{"error":""}"#] {
            let reply = HttpReply::new(500, body);
            assert_eq!(
                interpret_reply(&reply),
                Err(ReplyError::Server {
                    status: 500,
                    message: None
                }),
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_interpret_undecodable_success() {
        let reply = HttpReply::new(200, "not json");
        match interpret_reply(&reply) {
            Err(ReplyError::Transport(e)) => {
                assert!(e.description().starts_with("invalid response body"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_missing_field() {
        let reply = HttpReply::new(200, r#"{"prediction":"Normal"}"#);
        assert!(matches!(
            interpret_reply(&reply),
            Err(ReplyError::Transport(_))
        ));
    }
}
