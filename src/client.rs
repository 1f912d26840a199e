//! `/predict` へのHTTP送信（reqwest multipart）

use crate::error::Result;
use crate::preview::UploadFile;
use medscan_common::{
    HttpReply, ModelType, PredictTransport, TransportError, FIELD_FILE, FIELD_MODEL_TYPE,
    PREDICT_PATH,
};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

/// 推論サーバーへの送信クライアント
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: predict_endpoint(server_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// サーバーのベースURLから送信先URLを組み立てる
pub fn predict_endpoint(server_url: &str) -> String {
    format!("{}{}", server_url.trim_end_matches('/'), PREDICT_PATH)
}

impl PredictTransport for HttpTransport {
    type Upload = UploadFile;

    async fn post_predict(
        &self,
        upload: &UploadFile,
        model: ModelType,
    ) -> std::result::Result<HttpReply, TransportError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|e| TransportError::new(e.to_string()))?;

        let form = Form::new()
            .part(FIELD_FILE, part)
            .text(FIELD_MODEL_TYPE, model.as_str());

        tracing::debug!(endpoint = %self.endpoint, file = %upload.file_name, model = %model, "POST");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "response received");
        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_endpoint() {
        assert_eq!(predict_endpoint("http://127.0.0.1:5000"), "http://127.0.0.1:5000/predict");
        assert_eq!(predict_endpoint("http://127.0.0.1:5000/"), "http://127.0.0.1:5000/predict");
    }

    #[test]
    fn test_new_transport() {
        let transport = HttpTransport::new("http://diag.local/", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.endpoint(), "http://diag.local/predict");
    }
}
