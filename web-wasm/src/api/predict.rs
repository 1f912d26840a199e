//! `/predict` への送信（fetch + FormData）

use medscan_common::{
    HttpReply, ModelType, PredictTransport, TransportError, FIELD_FILE, FIELD_MODEL_TYPE,
    PREDICT_PATH,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

/// ブラウザの fetch を使った送信手段
#[derive(Clone, Debug)]
pub struct FetchTransport {
    endpoint: String,
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new(PREDICT_PATH)
    }
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PredictTransport for FetchTransport {
    type Upload = File;

    async fn post_predict(
        &self,
        file: &File,
        model: ModelType,
    ) -> Result<HttpReply, TransportError> {
        send_form(&self.endpoint, file, model)
            .await
            .map_err(describe_js_error)
    }
}

async fn send_form(endpoint: &str, file: &File, model: ModelType) -> Result<HttpReply, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FIELD_FILE, file, &file.name())?;
    form.append_with_str(FIELD_MODEL_TYPE, model.as_str())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;

    Ok(HttpReply {
        status: resp.status(),
        body: body.as_string().unwrap_or_default(),
    })
}

/// JSの例外を表示用の説明文に変換
///
/// `Error` なら message、文字列ならそのまま使う
pub fn describe_js_error(value: JsValue) -> TransportError {
    let description = if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else if let Some(s) = value.as_string() {
        s
    } else {
        format!("{:?}", value)
    };
    TransportError::new(description)
}
