//! 診断フォームの状態管理
//!
//! DOMやターミナルに依存しない状態機械。
//! 画面側はイベントを `FormController` に渡し、`ViewState` を描画するだけ。
//!
//! 送信1回あたりの遷移:
//! `Idle → Validating → {Rejected | Submitting} → {Succeeded | ServerError | TransportError} → Idle`

use crate::messages;
use crate::model::ModelType;
use crate::protocol::{interpret_reply, HttpReply, Prediction, ReplyError, TransportError};
use thiserror::Error;

/// プレビュー画像の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Preview {
    #[default]
    Hidden,
    /// 読み込み中（まだ表示しない）
    Loading,
    Shown { data_url: String },
}

impl Preview {
    pub fn is_visible(&self) -> bool {
        matches!(self, Preview::Shown { .. })
    }

    /// `<img src>` に設定する値
    pub fn src(&self) -> &str {
        match self {
            Preview::Shown { data_url } => data_url,
            _ => "",
        }
    }
}

/// 画面に描画する状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub preview: Preview,
    pub file_name: Option<String>,
    pub diagnosis: String,
    pub confidence: String,
    pub error: String,
    pub submit_enabled: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            preview: Preview::Hidden,
            file_name: None,
            diagnosis: messages::DEFAULT_PROMPT.to_string(),
            confidence: String::new(),
            error: String::new(),
            submit_enabled: true,
        }
    }
}

impl ViewState {
    fn reset_result(&mut self) {
        self.diagnosis = messages::DEFAULT_PROMPT.to_string();
        self.confidence.clear();
        self.error.clear();
    }
}

/// 送信処理の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Rejected,
    Submitting,
    Succeeded,
    ServerError,
    TransportError,
}

/// 送信を開始できなかった理由
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("no file selected")]
    NoFile,

    #[error("a submission is already in flight")]
    InFlight,
}

/// 送信1回の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// ファイル未選択（通信なし）
    Rejected,
    /// 別の送信が処理中のため無視（通信なし）
    Busy,
    Succeeded(Prediction),
    ServerError { status: u16, message: String },
    TransportError(TransportError),
}

impl SubmitOutcome {
    /// この結果に対応する遷移先
    pub fn phase(&self) -> SubmitPhase {
        match self {
            SubmitOutcome::Rejected => SubmitPhase::Rejected,
            SubmitOutcome::Busy => SubmitPhase::Submitting,
            SubmitOutcome::Succeeded(_) => SubmitPhase::Succeeded,
            SubmitOutcome::ServerError { .. } => SubmitPhase::ServerError,
            SubmitOutcome::TransportError(_) => SubmitPhase::TransportError,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded(_))
    }
}

/// プレビュー読み込みの受付番号
///
/// 読み込み完了前に別のファイルが選ばれた場合、古い完了通知は破棄される
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket(u64);

/// 送信中であることを示す受付票。`finish_submit` で消費する
#[derive(Debug)]
pub struct SubmitTicket {
    _private: (),
}

/// `/predict` への送信手段
///
/// ブラウザでは `fetch`、CLIでは `reqwest` が実装する
#[allow(async_fn_in_trait)]
pub trait PredictTransport {
    /// 送信するファイルの型
    type Upload;

    async fn post_predict(
        &self,
        upload: &Self::Upload,
        model: ModelType,
    ) -> Result<HttpReply, TransportError>;
}

/// 診断フォームのコントローラ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    view: ViewState,
    in_flight: bool,
    selection: u64,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn phase(&self) -> SubmitPhase {
        if self.in_flight {
            SubmitPhase::Submitting
        } else {
            SubmitPhase::Idle
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// ファイル選択（変更）イベント
    ///
    /// ファイルがあればプレビュー読み込み用の受付番号を返す
    pub fn select_file(&mut self, file_name: Option<&str>) -> Option<PreviewTicket> {
        self.selection += 1;
        self.view.reset_result();
        self.view.file_name = file_name.map(str::to_string);

        match file_name {
            Some(_) => {
                self.view.preview = Preview::Loading;
                Some(PreviewTicket(self.selection))
            }
            None => {
                self.view.preview = Preview::Hidden;
                None
            }
        }
    }

    /// プレビュー読み込み完了
    ///
    /// 反映した場合はtrue、古い受付番号なら何もせずfalse
    pub fn preview_loaded(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if ticket.0 != self.selection || self.view.preview != Preview::Loading {
            return false;
        }
        self.view.preview = Preview::Shown { data_url };
        true
    }

    /// 送信開始
    ///
    /// ファイル未選択の場合はここで検証エラーを表示し、送信ボタンを戻す
    pub fn begin_submit(&mut self, has_file: bool) -> Result<SubmitTicket, SubmitRejected> {
        if self.in_flight {
            return Err(SubmitRejected::InFlight);
        }

        self.view.diagnosis = messages::PROCESSING.to_string();
        self.view.confidence.clear();
        self.view.error.clear();
        self.view.submit_enabled = false;

        if !has_file {
            self.view.error = messages::NO_FILE_SELECTED.to_string();
            self.view.diagnosis = messages::DEFAULT_PROMPT.to_string();
            self.view.preview = Preview::Hidden;
            self.view.submit_enabled = true;
            return Err(SubmitRejected::NoFile);
        }

        self.in_flight = true;
        Ok(SubmitTicket { _private: () })
    }

    /// 送信完了（成功・サーバーエラー・通信エラーのいずれでも呼ぶ）
    pub fn finish_submit(
        &mut self,
        _ticket: SubmitTicket,
        reply: Result<HttpReply, TransportError>,
    ) -> SubmitOutcome {
        let outcome = match reply {
            Ok(reply) => match interpret_reply(&reply) {
                Ok(prediction) => {
                    self.view.diagnosis = messages::predicted_class(&prediction.prediction);
                    self.view.confidence = messages::confidence(&prediction.confidence);
                    SubmitOutcome::Succeeded(prediction)
                }
                Err(ReplyError::Server { status, message }) => {
                    self.view.error = messages::server_error(message.as_deref());
                    self.view.diagnosis = messages::DEFAULT_PROMPT.to_string();
                    SubmitOutcome::ServerError {
                        status,
                        message: message.unwrap_or_else(|| messages::GENERIC_SERVER_ERROR.to_string()),
                    }
                }
                Err(ReplyError::Transport(e)) => self.fail_transport(e),
            },
            Err(e) => self.fail_transport(e),
        };

        self.in_flight = false;
        self.view.submit_enabled = true;
        outcome
    }

    fn fail_transport(&mut self, error: TransportError) -> SubmitOutcome {
        self.view.error = messages::transport_error(error.description());
        self.view.diagnosis = messages::DEFAULT_PROMPT.to_string();
        SubmitOutcome::TransportError(error)
    }

    /// 送信処理一式（検証 → 送信 → 結果反映）
    pub async fn submit<T: PredictTransport>(
        &mut self,
        transport: &T,
        upload: Option<&T::Upload>,
        model: ModelType,
    ) -> SubmitOutcome {
        let ticket = match self.begin_submit(upload.is_some()) {
            Ok(ticket) => ticket,
            Err(SubmitRejected::NoFile) => return SubmitOutcome::Rejected,
            Err(SubmitRejected::InFlight) => return SubmitOutcome::Busy,
        };
        let Some(upload) = upload else {
            return self.finish_submit(
                ticket,
                Err(TransportError::new("upload disappeared before sending")),
            );
        };

        let reply = transport.post_predict(upload, model).await;
        self.finish_submit(ticket, reply)
    }
}
