//! MedScan Common Library
//!
//! CLIとWeb(WASM)で共有される診断フォームの状態機械・通信仕様・型

pub mod data_url;
pub mod error;
pub mod form;
pub mod messages;
pub mod model;
pub mod protocol;

pub use data_url::{encode_data_url, guess_image_mime};
pub use error::{Error, Result};
pub use form::{
    FormController, PredictTransport, Preview, PreviewTicket, SubmitOutcome, SubmitPhase,
    SubmitRejected, SubmitTicket, ViewState,
};
pub use model::ModelType;
pub use protocol::{
    Confidence, HttpReply, Prediction, TransportError, FIELD_FILE, FIELD_MODEL_TYPE, PREDICT_PATH,
};
