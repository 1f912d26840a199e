//! メインアプリケーションコンポーネント

use crate::api::FetchTransport;
use crate::components::{
    diagnosis_panel::DiagnosisPanel, header::Header, image_preview::ImagePreview,
    upload_form::UploadForm,
};
use crate::file_reader::read_as_data_url;
use leptos::ev::{Event, SubmitEvent};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medscan_common::{FormController, ModelType, PredictTransport, SubmitOutcome, SubmitRejected};
use web_sys::File;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // フォーム状態（表示内容はすべてここから導出）
    let (form, set_form) = signal(FormController::new());
    let (model, set_model) = signal(ModelType::default());
    let file_input: NodeRef<Input> = NodeRef::new();
    let transport = FetchTransport::default();

    let selected_file = move || -> Option<File> {
        file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    };

    // ファイル選択ハンドラ（プレビュー表示）
    let on_file_change = move |_: Event| {
        let file = selected_file();
        let file_name = file.as_ref().map(|f| f.name());
        let ticket = set_form
            .try_update(|f| f.select_file(file_name.as_deref()))
            .flatten();

        if let (Some(ticket), Some(file)) = (ticket, file) {
            let result = read_as_data_url(&file, move |data_url| {
                set_form.update(|f| {
                    f.preview_loaded(ticket, data_url);
                });
            });
            if let Err(e) = result {
                gloo::console::warn!(format!("preview read failed: {:?}", e));
            }
        }
    };

    // 送信ハンドラ
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let file = selected_file();
        let started = set_form.try_update(|f| f.begin_submit(file.is_some()));

        match (started, file) {
            (Some(Ok(ticket)), Some(file)) => {
                let model = model.get_untracked();
                let transport = transport.clone();
                spawn_local(async move {
                    let reply = transport.post_predict(&file, model).await;
                    if let Some(outcome) = set_form.try_update(|f| f.finish_submit(ticket, reply)) {
                        log_outcome(&outcome);
                    }
                });
            }
            (Some(Err(SubmitRejected::InFlight)), _) => {
                gloo::console::log!("submission already in flight; ignored");
            }
            _ => {}
        }
    };

    view! {
        <div class="container">
            <Header />

            <UploadForm
                form=form
                file_input=file_input
                model=model
                set_model=set_model
                on_file_change=on_file_change
                on_submit=on_submit
            />

            <ImagePreview form=form />

            <DiagnosisPanel form=form />
        </div>
    }
}

fn log_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Succeeded(p) => {
            gloo::console::log!(format!("prediction: {} ({})", p.prediction, p.confidence));
        }
        SubmitOutcome::ServerError { status, message } => {
            gloo::console::warn!(format!("server error {}: {}", status, message));
        }
        SubmitOutcome::TransportError(e) => {
            gloo::console::error!(format!("request failed: {}", e));
        }
        SubmitOutcome::Rejected | SubmitOutcome::Busy => {}
    }
}
