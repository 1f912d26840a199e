//! 診断フロー（ファイル選択 → プレビュー → 送信 → 結果表示）

use crate::error::{MedScanError, Result};
use crate::preview::{build_preview, UploadFile};
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use medscan_common::{messages, FormController, ModelType, PredictTransport, SubmitOutcome};
use std::path::Path;
use std::time::Duration;

/// 1回分の診断を実行し、最終的なフォーム状態と結果を返す
///
/// ファイル未指定の場合は通信せず検証エラーになる
pub async fn run_diagnose<T>(
    transport: &T,
    path: Option<&Path>,
    model: ModelType,
) -> Result<(FormController, SubmitOutcome)>
where
    T: PredictTransport<Upload = UploadFile>,
{
    let mut form = FormController::new();
    let upload = path.map(UploadFile::read).transpose()?;

    if let Some(upload) = &upload {
        if let Some(ticket) = form.select_file(Some(upload.file_name.as_str())) {
            match build_preview(upload) {
                Ok(preview) => {
                    tracing::info!(
                        file = %upload.file_name,
                        format = %preview.format,
                        width = preview.width,
                        height = preview.height,
                        "preview ready"
                    );
                    form.preview_loaded(ticket, preview.data_url);
                }
                // プレビューできなくても送信は続ける（判定はサーバー側）
                Err(e) => tracing::warn!(file = %upload.file_name, error = %e, "preview failed"),
            }
        }
    }

    let spinner = upload.as_ref().map(|_| processing_spinner());
    let outcome = form.submit(transport, upload.as_ref(), model).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match &outcome {
        SubmitOutcome::Succeeded(p) => {
            tracing::info!(prediction = %p.prediction, confidence = %p.confidence, "diagnosis succeeded")
        }
        SubmitOutcome::ServerError { status, message } => {
            tracing::warn!(status, message = %message, "server rejected request")
        }
        SubmitOutcome::TransportError(e) => tracing::warn!(error = %e, "request failed"),
        SubmitOutcome::Rejected => tracing::debug!("no file selected"),
        SubmitOutcome::Busy => tracing::debug!("submission already in flight"),
    }

    Ok((form, outcome))
}

fn processing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(messages::PROCESSING);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// 対話式でモデルを選択
pub fn prompt_model(default: ModelType) -> Result<ModelType> {
    let labels: Vec<&str> = ModelType::ALL.iter().map(|m| m.label()).collect();
    let default_index = ModelType::ALL
        .iter()
        .position(|m| *m == default)
        .unwrap_or(0);

    let index = Select::new()
        .with_prompt("Choose Diagnosis Type")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(|e| MedScanError::Prompt(e.to_string()))?;

    Ok(ModelType::ALL[index])
}

/// モデル一覧の表示用テキスト
pub fn describe_models(default: ModelType) -> String {
    ModelType::ALL
        .iter()
        .map(|m| {
            let marker = if *m == default { "*" } else { " " };
            format!(
                "{} {:<12} {:<16} [{}]",
                marker,
                m.as_str(),
                m.label(),
                m.class_names().join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_models_marks_default() {
        let text = describe_models(ModelType::BrainTumor);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  covid"));
        assert!(lines[1].starts_with("* brain_tumor"));
        assert!(lines[1].contains("glioma, notumor, meningioma, pituitary"));
    }
}
