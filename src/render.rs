//! ViewStateのターミナル表示

use medscan_common::{Preview, ViewState};

/// 現在の表示内容をテキスト化
pub fn render_view(view: &ViewState) -> String {
    let mut lines = Vec::new();

    let image = match (&view.preview, view.file_name.as_deref()) {
        (Preview::Shown { .. }, Some(name)) => format!("画像: {}", name),
        (Preview::Loading, Some(name)) => format!("画像: {} (プレビュー不可)", name),
        _ => "画像: なし".to_string(),
    };
    lines.push(image);
    lines.push(view.diagnosis.clone());

    if !view.confidence.is_empty() {
        lines.push(view.confidence.clone());
    }
    if !view.error.is_empty() {
        lines.push(view.error.clone());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use medscan_common::{messages, FormController};

    #[test]
    fn test_render_initial() {
        let form = FormController::new();
        let text = render_view(form.view());
        assert_eq!(text, format!("画像: なし\n{}", messages::DEFAULT_PROMPT));
    }

    #[test]
    fn test_render_result() {
        let view = ViewState {
            preview: Preview::Shown { data_url: "data:image/png;base64,AAAA".into() },
            file_name: Some("xray.png".into()),
            diagnosis: "Predicted Class: Normal".into(),
            confidence: "Confidence: 0.98%".into(),
            error: String::new(),
            submit_enabled: true,
        };
        let text = render_view(&view);
        assert_eq!(text, "画像: xray.png\nPredicted Class: Normal\nConfidence: 0.98%");
    }

    #[test]
    fn test_render_error_with_unreadable_preview() {
        let view = ViewState {
            preview: Preview::Loading,
            file_name: Some("scan.dcm".into()),
            error: "Error: bad image".into(),
            ..Default::default()
        };
        let text = render_view(&view);
        assert!(text.starts_with("画像: scan.dcm (プレビュー不可)"));
        assert!(text.ends_with("Error: bad image"));
    }
}
