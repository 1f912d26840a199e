//! 診断結果表示コンポーネント

use leptos::prelude::*;
use medscan_common::FormController;

#[component]
pub fn DiagnosisPanel(form: ReadSignal<FormController>) -> impl IntoView {
    view! {
        <div class="result-panel">
            <h2>"Diagnosis Result:"</h2>
            <p id="diagnosis-result" class="diagnosis">
                {move || form.with(|f| f.view().diagnosis.clone())}
            </p>
            <p id="confidence-score" class="confidence">
                {move || form.with(|f| f.view().confidence.clone())}
            </p>
            <p id="error-message" class="error">
                {move || form.with(|f| f.view().error.clone())}
            </p>
        </div>
    }
}
