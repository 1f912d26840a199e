//! 画像プレビューコンポーネント

use leptos::prelude::*;
use medscan_common::FormController;

#[component]
pub fn ImagePreview(form: ReadSignal<FormController>) -> impl IntoView {
    let src = move || form.with(|f| f.view().preview.src().to_string());
    let display = move || {
        if form.with(|f| f.view().preview.is_visible()) {
            "block"
        } else {
            "none"
        }
    };

    view! {
        <div class="image-frame">
            <img
                id="uploaded-image"
                alt="Uploaded image preview"
                src=src
                style:display=display
            />
        </div>
    }
}
