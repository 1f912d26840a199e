//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Diagnostic Vision and Smartscan Med"</h1>
            <p class="text-muted">"Select a model and upload an image for diagnosis."</p>
        </header>
    }
}
