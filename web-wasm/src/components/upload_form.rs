//! アップロードフォームコンポーネント
//!
//! ファイル選択・モデル選択・送信ボタン

use leptos::ev::{Event, SubmitEvent};
use leptos::html::Input;
use leptos::prelude::*;
use medscan_common::{messages, FormController, ModelType};

/// `<select>` の選択肢 (value, label)
pub fn model_options() -> Vec<(&'static str, &'static str)> {
    ModelType::ALL
        .iter()
        .map(|m| (m.as_str(), m.label()))
        .collect()
}

#[component]
pub fn UploadForm<FC, FS>(
    form: ReadSignal<FormController>,
    file_input: NodeRef<Input>,
    model: ReadSignal<ModelType>,
    set_model: WriteSignal<ModelType>,
    on_file_change: FC,
    on_submit: FS,
) -> impl IntoView
where
    FC: Fn(Event) + 'static + Clone,
    FS: Fn(SubmitEvent) + 'static + Clone,
{
    let submit_disabled = move || !form.with(|f| f.view().submit_enabled);

    view! {
        <form id="upload-form" class="upload-form" on:submit=on_submit>
            <div class="form-group">
                <label for="model-select">"Choose Diagnosis Type:"</label>
                <select
                    id="model-select"
                    on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<ModelType>() {
                            set_model.set(value);
                        }
                    }
                >
                    {model_options()
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || model.get().as_str() == value
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <input
                    type="file"
                    id="file-input"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <span class="file-name">
                    {move || {
                        form.with(|f| f.view().file_name.clone())
                            .unwrap_or_else(|| "No file selected.".to_string())
                    }}
                </span>
            </div>

            <button
                type="submit"
                id="submit-button"
                class="btn btn-primary"
                disabled=submit_disabled
            >
                {messages::SUBMIT_LABEL}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_options() {
        let options = model_options();
        assert_eq!(
            options,
            vec![("covid", "COVID-19 X-ray"), ("brain_tumor", "Brain Tumor MRI")]
        );
    }

    #[test]
    fn test_option_values_parse_back() {
        for (value, _) in model_options() {
            assert!(value.parse::<ModelType>().is_ok());
        }
    }
}
