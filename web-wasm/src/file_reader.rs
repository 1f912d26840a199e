//! FileReaderによるプレビュー読み込み

use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

/// ファイルをData URLとして読み込み、完了時に `on_load` を呼ぶ
///
/// 読み込み失敗時は何も呼ばれない
pub fn read_as_data_url<F>(file: &File, on_load: F) -> Result<(), JsValue>
where
    F: FnOnce(String) + 'static,
{
    let reader = FileReader::new()?;

    let reader_clone = reader.clone();
    let closure = Closure::once(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_load(data_url);
            }
        }
    });

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    reader.read_as_data_url(file)
}
