//! Data URL ユーティリティ
//!
//! プレビュー表示用の `data:<mime>;base64,<payload>` 文字列を作る

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// バイト列からData URLを生成
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// ファイル名の拡張子から画像のMIMEタイプを推定
pub fn guess_image_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        let url = encode_data_url("image/png", b"abc");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_guess_image_mime() {
        assert_eq!(guess_image_mime("chest.PNG"), "image/png");
        assert_eq!(guess_image_mime("scan.jpeg"), "image/jpeg");
        assert_eq!(guess_image_mime("README"), "application/octet-stream");
    }
}
