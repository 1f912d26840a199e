//! 画像ファイルの読み込みとプレビュー生成

use crate::error::{MedScanError, Result};
use image::ImageReader;
use medscan_common::{encode_data_url, guess_image_mime};
use std::io::Cursor;
use std::path::Path;

/// 送信対象の画像ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// ファイルを読み込む（中身から形式を判定し、無理なら拡張子で推定）
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(MedScanError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self::from_bytes(file_name, bytes))
    }

    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = image::guess_format(&bytes)
            .map(|f| f.to_mime_type().to_string())
            .unwrap_or_else(|_| guess_image_mime(&file_name).to_string());

        Self {
            file_name,
            mime_type,
            bytes,
        }
    }
}

/// プレビュー情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub data_url: String,
}

/// 画像として読めるか確認し、Data URLを作る
pub fn build_preview(upload: &UploadFile) -> Result<PreviewImage> {
    let reader = ImageReader::new(Cursor::new(upload.bytes.as_slice()))
        .with_guessed_format()
        .map_err(|e| MedScanError::ImageLoad(e.to_string()))?;

    let format = reader
        .format()
        .ok_or_else(|| MedScanError::ImageLoad(format!("画像形式を判定できません: {}", upload.file_name)))?;

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| MedScanError::ImageLoad(e.to_string()))?;

    Ok(PreviewImage {
        format: format!("{:?}", format),
        width,
        height,
        data_url: encode_data_url(&upload.mime_type, &upload.bytes),
    })
}
