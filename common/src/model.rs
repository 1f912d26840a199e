//! 診断モデルの選択肢
//!
//! サーバー側で用意されている分類器の識別子と、
//! 画面表示用のラベル・クラス名を定義する

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// モデル選択（`model_type` フィールドの値）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    #[default]
    Covid,
    BrainTumor,
}

impl ModelType {
    /// 選択肢の一覧（表示順）
    pub const ALL: [ModelType; 2] = [ModelType::Covid, ModelType::BrainTumor];

    /// 送信時の値
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Covid => "covid",
            ModelType::BrainTumor => "brain_tumor",
        }
    }

    /// `<select>` 等に表示するラベル
    pub fn label(&self) -> &'static str {
        match self {
            ModelType::Covid => "COVID-19 X-ray",
            ModelType::BrainTumor => "Brain Tumor MRI",
        }
    }

    /// サーバー側分類器が返しうるクラス名
    pub fn class_names(&self) -> &'static [&'static str] {
        match self {
            ModelType::Covid => &["COVID", "Normal", "Pneumonia"],
            ModelType::BrainTumor => &["glioma", "notumor", "meningioma", "pituitary"],
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        ModelType::ALL
            .into_iter()
            .find(|m| m.as_str() == value)
            .ok_or_else(|| Error::UnknownModel(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(ModelType::Covid.as_str(), "covid");
        assert_eq!(ModelType::BrainTumor.as_str(), "brain_tumor");
        assert_eq!(ModelType::BrainTumor.to_string(), "brain_tumor");
    }

    #[test]
    fn test_parse() {
        assert_eq!("covid".parse::<ModelType>().unwrap(), ModelType::Covid);
        assert_eq!(" brain_tumor ".parse::<ModelType>().unwrap(), ModelType::BrainTumor);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Brain Tumor MRI".parse::<ModelType>().unwrap_err();
        assert!(matches!(err, Error::UnknownModel(ref v) if v == "Brain Tumor MRI"));
    }

    #[test]
    fn test_default_is_covid() {
        assert_eq!(ModelType::default(), ModelType::Covid);
    }

    #[test]
    fn test_serde_matches_wire_value() {
        let json = serde_json::to_string(&ModelType::BrainTumor).unwrap();
        assert_eq!(json, "\"brain_tumor\"");
        let parsed: ModelType = serde_json::from_str("\"covid\"").unwrap();
        assert_eq!(parsed, ModelType::Covid);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(ModelType::Covid.class_names().len(), 3);
        assert!(ModelType::BrainTumor.class_names().contains(&"notumor"));
    }
}
