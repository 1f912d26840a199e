//! MedScan CLI
//!
//! 画像を推論サーバーの `/predict` へ送信し、診断結果を表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod diagnose;
pub mod error;
pub mod logging;
pub mod preview;
pub mod render;
