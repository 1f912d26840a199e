//! サーバー通信

pub mod predict;

pub use predict::FetchTransport;
