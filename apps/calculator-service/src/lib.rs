//! # Calculator Service ライブラリ
//!
//! ルーター構築・設定・エラー変換・ハンドラを公開する。
//! バイナリ（`main.rs`）と結合テストの両方から利用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod json_number;
pub mod shutdown;
