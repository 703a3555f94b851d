//! # ドメイン層エラー定義
//!
//! 演算の実行中に発生し得る例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `DivisionByZero` | 400 Bad Request | 除数がちょうど 0 |
//! | `UnknownOperation` | 404 Not Found | 未知の演算タグ |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// ゼロ除算
    ///
    /// 除数 `b` が `0.0` と厳密に等しい場合に発生する。
    /// レスポンスでオペランドをそのまま返すため、両方の値を保持する。
    #[error("Division by zero is not allowed")]
    DivisionByZero {
        /// 被除数
        a: f64,
        /// 除数（常に `0.0` または `-0.0`）
        b: f64,
    },

    /// 未知の演算
    #[error("不明な演算です: {0}")]
    UnknownOperation(String),
}
