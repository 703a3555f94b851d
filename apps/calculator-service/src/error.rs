//! # Calculator Service エラー定義
//!
//! ハンドラから返すエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## レスポンス形状
//!
//! | CalculatorError | HTTP Status | ボディ |
//! |-----------------|-------------|--------|
//! | MalformedInput | 400 | RFC 9457 Problem Details |
//! | DivisionByZero | 400 | `{"error", "a", "b"}` |
//! | NotFound | 404 | RFC 9457 Problem Details |
//!
//! ゼロ除算のボディは既存クライアントとの互換性のため独自形状のまま維持する。

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calculator_domain::DomainError;
use calculator_shared::ErrorResponse;
use serde::Serialize;
use thiserror::Error;

/// Calculator Service で発生するエラー
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// オペランドの欠落・数値として解釈できない入力
    #[error("入力が不正です: {0}")]
    MalformedInput(String),

    /// 除数がちょうど 0
    #[error("Division by zero is not allowed")]
    DivisionByZero { a: f64, b: f64 },

    /// 存在しないルート
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),
}

/// ゼロ除算時のレスポンスボディ
///
/// 入力値をそのまま返し、クライアント側で確認できるようにする。
/// `a` が無限大・NaN の場合は [`crate::json_number`] の文字列表現になる。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionByZeroResponse {
    pub error: String,
    #[serde(serialize_with = "crate::json_number::serialize")]
    pub a:     f64,
    #[serde(serialize_with = "crate::json_number::serialize")]
    pub b:     f64,
}

impl From<DomainError> for CalculatorError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DivisionByZero { a, b } => Self::DivisionByZero { a, b },
            DomainError::UnknownOperation(tag) => Self::NotFound(tag),
        }
    }
}

impl From<QueryRejection> for CalculatorError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedInput(rejection.body_text())
    }
}

impl IntoResponse for CalculatorError {
    fn into_response(self) -> Response {
        match self {
            CalculatorError::MalformedInput(detail) => {
                tracing::info!(detail = %detail, "不正な入力を拒否しました");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(detail)),
                )
                    .into_response()
            }
            CalculatorError::DivisionByZero { a, b } => {
                tracing::info!(a, b, "ゼロ除算を拒否しました");
                (
                    StatusCode::BAD_REQUEST,
                    Json(DivisionByZeroResponse {
                        error: self.to_string(),
                        a,
                        b,
                    }),
                )
                    .into_response()
            }
            CalculatorError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found(format!(
                    "リソースが見つかりません: {path}"
                ))),
            )
                .into_response(),
        }
    }
}
