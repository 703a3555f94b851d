//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、計算そのものはドメイン層に委譲

pub mod calculator;
pub mod health;

pub use calculator::{
    OperandsQuery,
    OperationResponse,
    add,
    division,
    multiply,
    not_found,
    resta,
};
pub use health::health_check;
