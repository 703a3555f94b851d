//! # Calculator ドメイン層
//!
//! 四則演算の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - HTTP や JSON の知識を持たない純粋な計算ロジックのみを配置する
//! - 状態を持たない。すべての演算は入力のみから結果を決定する
//! - 失敗し得る演算（除算）は `Result` で表現し、呼び出し側に判断を委ねる
//!
//! ## 依存関係の方向
//!
//! ```text
//! calculator-service → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`operation`] - 演算の種類とオペランド
//!
//! ## 使用例
//!
//! ```rust
//! use calculator_domain::{DomainError, Operands, Operation};
//!
//! let operands = Operands::new(10.0, 2.0);
//! assert_eq!(Operation::Division.apply(operands), Ok(5.0));
//!
//! let zero = Operands::new(10.0, 0.0);
//! assert_eq!(
//!     Operation::Division.apply(zero),
//!     Err(DomainError::DivisionByZero { a: 10.0, b: 0.0 })
//! );
//! ```

pub mod error;
pub mod operation;

pub use error::DomainError;
pub use operation::{Operands, Operation};
