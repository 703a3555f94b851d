//! # 演算
//!
//! 2 つのオペランドに対する四則演算を定義する。
//!
//! ## ゼロ除算の判定
//!
//! 除数は `0.0` との厳密な等値比較で判定する（許容誤差なし）。
//! `1e-300` のような極小の非ゼロ除数は通常どおり除算され、
//! IEEE-754 に従って非常に大きな値や無限大になり得る。
//! `-0.0 == 0.0` は真であるため、負のゼロもゼロ除算として扱う。

use serde::Serialize;
use strum::IntoStaticStr;

use crate::DomainError;

/// 演算の入力となる 2 つのオペランド
///
/// パースされた値をそのまま保持する。丸めや正規化は行わない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

impl Operands {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// 演算の種類
///
/// シリアライズ結果（`"add"`, `"resta"`, `"multiply"`, `"division"`）は
/// レスポンスの `operation` フィールドにそのまま出力されるため、変更不可。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// 加算
    Add,
    /// 減算
    Resta,
    /// 乗算
    Multiply,
    /// 除算（除数 0 で失敗する）
    Division,
}

impl Operation {
    /// レスポンスに出力する演算タグ
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// URL パスのセグメント
    ///
    /// 除算のみタグ（`division`）とセグメント（`div`）が異なる。
    pub fn route_segment(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Resta => "resta",
            Self::Multiply => "multiply",
            Self::Division => "div",
        }
    }

    /// 演算を適用する
    ///
    /// 除算以外は全域関数であり、常に `Ok` を返す。
    pub fn apply(self, operands: Operands) -> Result<f64, DomainError> {
        let Operands { a, b } = operands;
        match self {
            Self::Add => Ok(a + b),
            Self::Resta => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Division => {
                if b == 0.0 {
                    return Err(DomainError::DivisionByZero { a, b });
                }
                Ok(a / b)
            }
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "resta" => Ok(Self::Resta),
            "multiply" => Ok(Self::Multiply),
            "division" => Ok(Self::Division),
            other => Err(DomainError::UnknownOperation(other.to_string())),
        }
    }
}
