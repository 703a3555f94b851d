//! # JSON 数値のシリアライズ
//!
//! JSON には無限大と NaN の表現がないため、serde_json の既定では `null` になり、
//! `+inf` / `-inf` / `NaN` の区別もオペランドのエコーも失われる。
//! 非有限値は `"Infinity"`, `"-Infinity"`, `"NaN"` の文字列として出力する。
//!
//! ```rust,ignore
//! #[derive(Serialize)]
//! struct Body {
//!     #[serde(serialize_with = "crate::json_number::serialize")]
//!     result: f64,
//! }
//! ```

use serde::Serializer;

/// `#[serde(serialize_with = ...)]` 用のシリアライザ
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = *value;
    if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value == f64::INFINITY {
        serializer.serialize_str("Infinity")
    } else if value == f64::NEG_INFINITY {
        serializer.serialize_str("-Infinity")
    } else {
        serializer.serialize_f64(value)
    }
}
