//! # Calculator Service 設定
//!
//! 環境変数からサーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `CALCULATOR_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `CALCULATOR_PORT` | No | `8080` | ポート番号 |

use std::{env, net::SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// 設定読み込み時のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CALCULATOR_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),

    #[error("バインドアドレスが不正です: {0}")]
    InvalidAddress(String),
}

/// Calculator Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl CalculatorConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    ///
    /// 未設定の値はデフォルトを使う。ポートが数値として解釈できない場合は
    /// デフォルトに黙ってフォールバックせず、エラーを返す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("CALCULATOR_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("CALCULATOR_PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// バインド先の `SocketAddr` を組み立てる
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}
