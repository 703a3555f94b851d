//! # Calculator Service サーバー
//!
//! 四則演算をクエリパラメータ付きの GET エンドポイントとして公開する。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | GET | `/calculator/add?a=&b=` | 加算 |
//! | GET | `/calculator/resta?a=&b=` | 減算 |
//! | GET | `/calculator/multiply?a=&b=` | 乗算 |
//! | GET | `/calculator/div?a=&b=` | 除算（`b == 0` で 400） |
//! | GET | `/health` | ヘルスチェック |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CALCULATOR_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CALCULATOR_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,calculator=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p calculator-service
//!
//! # 本番環境
//! CALCULATOR_PORT=8080 LOG_FORMAT=json cargo run -p calculator-service --release
//! ```

use anyhow::Context as _;
use calculator_service::{
    app_builder::build_app,
    config::CalculatorConfig,
    shutdown::shutdown_signal,
};
use calculator_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化（以降のログはすべて app スパンの中）
    let tracing_config = TracingConfig::from_env(env!("CARGO_PKG_NAME"));
    let _tracing_guard = init_tracing(&tracing_config).entered();

    // 設定読み込み
    let config = CalculatorConfig::from_env().context("設定の読み込みに失敗しました")?;
    let addr = config.socket_addr()?;

    tracing::info!("Calculator Service サーバーを起動します: {}", addr);

    let app = build_app();

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Calculator Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Calculator Service サーバーを停止しました");

    Ok(())
}
