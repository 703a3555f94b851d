//! # アプリケーション構築
//!
//! ルーターとミドルウェアレイヤーを組み立てる。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use axum::{Router, routing::get};
use calculator_domain::Operation;
use calculator_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{add, division, health_check, multiply, not_found, resta};

fn operation_path(operation: Operation) -> String {
    format!("/{}", operation.route_segment())
}

/// `/calculator` 配下にネストする演算ルート
pub fn calculator_routes() -> Router {
    Router::new()
        .route(&operation_path(Operation::Add), get(add))
        .route(&operation_path(Operation::Resta), get(resta))
        .route(&operation_path(Operation::Multiply), get(multiply))
        .route(&operation_path(Operation::Division), get(division))
}

/// アプリケーション全体のルーターを構築する
pub fn build_app() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/calculator", calculator_routes())
        .fallback(not_found)
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
