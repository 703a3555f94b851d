//! # シャットダウンシグナル
//!
//! Ctrl+C または SIGTERM を待ち受け、`axum::serve` の graceful shutdown に渡す。

use tokio::signal;

/// 終了シグナルを受信するまで待機する
///
/// シグナルハンドラの登録に失敗した場合はログを出し、そのシグナルは待たない。
pub async fn shutdown_signal() {
    tokio::select! {
        () = wait_ctrl_c() => {},
        () = wait_sigterm() => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました。処理中のリクエスト完了後に停止します");
}

async fn wait_ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(%e, "Ctrl+C ハンドラの登録に失敗しました");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn wait_sigterm() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut handler) => {
            handler.recv().await;
        }
        Err(e) => {
            tracing::error!(%e, "SIGTERM ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_sigterm() {
    std::future::pending::<()>().await;
}
