//! # Observability 基盤
//!
//! グローバルサブスクライバーの登録、サービス単位のルートスパン、
//! Request ID の採番とリクエストスパンをまとめる。
//!
//! | 環境変数 | 既定値 | 用途 |
//! |----------|--------|------|
//! | `RUST_LOG` | [`DEFAULT_LOG_FILTER`] | ログレベル |
//! | `LOG_FORMAT` | `pretty` | `json` / `pretty` |

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,calculator=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 JSON（ログ集約基盤向け）
    Json,
    /// 端末向けの整形出力
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値を解釈する
    ///
    /// 大文字小文字は区別する。解釈できない値は `None`。
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// ルートスパン `app` の `service` フィールドに入る
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// プロセスの環境変数から組み立てる
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// 任意のキー参照関数から組み立てる
    ///
    /// `LOG_FORMAT` が未設定なら Pretty。解釈できない値は stderr に警告して Pretty にする。
    /// サブスクライバー登録前に呼ばれるため `tracing` には出せない。
    pub fn from_lookup<F>(service_name: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT") {
            None => LogFormat::default(),
            Some(raw) => LogFormat::from_name(&raw).unwrap_or_else(|| {
                eprintln!("WARNING: unknown LOG_FORMAT={raw:?}, falling back to pretty");
                LogFormat::Pretty
            }),
        };
        Self::new(service_name, log_format)
    }

    /// サービス全体を包むルートスパン
    ///
    /// `main` で `entered()` したガードを保持している間、
    /// すべてのログに `service` が付く（JSON では `span.service`）。
    #[cfg(feature = "observability")]
    pub fn app_span(&self) -> tracing::Span {
        tracing::info_span!("app", service = %self.service_name)
    }
}

/// グローバルサブスクライバーを登録し、ルートスパンを返す
///
/// プロセスにつき一度だけ呼ぶこと（二度目は `init()` が panic する）。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) -> tracing::Span {
    use tracing_subscriber::{
        EnvFilter,
        Layer as _,
        layer::SubscriberExt,
        util::SubscriberInitExt,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    config.app_span()
}

/// Request ID ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v7 で Request ID を生成する
///
/// `SetRequestIdLayer` に渡す。クライアントが `X-Request-Id` を送ってきた場合は
/// レイヤー側がその値を優先するため、ここは呼ばれない。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let value = http::HeaderValue::from_str(&uuid::Uuid::now_v7().to_string()).ok()?;
        Some(tower_http::request_id::RequestId::new(value))
    }
}

/// HTTP リクエスト用のスパンを作る
///
/// `TraceLayer::make_span_with` に渡す。`SetRequestIdLayer` より内側に置くこと。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[rstest]
    #[case("json", Some(LogFormat::Json))]
    #[case("pretty", Some(LogFormat::Pretty))]
    #[case("JSON", None)]
    #[case("", None)]
    #[case("text", None)]
    fn test_from_nameはjsonとprettyだけを受け付ける(
        #[case] name: &str,
        #[case] expected: Option<LogFormat>,
    ) {
        assert_eq!(LogFormat::from_name(name), expected);
    }

    #[test]
    fn test_log_format未設定ではprettyになる() {
        let config = TracingConfig::from_lookup("calculator-service", lookup_from(&[]));

        assert_eq!(
            config,
            TracingConfig::new("calculator-service", LogFormat::Pretty)
        );
    }

    #[test]
    fn test_log_format_jsonでjsonになる() {
        let config =
            TracingConfig::from_lookup("calculator-service", lookup_from(&[("LOG_FORMAT", "json")]));

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.service_name, "calculator-service");
    }

    #[test]
    fn test_不明なlog_formatはprettyにフォールバックする() {
        let config =
            TracingConfig::from_lookup("calculator-service", lookup_from(&[("LOG_FORMAT", "yaml")]));

        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
