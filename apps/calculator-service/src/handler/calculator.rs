//! # 四則演算ハンドラ
//!
//! クエリパラメータ `a`, `b` を受け取り、演算結果を JSON で返す。
//!
//! ## エンドポイント
//!
//! | ルート | 演算タグ | 失敗条件 |
//! |--------|----------|----------|
//! | `GET /calculator/add` | `add` | なし |
//! | `GET /calculator/resta` | `resta` | なし |
//! | `GET /calculator/multiply` | `multiply` | なし |
//! | `GET /calculator/div` | `division` | `b == 0` |
//!
//! `a`, `b` のいずれかが欠落している、または数値として解釈できない場合は
//! 演算を行わずに 400 を返す。

use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
    http::Uri,
};
use calculator_domain::{Operands, Operation};
use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// オペランドのクエリパラメータ
///
/// 両方とも必須。欠落時は `Query` 抽出の段階で拒否される。
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OperandsQuery {
    pub a: f64,
    pub b: f64,
}

impl From<OperandsQuery> for Operands {
    fn from(query: OperandsQuery) -> Self {
        Operands::new(query.a, query.b)
    }
}

/// 演算成功時のレスポンス
///
/// オーバーフローや非有限の入力で生じた無限大・NaN は
/// [`crate::json_number`] により文字列で出力する。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResponse {
    pub operation: Operation,
    #[serde(serialize_with = "crate::json_number::serialize")]
    pub a:         f64,
    #[serde(serialize_with = "crate::json_number::serialize")]
    pub b:         f64,
    #[serde(serialize_with = "crate::json_number::serialize")]
    pub result:    f64,
}

type CalculatorResult = Result<Json<OperationResponse>, CalculatorError>;

/// 共通処理: クエリの検証 → 演算 → レスポンス組み立て
fn calculate(
    operation: Operation,
    query: Result<Query<OperandsQuery>, QueryRejection>,
) -> CalculatorResult {
    let Query(query) = query?;
    let result = operation.apply(query.into())?;

    tracing::debug!(
        operation = %operation,
        a = query.a,
        b = query.b,
        result,
        "演算を実行しました"
    );

    Ok(Json(OperationResponse {
        operation,
        a: query.a,
        b: query.b,
        result,
    }))
}

/// GET /calculator/add
pub async fn add(query: Result<Query<OperandsQuery>, QueryRejection>) -> CalculatorResult {
    calculate(Operation::Add, query)
}

/// GET /calculator/resta
pub async fn resta(query: Result<Query<OperandsQuery>, QueryRejection>) -> CalculatorResult {
    calculate(Operation::Resta, query)
}

/// GET /calculator/multiply
pub async fn multiply(query: Result<Query<OperandsQuery>, QueryRejection>) -> CalculatorResult {
    calculate(Operation::Multiply, query)
}

/// GET /calculator/div
///
/// 除数がちょうど `0.0` の場合は 400 とともにオペランドを返す。
pub async fn division(query: Result<Query<OperandsQuery>, QueryRejection>) -> CalculatorResult {
    calculate(Operation::Division, query)
}

/// 未定義ルートのフォールバック
pub async fn not_found(uri: Uri) -> CalculatorError {
    CalculatorError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::app_builder::calculator_routes;

    async fn get(uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
        let sut = Router::new().nest("/calculator", calculator_routes());
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        let response = sut.oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, serde_json::from_slice(&bytes).unwrap())
    }

    // 正常系

    #[tokio::test]
    async fn test_add正常系_200で演算結果とオペランドを返す() {
        let (status, content_type, body) = get("/calculator/add?a=5&b=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            serde_json::json!({
                "operation": "add",
                "a": 5.0,
                "b": 3.0,
                "result": 8.0
            })
        );
    }

    #[tokio::test]
    async fn test_resta正常系_200で差を返す() {
        let (status, _, body) = get("/calculator/resta?a=10&b=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["operation"], "resta");
        assert_eq!(body["result"], 7.0);
    }

    #[tokio::test]
    async fn test_multiply正常系_負数同士で正の積を返す() {
        let (status, _, body) = get("/calculator/multiply?a=-3&b=-4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["operation"], "multiply");
        assert_eq!(body["result"], 12.0);
    }

    #[tokio::test]
    async fn test_div正常系_演算タグはdivisionになる() {
        let (status, _, body) = get("/calculator/div?a=10&b=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["operation"], "division");
        assert_eq!(body["result"], 5.0);
    }

    // 準正常系

    #[tokio::test]
    async fn test_divゼロ除算_400でエラーメッセージとオペランドを返す() {
        let (status, content_type, body) = get("/calculator/div?a=10&b=0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            serde_json::json!({
                "error": "Division by zero is not allowed",
                "a": 10.0,
                "b": 0.0
            })
        );
        assert!(body.get("result").is_none());
    }

    #[tokio::test]
    async fn test_div結果がオーバーフローするとinfinityを文字列で返す() {
        let (status, _, body) = get("/calculator/div?a=1e300&b=1e-300").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "Infinity");
        assert_eq!(body["a"], 1e300);
    }

    #[rstest]
    #[case("/calculator/multiply?a=5")]
    #[case("/calculator/add?b=5")]
    #[case("/calculator/resta")]
    #[case("/calculator/div?a=1")]
    #[tokio::test]
    async fn test_オペランド欠落で400を返す(#[case] uri: &str) {
        let (status, _, body) = get(uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[rstest]
    #[case("/calculator/add?a=abc&b=1")]
    #[case("/calculator/resta?a=1&b=")]
    #[case("/calculator/multiply?a=1,5&b=2")]
    #[case("/calculator/div?a=1&b=zero")]
    #[tokio::test]
    async fn test_数値でないオペランドで400を返す(#[case] uri: &str) {
        let (status, _, body) = get(uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["type"],
            "https://calculator.example.com/errors/bad-request"
        );
    }
}
