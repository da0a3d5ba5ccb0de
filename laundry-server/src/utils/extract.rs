//! JSON body extractor
//!
//! axum 默认的 `Json` 在解析失败时返回纯文本错误，
//! `AppJson` 把拒绝原因转换成 [`AppError`]，保证所有错误响应格式一致。

use axum::{
    extract::{FromRequest, Request, rejection::JsonRejection},
    Json,
};
use serde::de::DeserializeOwned;

use crate::utils::{AppError, ErrorCode};

/// JSON 请求体提取器
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let code = match &rejection {
        JsonRejection::MissingJsonContentType(_) => ErrorCode::InvalidRequest,
        JsonRejection::JsonSyntaxError(_) => ErrorCode::InvalidFormat,
        _ => ErrorCode::ValidationFailed,
    };
    AppError::with_message(code, rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request as HttpRequest, StatusCode, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        value: String,
    }

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let AppJson(payload) = AppJson::<Payload>::from_request(json_request(r#"{"value":"x"}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.value, "x");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let err = AppJson::<Payload>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_syntax_error() {
        let err = AppJson::<Payload>::from_request(json_request("{"), &())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"value":"x"}"#))
            .unwrap();
        let err = AppJson::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }
}
