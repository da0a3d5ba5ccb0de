//! Check API Handlers

use axum::{Json, extract::State};

use crate::auth::StoredCredential;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{ApiResponse, AppError, AppJson, AppResult, ErrorCode};
use shared::models::CheckRequest;

const CHECK_OK_MESSAGE: &str = "Password is correct";

/// POST /check - 校验提交的 PIN
///
/// - 无凭据记录: 404
/// - 不匹配: 401
/// - 凭据记录损坏 / 存储故障: 500 (响应体不包含原因)
pub async fn check(
    State(state): State<ServerState>,
    payload: Result<AppJson<CheckRequest>, AppError>,
) -> AppResult<Json<ApiResponse<()>>> {
    let AppJson(req) = payload.map_err(redact_rejection)?;

    let doc = state
        .credentials
        .find_one()
        .await?
        .ok_or_else(AppError::credential_not_found)?;

    let stored = StoredCredential::try_from(doc).inspect_err(|e| {
        tracing::error!(error = %e, "Stored credential is malformed");
    })?;

    if stored.verify_blocking(req.value).await? {
        security_log!("INFO", "check_success");
        Ok(Json(ApiResponse::message(CHECK_OK_MESSAGE)))
    } else {
        security_log!("WARN", "check_failed");
        Err(AppError::invalid_credentials())
    }
}

/// 解析错误信息可能回显提交内容，这里统一替换；其他拒绝原因保持原样
fn redact_rejection(err: AppError) -> AppError {
    match err.code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidFormat => {
            AppError::with_message(err.code, "value is required and must be a string")
        }
        _ => err,
    }
}
