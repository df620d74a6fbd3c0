//! API 错误类型模块
//!
//! 网关把所有失败归一化为固定的错误分类，资源客户端在此基础上
//! 追加操作前缀，页面只负责展示 message。

use std::fmt;

// =========================================================
// 错误分类枚举
// =========================================================

/// 错误分类
/// 对应网关的归一化规则，详见 `gateway` 模块
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP 404
    NotFound,
    /// HTTP 5xx
    Server,
    /// 响应体携带结构化 message 字段（原样透传）
    Api,
    /// 请求未到达服务器（连接失败 / 超时中断）
    Network,
    /// 前端本地校验失败，未发出任何请求
    Validation,
    /// 其余情况（非常规状态码、响应体解析失败等）
    Other,
}

// =========================================================
// 核心错误类型
// =========================================================

/// API 调用错误
///
/// 包含分类与人类可读消息。`context` 在保留分类的前提下
/// 给消息追加操作前缀。
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    pub fn not_found() -> Self {
        Self::new(ApiErrorKind::NotFound, "Resource not found")
    }

    pub fn server(status: u16) -> Self {
        Self::new(
            ApiErrorKind::Server,
            format!(
                "Internal server error ({}). Please try again later.",
                status
            ),
        )
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Api, message)
    }

    pub fn network(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::new(
            ApiErrorKind::Network,
            if detail.is_empty() {
                "Network error. Please check your connection and try again.".to_string()
            } else {
                format!("Network error: {}", detail)
            },
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn other(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(
            ApiErrorKind::Other,
            if body.is_empty() {
                format!("Unexpected response (HTTP {})", status)
            } else {
                format!("Unexpected response (HTTP {}): {}", status, body)
            },
        )
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::new(
            ApiErrorKind::Other,
            format!("Failed to decode response: {}", detail.into()),
        )
    }

    /// 追加操作前缀，保留原始分类与消息
    pub fn context(self, prefix: &str) -> Self {
        Self {
            kind: self.kind,
            message: format!("{}: {}", prefix, self.message),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_prefixes_message_and_keeps_kind() {
        let err = ApiError::not_found().context("Failed to fetch plants");
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.to_string(), "Failed to fetch plants: Resource not found");
    }

    #[test]
    fn validation_errors_carry_the_field_name() {
        let err = ApiError::validation("voltage must be a valid number");
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert!(err.to_string().contains("voltage"));
    }
}
