//! HTTP 网关模块
//!
//! 所有出站请求的唯一通道：拼接基础地址、注入 Bearer 令牌、
//! 统一 JSON 头、30 秒超时中断，并把失败归一化为 `ApiError`。
//! 每次调用记录方法与路径，失败另记一条，仅用于运维排查。

use super::error::{ApiError, ApiResult};
use crate::web::{BrowserSession, SessionStore, Timeout};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{log, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use solarwatch_shared::HEADER_AUTHORIZATION;

/// 单次请求的超时上限（毫秒）
const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// HTTP 网关
///
/// 仅持有基础地址，可廉价 Clone 给各资源客户端共享。
/// 令牌在每次请求时从会话存储读取，登录/注销立即生效。
#[derive(Clone, Debug, PartialEq)]
pub struct ApiGateway {
    base_url: String,
}

impl ApiGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 公共请求头：Accept 与（存在会话时的）Bearer 令牌
    fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match BrowserSession.token() {
            Some(token) => builder.header(HEADER_AUTHORIZATION, &format!("Bearer {}", token)),
            None => builder,
        }
    }

    // --- 公开的请求方法 ---

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log!("GET {}", path);
        let (signal, _guard) = abort_guard();
        let request = self
            .decorate(Request::get(&self.url(path)))
            .abort_signal(signal.as_ref())
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        self.dispatch("GET", path, request).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        log!("POST {}", path);
        let (signal, _guard) = abort_guard();
        let request = self
            .decorate(Request::post(&self.url(path)))
            .abort_signal(signal.as_ref())
            .json(body)
            .map_err(|e| ApiError::network(e.to_string()))?;
        self.dispatch("POST", path, request).await
    }

    /// 空请求体的 POST（参数通过查询串传递，如确认告警）
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log!("POST {}", path);
        let (signal, _guard) = abort_guard();
        let request = self
            .decorate(Request::post(&self.url(path)))
            .header("Content-Type", "application/json")
            .abort_signal(signal.as_ref())
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        self.dispatch("POST", path, request).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        log!("PUT {}", path);
        let (signal, _guard) = abort_guard();
        let request = self
            .decorate(Request::put(&self.url(path)))
            .abort_signal(signal.as_ref())
            .json(body)
            .map_err(|e| ApiError::network(e.to_string()))?;
        self.dispatch("PUT", path, request).await
    }

    /// 空请求体的 PUT（状态流转、指派等查询串操作）
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log!("PUT {}", path);
        let (signal, _guard) = abort_guard();
        let request = self
            .decorate(Request::put(&self.url(path)))
            .header("Content-Type", "application/json")
            .abort_signal(signal.as_ref())
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        self.dispatch("PUT", path, request).await
    }

    /// 纯文本请求体的 PUT（技术员备注接口约定为 text/plain）
    pub async fn put_text<T: DeserializeOwned>(&self, path: &str, body: &str) -> ApiResult<T> {
        log!("PUT {}", path);
        let (signal, _guard) = abort_guard();
        let request = self
            .decorate(Request::put(&self.url(path)))
            .header("Content-Type", "text/plain")
            .abort_signal(signal.as_ref())
            .body(body)
            .map_err(|e| ApiError::network(e.to_string()))?;
        self.dispatch("PUT", path, request).await
    }

    /// 空请求体、且不关心响应体的 POST（如注销通知）
    pub async fn post_unit(&self, path: &str) -> ApiResult<()> {
        log!("POST {}", path);
        let (signal, _guard) = abort_guard();
        let request = self
            .decorate(Request::post(&self.url(path)))
            .header("Content-Type", "application/json")
            .abort_signal(signal.as_ref())
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;

        let response = self.exchange("POST", path, request).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(self.fail("POST", path, response).await)
        }
    }

    /// DELETE：成功时不读取响应体
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        log!("DELETE {}", path);
        let (signal, _guard) = abort_guard();
        let request = self
            .decorate(Request::delete(&self.url(path)))
            .abort_signal(signal.as_ref())
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;

        let response = self.exchange("DELETE", path, request).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(self.fail("DELETE", path, response).await)
        }
    }

    // --- 内部执行与归一化 ---

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        request: Request,
    ) -> ApiResult<T> {
        let response = self.exchange(method, path, request).await?;
        if !response.ok() {
            return Err(self.fail(method, path, response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    async fn exchange(
        &self,
        method: &'static str,
        path: &str,
        request: Request,
    ) -> ApiResult<Response> {
        request.send().await.map_err(|e| {
            // 请求从未到达服务器：连接失败或超时中断
            let err = ApiError::network(e.to_string());
            warn!("{} {} failed: {}", method, path, err);
            err
        })
    }

    async fn fail(&self, method: &'static str, path: &str, response: Response) -> ApiError {
        let err = classify_failure(response).await;
        warn!("{} {} failed: {}", method, path, err);
        err
    }
}

/// 创建请求中断句柄：超时触发 abort，守卫 drop 时取消定时器
fn abort_guard() -> (Option<web_sys::AbortSignal>, Option<Timeout>) {
    match web_sys::AbortController::new() {
        Ok(controller) => {
            let signal = controller.signal();
            let timeout = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
            (Some(signal), Some(timeout))
        }
        Err(_) => (None, None),
    }
}

/// 非 2xx 响应的归一化
///
/// 规则（顺序即优先级）：404 -> NotFound；5xx -> Server；
/// 响应体带 message 字段 -> Api（消息原样透传）；其余 -> Other。
async fn classify_failure(response: Response) -> ApiError {
    let status = response.status();
    if status == 404 {
        return ApiError::not_found();
    }
    if status >= 500 {
        return ApiError::server(status);
    }

    let body = response.text().await.unwrap_or_default();
    match extract_message(&body) {
        Some(message) => ApiError::api(message),
        None => ApiError::other(status, body.chars().take(200).collect::<String>()),
    }
}

/// 从响应体中提取结构化的 message 字段
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_structured_message() {
        let body = r#"{"status": 400, "message": "Panel ID already exists"}"#;
        assert_eq!(
            extract_message(body),
            Some("Panel ID already exists".to_string())
        );
    }

    #[test]
    fn ignores_bodies_without_message() {
        assert_eq!(extract_message("plain text"), None);
        assert_eq!(extract_message(r#"{"error": "nope"}"#), None);
        assert_eq!(extract_message(r#"{"message": 42}"#), None);
    }

    #[test]
    fn gateway_normalizes_base_url() {
        let gateway = ApiGateway::new("http://localhost:8081/api/v1/");
        assert_eq!(
            gateway.url("/plants"),
            "http://localhost:8081/api/v1/plants"
        );
        assert_eq!(gateway.url("plants"), "http://localhost:8081/api/v1/plants");
    }
}
