//! 前端配置模块
//!
//! 后端地址按优先级解析：部署时注入的 `<meta>` 标签优先，
//! 否则回退到开发环境默认值。

use wasm_bindgen::JsCast;

/// 开发环境下的后端默认地址
const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";
/// 带版本号的 API 路径前缀
const API_PREFIX: &str = "/api/v1";

/// 前端运行时配置
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 后端根地址（不含 API 前缀）
    pub backend_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// 加载配置（优先级）：
    /// 1. `<meta name="solarwatch:api-url">` 标签（服务端注入）
    /// 2. 默认开发地址
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(url) = get_meta_content(&document, "solarwatch:api-url") {
                if !url.is_empty() {
                    config.backend_url = url;
                }
            }
        }

        config
    }

    /// 完整的 API 基础地址，所有请求路径都挂在它下面
    pub fn api_url(&self) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), API_PREFIX)
    }
}

/// 读取 `<meta name="...">` 标签的 content
fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_appends_version_prefix() {
        let config = AppConfig {
            backend_url: "http://localhost:8081/".to_string(),
        };
        assert_eq!(config.api_url(), "http://localhost:8081/api/v1");
    }
}
