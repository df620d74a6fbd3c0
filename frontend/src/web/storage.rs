//! 会话存储模块
//!
//! 使用 `web_sys::Storage` 封装浏览器 LocalStorage，持久化的键只有三个：
//! 会话令牌、序列化的用户对象、主题偏好。
//! 通过 `SessionStore` trait 抽象底层存储，测试中可注入内存实现。

use solarwatch_shared::{STORAGE_KEY_THEME, STORAGE_KEY_TOKEN, STORAGE_KEY_USER, User};

/// 会话持久化接口
///
/// 提供带类型的读写方法（默认实现），底层只需要字符串键值操作。
pub trait SessionStore {
    /// 读取字符串值，键不存在或出错时返回 None
    fn get(&self, key: &str) -> Option<String>;

    /// 写入字符串值，返回操作是否成功
    fn set(&self, key: &str, value: &str) -> bool;

    /// 删除键值对，返回操作是否成功
    fn remove(&self, key: &str) -> bool;

    // --- 带类型的会话操作 ---

    fn token(&self) -> Option<String> {
        self.get(STORAGE_KEY_TOKEN)
    }

    fn load_user(&self) -> Option<User> {
        let raw = self.get(STORAGE_KEY_USER)?;
        serde_json::from_str(&raw).ok()
    }

    /// 登录/注册成功后保存完整会话
    fn save_session(&self, token: &str, user: &User) {
        self.set(STORAGE_KEY_TOKEN, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.set(STORAGE_KEY_USER, &json);
        }
    }

    /// 无条件清除令牌与用户，注销时调用
    fn clear_session(&self) {
        self.remove(STORAGE_KEY_TOKEN);
        self.remove(STORAGE_KEY_USER);
    }

    fn theme(&self) -> Option<String> {
        self.get(STORAGE_KEY_THEME)
    }

    fn save_theme(&self, theme: &str) {
        self.set(STORAGE_KEY_THEME, theme);
    }
}

/// 浏览器 LocalStorage 实现
pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
