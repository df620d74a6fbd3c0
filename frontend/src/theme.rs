//! 主题偏好模块
//!
//! 亮/暗主题持久化到 LocalStorage，并写入文档根元素的
//! `data-theme` 属性供样式层使用。

use crate::web::{BrowserSession, SessionStore};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_str(value: &str) -> Theme {
        if value == "dark" { Theme::Dark } else { Theme::Light }
    }
}

/// 主题上下文
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    /// 创建上下文：读取持久化偏好并立即应用到文档
    pub fn new() -> Self {
        let initial = BrowserSession
            .theme()
            .map(|value| Theme::from_str(&value))
            .unwrap_or_default();
        apply_to_document(initial);

        let (theme, set_theme) = signal(initial);
        Self { theme, set_theme }
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let theme = self.theme;
        Signal::derive(move || theme.get() == Theme::Dark)
    }

    /// 切换主题：更新信号、持久化、写回文档属性
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        BrowserSession.save_theme(next.as_str());
        apply_to_document(next);
        self.set_theme.set(next);
    }
}

fn apply_to_document(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// 从 Context 获取主题上下文
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_alternates_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn unknown_persisted_values_fall_back_to_light() {
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str("light"), Theme::Light);
        assert_eq!(Theme::from_str("solarized"), Theme::Light);
    }
}
