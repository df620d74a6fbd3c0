use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

// =========================================================
// 测试用内存存储
// =========================================================

#[derive(Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.values.borrow_mut().remove(key).is_some()
    }
}

fn sample_user(role: Role) -> User {
    User {
        user_id: 42,
        username: "coco".to_string(),
        email: None,
        role,
        first_name: None,
        last_name: None,
    }
}

// =========================================================
// 会话恢复
// =========================================================

#[test]
fn restore_without_session_falls_back_to_demo_admin() {
    let storage = MemoryStore::default();
    let (state, had_session) = AuthState::restore(&storage);

    assert!(!had_session);
    assert!(state.is_logged_in);
    let user = state.user.expect("demo user expected");
    assert!(user.role.is_admin());
    assert_eq!(user.username, "admin");
}

#[test]
fn restore_reads_persisted_session() {
    let storage = MemoryStore::default();
    storage.save_session("token-123", &sample_user(Role::Technician));

    let (state, had_session) = AuthState::restore(&storage);
    assert!(had_session);
    assert!(state.is_logged_in);
    assert_eq!(state.user.unwrap().username, "coco");
}

#[test]
fn restore_requires_both_token_and_user() {
    let storage = MemoryStore::default();
    storage.set(solarwatch_shared::STORAGE_KEY_TOKEN, "orphan-token");

    // 只有令牌没有用户对象：按无会话处理
    let (_, had_session) = AuthState::restore(&storage);
    assert!(!had_session);
}

// =========================================================
// 注销
// =========================================================

#[test]
fn logout_clears_storage_and_state() {
    let storage = MemoryStore::default();
    storage.save_session("token-123", &sample_user(Role::Admin));

    // 本地清理不依赖服务端注销调用的结果
    let state = AuthState::apply_logout(&storage);

    assert!(!state.is_logged_in);
    assert!(state.user.is_none());
    assert!(storage.token().is_none());
    assert!(storage.load_user().is_none());
}

// =========================================================
// 演示模式角色切换
// =========================================================

#[test]
fn switch_role_replaces_role_in_place() {
    let mut state = AuthState::logged_in(sample_user(Role::Admin));
    state.switch_role(Role::Viewer);

    let user = state.user.unwrap();
    assert_eq!(user.role, Role::Viewer);
    // 其余字段保持不变
    assert_eq!(user.username, "coco");
    assert_eq!(user.user_id, 42);
}

#[test]
fn switch_role_on_empty_state_creates_demo_user() {
    let mut state = AuthState::logged_out();
    state.switch_role(Role::Technician);

    assert!(state.is_logged_in);
    assert_eq!(state.role(), Some(Role::Technician));
}

#[test]
fn capability_passthrough_reflects_current_role() {
    let mut state = AuthState::logged_in(sample_user(Role::Admin));
    assert!(state.can_access_settings());
    assert!(state.can_access_analytics());
    assert!(state.can_access_history());
    assert!(state.can_access_user_management());

    state.switch_role(Role::Technician);
    assert!(!state.can_access_settings());
    assert!(state.can_access_panels());
    assert!(state.can_analyze());

    state.switch_role(Role::Viewer);
    assert!(!state.can_access_panels());
    assert!(!state.can_access_alerts());

    assert!(!AuthState::logged_out().can_access_settings());
}
