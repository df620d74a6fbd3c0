//! 演示身份提供者
//!
//! 只在演示模式下使用的本地身份合成，不发任何请求、不产生令牌，
//! 与真实凭据路径（`api::auth`）没有共享代码。角色切换是纯粹的
//! 多角色演示便利，不构成访问控制。

use solarwatch_shared::{Role, User};

/// 无持久会话时的默认身份：演示用管理员
pub fn default_admin() -> User {
    User {
        user_id: 1,
        username: "admin".to_string(),
        email: Some("admin@solarwatch.io".to_string()),
        role: Role::Admin,
        first_name: Some("Admin".to_string()),
        last_name: Some("User".to_string()),
    }
}

/// 按角色合成演示用户
pub fn demo_user(role: Role) -> User {
    match role {
        Role::Admin => default_admin(),
        Role::Technician => User {
            user_id: 2,
            username: "technician".to_string(),
            email: Some("technician@solarwatch.io".to_string()),
            role: Role::Technician,
            first_name: Some("Field".to_string()),
            last_name: Some("Technician".to_string()),
        },
        Role::Viewer => User {
            user_id: 3,
            username: "viewer".to_string(),
            email: Some("viewer@solarwatch.io".to_string()),
            role: Role::Viewer,
            first_name: Some("Read".to_string()),
            last_name: Some("Only".to_string()),
        },
    }
}
