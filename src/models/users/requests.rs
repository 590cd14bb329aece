use serde::Deserialize;

use super::entities::UserRole;

// 创建用户请求（仅用于启动时初始化账号，API 不提供注册）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}
