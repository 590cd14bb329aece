use serde::Serialize;
use ts_rs::TS;

use crate::models::users::entities::{User, UserRole};

// 登录成功返回的用户信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
}

impl From<User> for LoginResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
        }
    }
}
