use serde::Serialize;
use ts_rs::TS;

/// 学生列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct StudentListItem {
    pub id: i64,
    pub name: String,
}
