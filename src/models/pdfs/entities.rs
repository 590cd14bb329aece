use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pdf.ts")]
pub struct Pdf {
    pub id: i64,
    // 清理后的文件名，同时也是上传目录中的文件名
    pub filename: String,
    // 上传教师的用户ID
    pub uploaded_by: i64,
}
