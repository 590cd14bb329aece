use serde::Serialize;
use ts_rs::TS;

/// 提交列表项（教师视角，包含学生姓名）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListItem {
    pub id: i64,
    pub student_name: String,
    pub filename: String,
    pub marks: Option<f64>,
    pub feedback: Option<String>,
}

/// 学生成绩项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct StudentResultItem {
    pub filename: String,
    pub marks: Option<f64>,
    pub feedback: Option<String>,
}
