use serde::Serialize;
use ts_rs::TS;

/// 学生被布置的 PDF
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignedPdfItem {
    pub filename: String,
}
