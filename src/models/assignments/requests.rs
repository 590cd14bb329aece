use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::deserialize_string_to_i64;

// 给学生布置 PDF
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignPdfRequest {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub student_id: i64,
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub pdf_id: i64,
}
