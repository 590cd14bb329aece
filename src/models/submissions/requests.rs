use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::{
    deserialize_nullable, deserialize_optional_f64, deserialize_string_to_i64,
};

/// 批改请求：marks 与 feedback 必须出现，可以为 null
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct AddMarksRequest {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub submission_id: i64,
    #[serde(deserialize_with = "deserialize_optional_f64")]
    pub marks: Option<f64>,
    #[serde(deserialize_with = "deserialize_nullable")]
    pub feedback: Option<String>,
}
