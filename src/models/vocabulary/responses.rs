use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 翻译结果，explanation 与输入单词一一对应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vocabulary.ts")]
pub struct TranslationResponse {
    pub translation: String,
    pub explanation: Vec<String>,
}
