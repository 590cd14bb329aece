use serde::Deserialize;
use ts_rs::TS;

/// 添加单词
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vocabulary.ts")]
pub struct AddWordRequest {
    pub english: String,
    pub telugu: String,
    pub hindi: String,
}

/// 翻译请求，language 为词汇表中的语言键（如 telugu、hindi）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/vocabulary.ts")]
pub struct TranslateRequest {
    pub text: String,
    pub language: String,
}
