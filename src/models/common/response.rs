use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ClassroomError;

// 统一的消息响应结构 `{ "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 根据错误类型构建带状态码的响应，5xx 错误会记录日志
    pub fn from_error(err: &ClassroomError) -> HttpResponse {
        if err.is_client_error() {
            tracing::debug!("{}", err);
        } else {
            tracing::error!("{}", err);
        }
        HttpResponse::build(err.status()).json(Self::new(err.message()))
    }
}
