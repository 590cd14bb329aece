//! 请求参数解析失败时的统一 400 响应

use actix_web::{HttpRequest, HttpResponse, error, error::InternalError};

use crate::models::MessageResponse;

pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> error::Error {
    tracing::debug!("Invalid JSON body for {}: {}", req.path(), err);
    let response =
        HttpResponse::BadRequest().json(MessageResponse::new(format!("Invalid request body: {err}")));
    InternalError::from_response(err, response).into()
}

pub fn path_error_handler(err: error::PathError, req: &HttpRequest) -> error::Error {
    tracing::debug!("Invalid path parameter for {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest()
        .json(MessageResponse::new(format!("Invalid path parameter: {err}")));
    InternalError::from_response(err, response).into()
}
