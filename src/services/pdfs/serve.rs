use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::path::Path;

use super::PdfService;
use crate::errors::ClassroomError;
use crate::models::MessageResponse;
use crate::utils::secure_filename;

/// 根据扩展名返回 MIME 类型
fn content_type_for(filename: &str) -> &'static str {
    match Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

fn file_not_found() -> HttpResponse {
    MessageResponse::from_error(&ClassroomError::not_found("File not found"))
}

pub async fn serve_pdf(
    service: &PdfService,
    request: &HttpRequest,
    filename: String,
) -> ActixResult<HttpResponse> {
    // 只接受清理后保持不变的文件名，拒绝目录穿越
    if filename.is_empty() || secure_filename(&filename) != filename {
        return Ok(file_not_found());
    }

    let uploads = service.get_uploads(request);
    match uploads.read(&filename).await {
        Ok(Some(data)) => Ok(HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, content_type_for(&filename)))
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{filename}\""),
            ))
            .body(data)),
        Ok(None) => Ok(file_not_found()),
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
