use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PdfService;
use crate::errors::ClassroomError;
use crate::models::MessageResponse;

pub async fn delete_pdf(
    service: &PdfService,
    request: &HttpRequest,
    pdf_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let pdf = match storage.get_pdf_by_id(pdf_id).await {
        Ok(Some(pdf)) => pdf,
        Ok(None) => {
            return Ok(MessageResponse::from_error(&ClassroomError::not_found(
                "PDF not found",
            )));
        }
        Err(e) => return Ok(MessageResponse::from_error(&e)),
    };

    // 磁盘上的文件已不存在时继续删除记录
    let uploads = service.get_uploads(request);
    match uploads.remove(&pdf.filename).await {
        Ok(true) => {}
        Ok(false) => tracing::warn!("File for PDF {} was already missing: {}", pdf.id, pdf.filename),
        Err(e) => return Ok(MessageResponse::from_error(&e)),
    }

    match storage.delete_pdf(pdf_id).await {
        Ok(_) => {
            tracing::info!("PDF {} ({}) deleted", pdf.id, pdf.filename);
            Ok(HttpResponse::Ok().json(MessageResponse::new("PDF deleted successfully")))
        }
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
