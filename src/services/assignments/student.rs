use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{MessageResponse, assignments::responses::AssignedPdfItem};

pub async fn list_student_pdfs(
    service: &AssignmentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_student_pdfs(student_id).await {
        Ok(pdfs) => {
            let items: Vec<AssignedPdfItem> = pdfs
                .into_iter()
                .map(|p| AssignedPdfItem {
                    filename: p.filename,
                })
                .collect();
            Ok(HttpResponse::Ok().json(items))
        }
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
