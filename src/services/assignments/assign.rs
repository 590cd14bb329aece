use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::{MessageResponse, assignments::requests::AssignPdfRequest};

pub async fn assign_pdf(
    service: &AssignmentService,
    request: &HttpRequest,
    assign_request: AssignPdfRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .assign_pdf(assign_request.student_id, assign_request.pdf_id)
        .await
    {
        Ok(()) => {
            tracing::info!(
                "PDF {} assigned to student {}",
                assign_request.pdf_id,
                assign_request.student_id
            );
            Ok(HttpResponse::Ok().json(MessageResponse::new("PDF assigned successfully")))
        }
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
