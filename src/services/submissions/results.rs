use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::MessageResponse;

pub async fn list_student_results(
    service: &SubmissionService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_student_results(student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(items)),
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
