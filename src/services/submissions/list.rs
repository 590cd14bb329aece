use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::MessageResponse;

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_submissions().await {
        Ok(items) => Ok(HttpResponse::Ok().json(items)),
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
