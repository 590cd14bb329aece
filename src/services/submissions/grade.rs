use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::{MessageResponse, submissions::requests::AddMarksRequest};

/// 批改提交
/// POST /add_marks
///
/// 提交不存在时不做修改，仍然返回成功。
pub async fn add_marks(
    service: &SubmissionService,
    request: &HttpRequest,
    marks_request: AddMarksRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let submission_id = marks_request.submission_id;

    match storage
        .update_submission_marks(submission_id, marks_request.marks, marks_request.feedback)
        .await
    {
        Ok(true) => {
            tracing::info!("Submission {} graded", submission_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Marks saved")))
        }
        Ok(false) => {
            tracing::debug!("Submission {} not found, nothing graded", submission_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Marks saved")))
        }
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
