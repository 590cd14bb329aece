use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::submissions::requests::AddMarksRequest;
use crate::services::SubmissionService;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

pub async fn list_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_submissions(&req).await
}

pub async fn list_student_results(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_student_results(&req, path.into_inner())
        .await
}

pub async fn add_marks(
    req: HttpRequest,
    marks_data: web::Json<AddMarksRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .add_marks(&req, marks_data.into_inner())
        .await
}

// 配置路由
pub fn configure_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/submissions", web::get().to(list_submissions))
        .route("/student_results/{sid}", web::get().to(list_student_results))
        .route("/add_marks", web::post().to(add_marks));
}
