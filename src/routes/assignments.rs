use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::AssignPdfRequest;
use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn assign_pdf(
    req: HttpRequest,
    assign_data: web::Json<AssignPdfRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .assign_pdf(&req, assign_data.into_inner())
        .await
}

pub async fn list_student_pdfs(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_student_pdfs(&req, path.into_inner())
        .await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/assign_pdf", web::post().to(assign_pdf))
        .route("/student_pdfs/{sid}", web::get().to(list_student_pdfs));
}
