use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::PdfService;

// 懒加载的全局 PdfService 实例
static PDF_SERVICE: Lazy<PdfService> = Lazy::new(PdfService::new_lazy);

pub async fn upload_pdf(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    PDF_SERVICE.upload_pdf(&req, payload).await
}

pub async fn list_pdfs(req: HttpRequest) -> ActixResult<HttpResponse> {
    PDF_SERVICE.list_pdfs(&req).await
}

pub async fn delete_pdf(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    PDF_SERVICE.delete_pdf(&req, path.into_inner()).await
}

pub async fn serve_pdf(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    PDF_SERVICE.serve_pdf(&req, path.into_inner()).await
}

// 配置路由
pub fn configure_pdf_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/upload_pdf", web::post().to(upload_pdf))
        .route("/list_pdfs", web::get().to(list_pdfs))
        .route("/delete_pdf/{pdf_id}", web::delete().to(delete_pdf))
        .route("/pdf/{filename}", web::get().to(serve_pdf));
}
