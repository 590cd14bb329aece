pub mod delete;
pub mod list;
pub mod serve;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::{Storage, UploadStore};

pub struct PdfService {
    storage: Option<Arc<dyn Storage>>,
}

impl PdfService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_uploads(&self, request: &HttpRequest) -> UploadStore {
        request
            .app_data::<actix_web::web::Data<UploadStore>>()
            .expect("UploadStore not found in app data")
            .get_ref()
            .clone()
    }

    // Handle PDF upload
    pub async fn upload_pdf(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, request, payload).await
    }

    // 列出全部 PDF
    pub async fn list_pdfs(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_pdfs(self, request).await
    }

    // 删除 PDF
    pub async fn delete_pdf(&self, request: &HttpRequest, pdf_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_pdf(self, request, pdf_id).await
    }

    // 返回 PDF 文件内容
    pub async fn serve_pdf(
        &self,
        request: &HttpRequest,
        filename: String,
    ) -> ActixResult<HttpResponse> {
        serve::serve_pdf(self, request, filename).await
    }
}
