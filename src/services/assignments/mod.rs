pub mod assign;
pub mod student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::AssignPdfRequest;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    // 布置 PDF
    pub async fn assign_pdf(
        &self,
        request: &HttpRequest,
        assign_request: AssignPdfRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_pdf(self, request, assign_request).await
    }

    // 学生的 PDF 列表
    pub async fn list_student_pdfs(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        student::list_student_pdfs(self, request, student_id).await
    }
}
