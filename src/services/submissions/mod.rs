pub mod grade;
pub mod list;
pub mod results;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::AddMarksRequest;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    // 列出全部提交
    pub async fn list_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request).await
    }

    // 学生成绩
    pub async fn list_student_results(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        results::list_student_results(self, request, student_id).await
    }

    // 批改
    pub async fn add_marks(
        &self,
        request: &HttpRequest,
        marks_request: AddMarksRequest,
    ) -> ActixResult<HttpResponse> {
        grade::add_marks(self, request, marks_request).await
    }
}
