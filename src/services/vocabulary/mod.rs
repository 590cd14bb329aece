pub mod add_word;
pub mod translate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::models::vocabulary::requests::{AddWordRequest, TranslateRequest};
use crate::translator::VocabularyStore;

pub struct VocabularyService;

impl VocabularyService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_vocabulary(&self, request: &HttpRequest) -> web::Data<VocabularyStore> {
        request
            .app_data::<web::Data<VocabularyStore>>()
            .expect("VocabularyStore not found in app data")
            .clone()
    }

    // 添加单词
    pub async fn add_word(
        &self,
        request: &HttpRequest,
        word_request: AddWordRequest,
    ) -> ActixResult<HttpResponse> {
        add_word::add_word(self, request, word_request).await
    }

    // 翻译
    pub async fn translate(
        &self,
        request: &HttpRequest,
        translate_request: TranslateRequest,
    ) -> ActixResult<HttpResponse> {
        translate::translate(self, request, translate_request).await
    }
}
