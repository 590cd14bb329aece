use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::vocabulary::requests::{AddWordRequest, TranslateRequest};
use crate::services::VocabularyService;

// 懒加载的全局 VocabularyService 实例
static VOCABULARY_SERVICE: Lazy<VocabularyService> = Lazy::new(VocabularyService::new_lazy);

pub async fn add_word(
    req: HttpRequest,
    word_data: web::Json<AddWordRequest>,
) -> ActixResult<HttpResponse> {
    VOCABULARY_SERVICE
        .add_word(&req, word_data.into_inner())
        .await
}

pub async fn translate(
    req: HttpRequest,
    translate_data: web::Json<TranslateRequest>,
) -> ActixResult<HttpResponse> {
    VOCABULARY_SERVICE
        .translate(&req, translate_data.into_inner())
        .await
}

// 配置路由
pub fn configure_vocabulary_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/add_word", web::post().to(add_word))
        .route("/translate", web::post().to(translate));
}
