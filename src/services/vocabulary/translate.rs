use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VocabularyService;
use crate::models::{MessageResponse, vocabulary::requests::TranslateRequest};
use crate::translator::translate_text;

pub async fn translate(
    service: &VocabularyService,
    request: &HttpRequest,
    translate_request: TranslateRequest,
) -> ActixResult<HttpResponse> {
    // 每次都重新读取词汇表
    let vocabulary = match service.get_vocabulary(request).load().await {
        Ok(vocab) => vocab,
        Err(e) => return Ok(MessageResponse::from_error(&e)),
    };

    let result = translate_text(
        &translate_request.text,
        &translate_request.language,
        &vocabulary,
    );
    Ok(HttpResponse::Ok().json(result))
}
