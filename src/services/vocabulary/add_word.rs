use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VocabularyService;
use crate::models::{MessageResponse, vocabulary::requests::AddWordRequest};

pub async fn add_word(
    service: &VocabularyService,
    request: &HttpRequest,
    word_request: AddWordRequest,
) -> ActixResult<HttpResponse> {
    let vocabulary = service.get_vocabulary(request);

    match vocabulary
        .add_word(
            &word_request.english,
            &word_request.telugu,
            &word_request.hindi,
        )
        .await
    {
        Ok(()) => {
            tracing::info!("Vocabulary word added: {}", word_request.english.to_lowercase());
            Ok(HttpResponse::Ok().json(MessageResponse::new("Word added")))
        }
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
