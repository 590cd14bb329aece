use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PdfService;
use crate::models::{MessageResponse, pdfs::responses::PdfListItem};

pub async fn list_pdfs(service: &PdfService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_pdfs().await {
        Ok(pdfs) => {
            let items: Vec<PdfListItem> = pdfs.into_iter().map(PdfListItem::from).collect();
            Ok(HttpResponse::Ok().json(items))
        }
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
