use actix_web::{HttpResponse, Result as ActixResult};

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 存活检查
    pub async fn liveness(&self) -> ActixResult<HttpResponse> {
        Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body("Backend is running"))
    }
}
