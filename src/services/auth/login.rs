use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::ClassroomError;
use crate::models::{
    MessageResponse,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 根据邮箱获取用户信息
    match storage.get_user_by_email(&login_request.email).await {
        // 2. 验证密码
        Ok(Some(user)) if verify_password(&login_request.password, &user.password) => {
            tracing::info!("User {} logged in successfully", user.id);
            Ok(HttpResponse::Ok().json(LoginResponse::from(user)))
        }
        Ok(_) => {
            tracing::debug!("Rejected login for {}", login_request.email);
            Ok(MessageResponse::from_error(&ClassroomError::invalid_credentials(
                "Invalid credentials",
            )))
        }
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
