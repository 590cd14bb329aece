use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    MessageResponse,
    users::{entities::UserRole, responses::StudentListItem},
};

pub async fn list_students(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users_by_role(UserRole::Student).await {
        Ok(users) => {
            let items: Vec<StudentListItem> = users
                .into_iter()
                .map(|u| StudentListItem {
                    id: u.id,
                    name: u.name,
                })
                .collect();
            Ok(HttpResponse::Ok().json(items))
        }
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
