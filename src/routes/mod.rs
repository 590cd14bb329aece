pub mod assignments;

pub mod auth;

pub mod pdfs;

pub mod submissions;

pub mod system;

pub mod users;

pub mod vocabulary;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use pdfs::configure_pdf_routes;
pub use submissions::configure_submission_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
pub use vocabulary::configure_vocabulary_routes;

/// 注册全部路由
pub fn configure_all_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_pdf_routes)
        .configure(configure_assignment_routes)
        .configure(configure_submission_routes)
        .configure(configure_vocabulary_routes);
}
