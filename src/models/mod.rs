pub mod assignments;
pub mod auth;
pub mod common;
pub mod pdfs;
pub mod submissions;
pub mod users;
pub mod vocabulary;

pub use common::MessageResponse;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
