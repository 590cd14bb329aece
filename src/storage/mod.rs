use std::sync::Arc;

use crate::models::{
    pdfs::entities::Pdf,
    submissions::responses::{StudentResultItem, SubmissionListItem},
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;
pub mod uploads;

pub use uploads::UploadStore;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 按角色列出用户
    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;

    /// PDF 管理方法
    // 创建 PDF 记录
    async fn create_pdf(&self, filename: &str, uploaded_by: i64) -> Result<Pdf>;
    // 通过ID获取 PDF
    async fn get_pdf_by_id(&self, pdf_id: i64) -> Result<Option<Pdf>>;
    // 列出全部 PDF（新的在前）
    async fn list_pdfs(&self) -> Result<Vec<Pdf>>;
    // 删除 PDF 及其布置记录（提交记录保留）
    async fn delete_pdf(&self, pdf_id: i64) -> Result<bool>;

    /// 布置管理方法
    // 给学生布置 PDF（允许重复）
    async fn assign_pdf(&self, student_id: i64, pdf_id: i64) -> Result<()>;
    // 列出布置给学生的 PDF
    async fn list_student_pdfs(&self, student_id: i64) -> Result<Vec<Pdf>>;

    /// 提交管理方法
    // 列出全部提交（新的在前）
    async fn list_submissions(&self) -> Result<Vec<SubmissionListItem>>;
    // 列出学生的成绩
    async fn list_student_results(&self, student_id: i64) -> Result<Vec<StudentResultItem>>;
    // 批改：更新分数与评语，返回是否命中记录
    async fn update_submission_marks(
        &self,
        submission_id: i64,
        marks: Option<f64>,
        feedback: Option<String>,
    ) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
