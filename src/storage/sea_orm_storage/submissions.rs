//! 提交存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::pdfs::{Column as PdfColumn, Entity as Pdfs, Model as PdfModel};
use crate::entity::submissions::{Column, Entity as Submissions, Model as SubmissionModel};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{ClassroomError, Result};
use crate::models::submissions::responses::{StudentResultItem, SubmissionListItem};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, sea_query::Expr};

impl SeaOrmStorage {
    /// 批量查询提交关联的 PDF
    async fn pdf_map_for(&self, submissions: &[SubmissionModel]) -> Result<HashMap<i64, PdfModel>> {
        let pdf_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.pdf_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let pdfs = Pdfs::find()
            .filter(PdfColumn::Id.is_in(pdf_ids))
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("Failed to query PDFs: {e}")))?;

        Ok(pdfs.into_iter().map(|p| (p.id, p)).collect())
    }

    /// 列出全部提交，ID 倒序
    ///
    /// 与学生、PDF 做内连接：关联记录缺失（如 PDF 已被删除）的提交不返回。
    pub async fn list_submissions_impl(&self) -> Result<Vec<SubmissionListItem>> {
        let submissions = Submissions::find()
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassroomError::database_operation(format!("Failed to list submissions: {e}"))
            })?;

        if submissions.is_empty() {
            return Ok(Vec::new());
        }

        // 批量查询学生信息
        let student_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.student_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let users = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("Failed to query users: {e}")))?;

        let user_map: HashMap<i64, _> = users.into_iter().map(|u| (u.id, u)).collect();
        let pdf_map = self.pdf_map_for(&submissions).await?;

        Ok(submissions
            .into_iter()
            .filter_map(|s| {
                let student = user_map.get(&s.student_id)?;
                let pdf = pdf_map.get(&s.pdf_id)?;
                Some(SubmissionListItem {
                    id: s.id,
                    student_name: student.name.clone(),
                    filename: pdf.filename.clone(),
                    marks: s.marks,
                    feedback: s.feedback,
                })
            })
            .collect())
    }

    /// 学生成绩（与 PDF 内连接）
    pub async fn list_student_results_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentResultItem>> {
        let submissions = Submissions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassroomError::database_operation(format!("Failed to query submissions: {e}"))
            })?;

        if submissions.is_empty() {
            return Ok(Vec::new());
        }

        let pdf_map = self.pdf_map_for(&submissions).await?;

        Ok(submissions
            .into_iter()
            .filter_map(|s| {
                let pdf = pdf_map.get(&s.pdf_id)?;
                Some(StudentResultItem {
                    filename: pdf.filename.clone(),
                    marks: s.marks,
                    feedback: s.feedback,
                })
            })
            .collect())
    }

    /// 更新分数与评语，ID 不存在时不做任何修改
    pub async fn update_submission_marks_impl(
        &self,
        submission_id: i64,
        marks: Option<f64>,
        feedback: Option<String>,
    ) -> Result<bool> {
        let result = Submissions::update_many()
            .col_expr(Column::Marks, Expr::value(marks))
            .col_expr(Column::Feedback, Expr::value(feedback))
            .filter(Column::Id.eq(submission_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                ClassroomError::database_operation(format!("Failed to update submission: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
