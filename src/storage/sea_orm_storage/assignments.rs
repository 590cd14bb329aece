//! 布置存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::pdfs::{Column as PdfColumn, Entity as Pdfs};
use crate::errors::{ClassroomError, Result};
use crate::models::pdfs::entities::Pdf;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 给学生布置 PDF，不检查重复
    pub async fn assign_pdf_impl(&self, student_id: i64, pdf_id: i64) -> Result<()> {
        let model = ActiveModel {
            student_id: Set(student_id),
            pdf_id: Set(pdf_id),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(|e| {
            ClassroomError::database_operation(format!("Failed to assign PDF: {e}"))
        })?;

        Ok(())
    }

    /// 学生的 PDF 列表（内连接语义：PDF 已删除的布置不返回，重复布置重复返回）
    pub async fn list_student_pdfs_impl(&self, student_id: i64) -> Result<Vec<Pdf>> {
        let assignments = Assignments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassroomError::database_operation(format!("Failed to query assignments: {e}"))
            })?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        // 批量查询 PDF
        let pdf_ids: Vec<i64> = assignments
            .iter()
            .map(|a| a.pdf_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let pdfs = Pdfs::find()
            .filter(PdfColumn::Id.is_in(pdf_ids))
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("Failed to query PDFs: {e}")))?;

        let pdf_map: HashMap<i64, _> = pdfs.into_iter().map(|p| (p.id, p)).collect();

        Ok(assignments
            .into_iter()
            .filter_map(|a| pdf_map.get(&a.pdf_id).cloned())
            .map(|m| m.into_pdf())
            .collect())
    }
}
