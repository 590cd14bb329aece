//! PDF 存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::pdfs::{ActiveModel, Column, Entity as Pdfs};
use crate::errors::{ClassroomError, Result};
use crate::models::pdfs::entities::Pdf;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建 PDF 记录
    pub async fn create_pdf_impl(&self, filename: &str, uploaded_by: i64) -> Result<Pdf> {
        let model = ActiveModel {
            filename: Set(filename.to_string()),
            uploaded_by: Set(uploaded_by),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ClassroomError::database_operation(format!("Failed to create PDF record: {e}"))
        })?;

        Ok(result.into_pdf())
    }

    /// 通过 ID 获取 PDF
    pub async fn get_pdf_by_id_impl(&self, pdf_id: i64) -> Result<Option<Pdf>> {
        let result = Pdfs::find_by_id(pdf_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("Failed to query PDF: {e}")))?;

        Ok(result.map(|m| m.into_pdf()))
    }

    /// 列出全部 PDF，ID 倒序
    pub async fn list_pdfs_impl(&self) -> Result<Vec<Pdf>> {
        let results = Pdfs::find()
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("Failed to list PDFs: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_pdf()).collect())
    }

    /// 删除 PDF：先删布置记录，再删 PDF 本身；提交记录不处理
    pub async fn delete_pdf_impl(&self, pdf_id: i64) -> Result<bool> {
        Assignments::delete_many()
            .filter(AssignmentColumn::PdfId.eq(pdf_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                ClassroomError::database_operation(format!("Failed to delete assignments: {e}"))
            })?;

        let result = Pdfs::delete_by_id(pdf_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("Failed to delete PDF: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
