//! 布置（学生 ↔ PDF）实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub pdf_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pdfs::Entity",
        from = "Column::PdfId",
        to = "super::pdfs::Column::Id"
    )]
    Pdf,
}

impl Related<super::pdfs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pdf.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
