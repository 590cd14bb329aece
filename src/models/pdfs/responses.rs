use serde::Serialize;
use ts_rs::TS;

use super::entities::Pdf;

/// PDF 列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pdf.ts")]
pub struct PdfListItem {
    pub id: i64,
    pub filename: String,
}

impl From<Pdf> for PdfListItem {
    fn from(pdf: Pdf) -> Self {
        Self {
            id: pdf.id,
            filename: pdf.filename,
        }
    }
}
