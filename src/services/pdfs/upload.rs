use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use super::PdfService;
use crate::errors::ClassroomError;
use crate::models::MessageResponse;
use crate::utils::{is_pdf, secure_filename};

fn rejected(err: ClassroomError) -> ActixResult<HttpResponse> {
    Ok(MessageResponse::from_error(&err))
}

const PDF_FIELD: &str = "pdf";
const TEACHER_ID_FIELD: &str = "teacher_id";

pub async fn handle_upload(
    service: &PdfService,
    req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let uploads = service.get_uploads(req);
    let max_size = uploads.max_size();

    // 表单字段
    let mut original_name = String::new();
    let mut file_data: Vec<u8> = Vec::new();
    let mut file_uploaded = false;
    let mut teacher_id_raw: Vec<u8> = Vec::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == PDF_FIELD {
            if file_uploaded {
                return rejected(ClassroomError::validation(
                    "Only one PDF can be uploaded at a time",
                ));
            }
            file_uploaded = true;

            original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            while let Some(chunk) = field.next().await {
                let data = chunk?;
                // 校验大小
                if file_data.len() + data.len() > max_size {
                    return rejected(ClassroomError::validation("File size exceeds the limit"));
                }
                file_data.extend_from_slice(&data);
            }
        } else if name == TEACHER_ID_FIELD {
            while let Some(chunk) = field.next().await {
                teacher_id_raw.extend_from_slice(&chunk?);
            }
        }
    }

    // 文件名为空视同未上传文件
    let teacher_id_raw = String::from_utf8_lossy(&teacher_id_raw).trim().to_string();
    if original_name.is_empty() || teacher_id_raw.is_empty() {
        return rejected(ClassroomError::missing_input("Missing PDF or teacher ID"));
    }

    let teacher_id = match teacher_id_raw.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return rejected(ClassroomError::validation("Invalid teacher ID"));
        }
    };

    let filename = secure_filename(&original_name);
    if filename.is_empty() {
        return rejected(ClassroomError::validation("Invalid PDF filename"));
    }

    if !is_pdf(&file_data) {
        return rejected(ClassroomError::validation("Uploaded file is not a PDF"));
    }

    // 先落盘再写数据库，两者之间没有事务
    if let Err(e) = uploads.save(&filename, &file_data).await {
        return rejected(e);
    }

    let storage = service.get_storage(req);
    match storage.create_pdf(&filename, teacher_id).await {
        Ok(pdf) => {
            tracing::info!(
                "PDF {} ({} bytes) uploaded by teacher {} as id {}",
                pdf.filename,
                file_data.len(),
                teacher_id,
                pdf.id
            );
            Ok(HttpResponse::Ok().json(MessageResponse::new("PDF uploaded successfully")))
        }
        Err(e) => Ok(MessageResponse::from_error(&e)),
    }
}
