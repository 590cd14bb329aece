//! HTTP 接口集成测试
//!
//! 每个测试使用独立的临时 SQLite 数据库、上传目录与词汇表文件。

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use sea_orm::{ActiveModelTrait, Database, EntityTrait, Set};
use serde_json::{Value, json};

use rust_classroom_next::entity::submissions;
use rust_classroom_next::models::users::entities::UserRole;
use rust_classroom_next::models::users::requests::CreateUserRequest;
use rust_classroom_next::routes;
use rust_classroom_next::storage::sea_orm_storage::SeaOrmStorage;
use rust_classroom_next::storage::{Storage, UploadStore};
use rust_classroom_next::translator::VocabularyStore;
use rust_classroom_next::utils::password::hash_password;
use rust_classroom_next::utils::{json_error_handler, path_error_handler};

const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\n%%EOF\n";
const BOUNDARY: &str = "classroom-test-boundary";

struct TestContext {
    root: PathBuf,
    db_path: PathBuf,
    storage: Arc<dyn Storage>,
    uploads: UploadStore,
    vocabulary: web::Data<VocabularyStore>,
}

impl TestContext {
    async fn new(prefix: &str) -> Self {
        let root = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("create temp dir");

        let db_path = root.join("classroom.db");
        let storage = SeaOrmStorage::connect(db_path.to_str().expect("utf-8 path"), 2, 5)
            .await
            .expect("connect storage");

        let uploads = UploadStore::new(root.join("uploads"), 1024 * 1024);
        uploads.ensure_dir().await.expect("create upload dir");

        Self {
            vocabulary: web::Data::new(VocabularyStore::new(root.join("vocabulary.json"))),
            root,
            db_path,
            storage: Arc::new(storage),
            uploads,
        }
    }

    async fn create_user(&self, name: &str, email: &str, password: &str, role: UserRole) -> i64 {
        self.storage
            .create_user(CreateUserRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                role,
            })
            .await
            .expect("create user")
            .id
    }

    // 提交由外部写入，测试中直接插入数据库
    async fn insert_submission(&self, student_id: i64, pdf_id: i64) -> i64 {
        let db = Database::connect(format!("sqlite://{}?mode=rwc", self.db_path.display()))
            .await
            .expect("connect raw db");
        let model = submissions::ActiveModel {
            student_id: Set(student_id),
            pdf_id: Set(pdf_id),
            marks: Set(None),
            feedback: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect("insert submission");
        model.id
    }

    async fn count_submissions(&self) -> usize {
        let db = Database::connect(format!("sqlite://{}?mode=rwc", self.db_path.display()))
            .await
            .expect("connect raw db");
        submissions::Entity::find()
            .all(&db)
            .await
            .expect("list submissions")
            .len()
    }

    fn upload_path(&self, filename: &str) -> PathBuf {
        self.root.join("uploads").join(filename)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::Data::new($ctx.storage.clone()))
                .app_data(web::Data::new($ctx.uploads.clone()))
                .app_data($ctx.vocabulary.clone())
                .configure(routes::configure_all_routes),
        )
        .await
    };
}

fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"pdf\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/upload_pdf")
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(multipart_body(fields, file))
}

fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}

#[actix_web::test]
async fn test_liveness() {
    let ctx = TestContext::new("classroom-liveness").await;
    let app = init_app!(ctx);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Backend is running");
}

#[actix_web::test]
async fn test_login() {
    let ctx = TestContext::new("classroom-login").await;
    let student_id = ctx
        .create_user("Asha", "asha@school.test", "plain-pass", UserRole::Student)
        .await;
    let dollar_id = ctx
        .create_user("Meena", "meena@school.test", "$secret", UserRole::Student)
        .await;
    let hashed = hash_password("s3cret").expect("hash");
    let teacher_id = ctx
        .create_user("Ravi", "ravi@school.test", &hashed, UserRole::Teacher)
        .await;
    let app = init_app!(ctx);

    // 旧数据的明文密码
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "asha@school.test", "password": "plain-pass"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"id": student_id, "name": "Asha", "role": "student"}));

    // 以 `$` 开头的明文也按明文比较
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "meena@school.test", "password": "$secret"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"id": dollar_id, "name": "Meena", "role": "student"}));

    // Argon2 哈希
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "ravi@school.test", "password": "s3cret"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"id": teacher_id, "name": "Ravi", "role": "teacher"}));

    for (email, password) in [
        ("ravi@school.test", "wrong"),
        ("asha@school.test", "PLAIN-PASS"),
        ("nobody@school.test", "plain-pass"),
    ] {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"email": email, "password": password}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(message(&body), "Invalid credentials");
    }
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new("classroom-bad-json").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"email": "only@school.test"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(!message(&body).is_empty());

    let req = test::TestRequest::delete()
        .uri("/delete_pdf/not-a-number")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_students() {
    let ctx = TestContext::new("classroom-students").await;
    let a = ctx
        .create_user("Asha", "asha@school.test", "x", UserRole::Student)
        .await;
    ctx.create_user("Ravi", "ravi@school.test", "x", UserRole::Teacher)
        .await;
    let b = ctx
        .create_user("Meena", "meena@school.test", "x", UserRole::Student)
        .await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/students").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([{"id": a, "name": "Asha"}, {"id": b, "name": "Meena"}])
    );
}

#[actix_web::test]
async fn test_upload_list_serve_delete() {
    let ctx = TestContext::new("classroom-pdf-flow").await;
    let teacher = ctx
        .create_user("Ravi", "ravi@school.test", "x", UserRole::Teacher)
        .await;
    let student = ctx
        .create_user("Asha", "asha@school.test", "x", UserRole::Student)
        .await;
    let app = init_app!(ctx);

    let teacher_str = teacher.to_string();
    let req = upload_request(
        &[("teacher_id", teacher_str.as_str())],
        Some(("Week 1 Notes.pdf", PDF_BYTES)),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(message(&body), "PDF uploaded successfully");
    assert!(ctx.upload_path("Week_1_Notes.pdf").exists());

    let req = upload_request(&[("teacher_id", teacher_str.as_str())], Some(("second.pdf", PDF_BYTES)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // 按 id 倒序
    let req = test::TestRequest::get().uri("/list_pdfs").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let pdfs = body.as_array().expect("array");
    assert_eq!(pdfs.len(), 2);
    assert_eq!(pdfs[0]["filename"], "second.pdf");
    assert_eq!(pdfs[1]["filename"], "Week_1_Notes.pdf");
    let pdf_id = pdfs[1]["id"].as_i64().expect("pdf id");

    let req = test::TestRequest::get()
        .uri("/pdf/Week_1_Notes.pdf")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/pdf")
    );
    let bytes = test::read_body(resp).await;
    assert_eq!(&bytes[..], PDF_BYTES);

    // 布置并生成一条提交
    let req = test::TestRequest::post()
        .uri("/assign_pdf")
        .set_json(json!({"student_id": student, "pdf_id": pdf_id}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(message(&body), "PDF assigned successfully");
    ctx.insert_submission(student, pdf_id).await;

    let req = test::TestRequest::get()
        .uri(&format!("/student_results/{student}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::delete()
        .uri(&format!("/delete_pdf/{pdf_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(message(&body), "PDF deleted successfully");
    assert!(!ctx.upload_path("Week_1_Notes.pdf").exists());

    // 作业记录随 PDF 删除
    let req = test::TestRequest::get()
        .uri(&format!("/student_pdfs/{student}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));

    // 提交保留在库中，但在关联查询中不再出现
    let req = test::TestRequest::get()
        .uri(&format!("/student_results/{student}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
    assert_eq!(ctx.count_submissions().await, 1);

    let req = test::TestRequest::get().uri("/list_pdfs").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get()
        .uri("/pdf/Week_1_Notes.pdf")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(message(&body), "File not found");
}

#[actix_web::test]
async fn test_upload_validation() {
    let ctx = TestContext::new("classroom-upload-validation").await;
    let app = init_app!(ctx);

    let req = upload_request(&[], Some(("notes.pdf", PDF_BYTES)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(message(&body), "Missing PDF or teacher ID");

    let req = upload_request(&[("teacher_id", "1")], None)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(message(&body), "Missing PDF or teacher ID");

    let req = upload_request(&[("teacher_id", "abc")], Some(("notes.pdf", PDF_BYTES)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = upload_request(&[("teacher_id", "1")], Some(("notes.pdf", &b"hello world"[..])))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(message(&body), "Uploaded file is not a PDF");

    let req = test::TestRequest::get().uri("/list_pdfs").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_delete_missing_pdf() {
    let ctx = TestContext::new("classroom-delete-missing").await;
    let teacher = ctx
        .create_user("Ravi", "ravi@school.test", "x", UserRole::Teacher)
        .await;
    ctx.storage
        .create_pdf("kept.pdf", teacher)
        .await
        .expect("create pdf");
    let app = init_app!(ctx);

    let req = test::TestRequest::delete().uri("/delete_pdf/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(message(&body), "PDF not found");

    let pdfs = ctx.storage.list_pdfs().await.expect("list pdfs");
    assert_eq!(pdfs.len(), 1);
    assert_eq!(pdfs[0].filename, "kept.pdf");
}

#[actix_web::test]
async fn test_delete_pdf_with_missing_file() {
    let ctx = TestContext::new("classroom-delete-nofile").await;
    let pdf = ctx
        .storage
        .create_pdf("ghost.pdf", 1)
        .await
        .expect("create pdf");
    let app = init_app!(ctx);

    let req = test::TestRequest::delete()
        .uri(&format!("/delete_pdf/{}", pdf.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(ctx.storage.list_pdfs().await.expect("list pdfs").is_empty());
}

#[actix_web::test]
async fn test_duplicate_assignments() {
    let ctx = TestContext::new("classroom-duplicates").await;
    let pdf = ctx
        .storage
        .create_pdf("reader.pdf", 1)
        .await
        .expect("create pdf");
    let app = init_app!(ctx);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/assign_pdf")
            .set_json(json!({"student_id": "7", "pdf_id": pdf.id}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/student_pdfs/7").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([{"filename": "reader.pdf"}, {"filename": "reader.pdf"}])
    );

    let req = test::TestRequest::get().uri("/student_pdfs/8").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_submissions_and_marks() {
    let ctx = TestContext::new("classroom-marks").await;
    let student = ctx
        .create_user("Asha", "asha@school.test", "x", UserRole::Student)
        .await;
    let pdf = ctx
        .storage
        .create_pdf("quiz.pdf", 1)
        .await
        .expect("create pdf");
    let first = ctx.insert_submission(student, pdf.id).await;
    let second = ctx.insert_submission(student, pdf.id).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/add_marks")
        .set_json(json!({"submission_id": first, "marks": "85.5", "feedback": "Good work"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(message(&body), "Marks saved");

    // 不存在的提交：不修改任何记录，仍然返回成功
    let req = test::TestRequest::post()
        .uri("/add_marks")
        .set_json(json!({"submission_id": 9999, "marks": 10, "feedback": null}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(message(&body), "Marks saved");

    // 缺少 feedback 字段：拒绝，已有评语不被清空
    let req = test::TestRequest::post()
        .uri("/add_marks")
        .set_json(json!({"submission_id": first, "marks": 50}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/submissions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!([
            {"id": second, "student_name": "Asha", "filename": "quiz.pdf", "marks": null, "feedback": null},
            {"id": first, "student_name": "Asha", "filename": "quiz.pdf", "marks": 85.5, "feedback": "Good work"}
        ])
    );

    let req = test::TestRequest::get()
        .uri(&format!("/student_results/{student}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let results = body.as_array().expect("array");
    assert_eq!(results.len(), 2);
    assert!(
        results
            .iter()
            .any(|r| r["marks"] == json!(85.5) && r["feedback"] == "Good work")
    );
}

#[actix_web::test]
async fn test_add_word_then_translate() {
    let ctx = TestContext::new("classroom-vocabulary").await;
    let app = init_app!(ctx);

    // 词汇表不存在时视为空
    let req = test::TestRequest::post()
        .uri("/translate")
        .set_json(json!({"text": "cat", "language": "telugu"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"translation": "cat", "explanation": ["cat → (not learned yet)"]})
    );

    let req = test::TestRequest::post()
        .uri("/add_word")
        .set_json(json!({"english": "Cat", "telugu": "పిల్లి", "hindi": "बिल्ली"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(message(&body), "Word added");

    let req = test::TestRequest::post()
        .uri("/translate")
        .set_json(json!({"text": "  The CAT  ", "language": "telugu"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({
            "translation": "the పిల్లి",
            "explanation": ["the → (not learned yet)", "cat → పిల్లి"]
        })
    );

    let req = test::TestRequest::post()
        .uri("/translate")
        .set_json(json!({"text": "cat", "language": "tamil"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["translation"], "cat");

    // 非 ASCII 字符原样写入文件
    let raw = std::fs::read_to_string(ctx.vocabulary.path()).expect("read vocabulary");
    assert!(raw.contains("పిల్లి"));
    assert!(raw.contains("बिल्ली"));
    assert!(raw.contains("\"cat\""));
}
