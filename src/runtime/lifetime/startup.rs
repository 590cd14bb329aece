use crate::config::AppConfig;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::{Storage, UploadStore};
use crate::translator::VocabularyStore;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub uploads: UploadStore,
    pub vocabulary: Arc<VocabularyStore>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认教师账号
/// 如果数据库中没有任何用户，则创建一个默认的 teacher 账号
pub async fn seed_teacher(storage: &Arc<dyn Storage>, name: &str, email: &str) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping teacher seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default teacher account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping teacher seed", e);
            return;
        }
    }

    // 优先从环境变量读取密码
    let password = std::env::var("TEACHER_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  TEACHER PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated teacher password: {}", pwd);
        warn!("  Please save this password or set TEACHER_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash teacher password: {}, skipping teacher seed", e);
            return;
        }
    };

    let teacher_request = CreateUserRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password_hash,
        role: UserRole::Teacher,
    };

    match storage.create_user(teacher_request).await {
        Ok(user) => {
            info!(
                "Default teacher account created successfully (ID: {}, email: {})",
                user.id, user.email
            );
        }
        Err(e) => {
            warn!("Failed to create teacher account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储、上传目录与词汇表
pub async fn prepare_server_startup() -> StartupContext {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let uploads = UploadStore::new(&config.upload.dir, config.upload.max_size);
    uploads
        .ensure_dir()
        .await
        .expect("Failed to create upload directory");
    warn!("Upload directory ready: {}", uploads.dir().display());

    let vocabulary = Arc::new(VocabularyStore::new(&config.vocabulary.path));
    debug!("Vocabulary store at {}", vocabulary.path().display());

    seed_teacher(&storage, &config.seed.teacher_name, &config.seed.teacher_email).await;

    StartupContext {
        storage,
        uploads,
        vocabulary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_password() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert_ne!(pwd, generate_random_password(16));
    }
}
