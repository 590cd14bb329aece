use crate::errors::ClassroomError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, ClassroomError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ClassroomError::password_hashing(format!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码
///
/// 库中的密码可能是 Argon2 PHC 字符串，也可能是旧数据遗留的明文。
/// 只有算法标识为 Argon2 的 PHC 字符串才走哈希校验，其余一律按明文逐字比较
/// （明文本身可能恰好形如 `$xxx`）。
pub fn verify_password(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed_hash) if is_argon2_ident(parsed_hash.algorithm.as_str()) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        _ => password == stored,
    }
}

fn is_argon2_ident(ident: &str) -> bool {
    matches!(ident, "argon2id" | "argon2i" | "argon2d")
}
