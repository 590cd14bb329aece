//! 上传文件目录
//!
//! 文件以清理后的原始文件名保存，同名文件直接覆盖。

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{ClassroomError, Result};

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_size: usize,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, max_size: usize) -> Self {
        Self {
            dir: dir.into(),
            max_size,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 单文件最大字节数
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// 确保上传目录存在
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            ClassroomError::file_operation(format!(
                "Failed to create upload directory {}: {e}",
                self.dir.display()
            ))
        })
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// 写入文件（覆盖同名文件）
    pub async fn save(&self, filename: &str, data: &[u8]) -> Result<()> {
        self.ensure_dir().await?;
        tokio::fs::write(self.path_for(filename), data)
            .await
            .map_err(|e| ClassroomError::file_operation(format!("Failed to save {filename}: {e}")))
    }

    /// 读取文件，不存在时返回 None
    pub async fn read(&self, filename: &str) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.path_for(filename)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClassroomError::file_operation(format!(
                "Failed to read {filename}: {e}"
            ))),
        }
    }

    /// 删除文件，返回文件原本是否存在
    pub async fn remove(&self, filename: &str) -> Result<bool> {
        match tokio::fs::remove_file(self.path_for(filename)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ClassroomError::file_operation(format!(
                "Failed to remove {filename}: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> UploadStore {
        UploadStore::new(
            std::env::temp_dir().join(format!("classroom-uploads-{}", uuid::Uuid::new_v4())),
            1024,
        )
    }

    #[tokio::test]
    async fn test_save_read_remove() {
        let store = temp_store();
        store.save("notes.pdf", b"%PDF-1.4 one").await.unwrap();
        assert_eq!(
            store.read("notes.pdf").await.unwrap().as_deref(),
            Some(&b"%PDF-1.4 one"[..])
        );

        // 同名覆盖
        store.save("notes.pdf", b"%PDF-1.4 two").await.unwrap();
        assert_eq!(
            store.read("notes.pdf").await.unwrap().as_deref(),
            Some(&b"%PDF-1.4 two"[..])
        );

        assert!(store.remove("notes.pdf").await.unwrap());
        assert!(!store.remove("notes.pdf").await.unwrap());
        assert!(store.read("notes.pdf").await.unwrap().is_none());
        let _ = std::fs::remove_dir_all(store.dir());
    }
}
