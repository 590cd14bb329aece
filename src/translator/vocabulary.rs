//! 词汇表存储
//!
//! 整个词汇表保存为一个 JSON 文档：`{ word: { language: translation } }`。
//! 写入在进程内串行化（异步互斥锁），并通过临时文件 + rename 原子替换，
//! 并发添加不同单词时不会互相覆盖。读取不加锁，每次都从磁盘重新加载。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::{ClassroomError, Result};

pub const TELUGU: &str = "telugu";
pub const HINDI: &str = "hindi";

/// 单词 → (语言 → 译文)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary(BTreeMap<String, BTreeMap<String, String>>);

impl Vocabulary {
    /// 查找某个单词在指定语言下的译文
    pub fn lookup(&self, word: &str, language: &str) -> Option<&str> {
        self.0
            .get(word)
            .and_then(|entry| entry.get(language))
            .map(String::as_str)
    }

    /// 写入单词（键转小写），整条记录被替换
    pub fn insert(&mut self, english: &str, telugu: &str, hindi: &str) {
        let entry = BTreeMap::from([
            (TELUGU.to_string(), telugu.to_string()),
            (HINDI.to_string(), hindi.to_string()),
        ]);
        self.0.insert(english.to_lowercase(), entry);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct VocabularyStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl VocabularyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取完整词汇表，文件不存在时视为空
    pub async fn load(&self) -> Result<Vocabulary> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vocabulary::default()),
            Err(e) => Err(ClassroomError::file_operation(format!(
                "Failed to read vocabulary {}: {e}",
                self.path.display()
            ))),
        }
    }

    /// 添加或覆盖一个单词
    pub async fn add_word(&self, english: &str, telugu: &str, hindi: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        // 文件不存在时先创建空词汇表
        if !tokio::fs::try_exists(&self.path).await? {
            self.persist(&Vocabulary::default()).await?;
            debug!("Created vocabulary store at {}", self.path.display());
        }

        let mut vocab = self.load().await?;
        vocab.insert(english, telugu, hindi);
        self.persist(&vocab).await
    }

    async fn persist(&self, vocab: &Vocabulary) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(vocab)?;
        let tmp_path = self.path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp_path, &json).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        Ok(())
    }
}
