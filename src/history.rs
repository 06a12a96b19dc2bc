//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___|   ___   _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _   / _ \ | '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| | |  __/ | | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|  \___| |_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-13
// Version : 0.1.0
// License : Mulan PSL v2
//
// Recent password history

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::{Path, PathBuf}};
use uuid::Uuid;

use crate::configtool::{StoreError, get_config_dir};
use crate::strength::Strength;

/// 存储键，同时作为文件名
pub const STORAGE_KEY: &str = "passwordHistory";
pub const HISTORY_LIMIT: usize = 5;

// 历史记录条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub password: String,
    pub strength: Strength,
    pub timestamp: i64, // epoch 毫秒
    pub id: String,
}

impl HistoryItem {
    pub fn new(password: &str, strength: Strength) -> Self {
        Self {
            password: password.to_string(),
            strength,
            timestamp: Utc::now().timestamp_millis(),
            id: Uuid::new_v4().to_string(),
        }
    }
}

/// 新条目放在最前，超出上限的旧条目被丢弃
pub fn push_capped(history: Vec<HistoryItem>, item: HistoryItem) -> Vec<HistoryItem> {
    let mut updated = Vec::with_capacity(HISTORY_LIMIT);
    updated.push(item);
    updated.extend(history);
    updated.truncate(HISTORY_LIMIT);
    updated
}

/// 基于 JSON 文件的历史记录存储。
///
/// 所有读写错误只记录日志，不向调用方传播：
/// 读取失败视为空列表，写入失败视为无操作。
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn open_default() -> Result<Self, StoreError> {
        let dir = get_config_dir()?;
        Ok(Self::new(dir.join(format!("{}.json", STORAGE_KEY))))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<HistoryItem>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::IoError(e)),
        };
        Ok(serde_json::from_str(&data)?)
    }

    fn write(&self, history: &[HistoryItem]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string(history)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    pub fn get_password_history(&self) -> Vec<HistoryItem> {
        match self.read() {
            Ok(history) => history,
            Err(e) => {
                tracing::error!(path = %self.path.display(), "Failed to get password history: {}", e);
                Vec::new()
            }
        }
    }

    /// 记录一条新生成的密码，返回更新后的列表
    pub fn save_password_to_history(&self, password: &str, strength: Strength) -> Vec<HistoryItem> {
        let entry = HistoryItem::new(password, strength);
        tracing::debug!(id = %entry.id, "saving password to history");
        let updated = push_capped(self.get_password_history(), entry);
        if let Err(e) = self.write(&updated) {
            tracing::error!(path = %self.path.display(), "Failed to save password to history: {}", e);
        }
        updated
    }

    pub fn clear_history(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("password history cleared"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::error!(path = %self.path.display(), "Failed to clear password history: {}", e);
            }
        }
    }
}
