//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___|   ___   _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _   / _ \ | '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| | |  __/ | | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|  \___| |_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{env, fmt, fs, path::{Path, PathBuf}};

use crate::passgen::PasswordOptions;

/// 覆盖默认配置目录的环境变量
pub const HOME_ENV: &str = "RPAWOGEN_HOME";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug)]
pub enum StoreError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::JsonError(e) => write!(f, "JSON error: {}", e),
            StoreError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::IoError(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::JsonError(e)
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, StoreError> {
    if let Some(home) = env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(StoreError::ConfigDirError("Could not determine configuration directory".to_string())),
    }
}

// 持久化的用户偏好，目前只有默认生成选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: PasswordOptions,
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// 读取默认位置的配置；出错时记录日志并使用内置默认值
    pub fn load() -> Self {
        let path = match get_config_dir() {
            Ok(dir) => dir.join(CONFIG_FILE_NAME),
            Err(e) => {
                tracing::warn!("using built-in defaults: {}", e);
                return Self::default();
            }
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to load settings, using built-in defaults: {}", e);
                Self::default()
            }
        }
    }
}
