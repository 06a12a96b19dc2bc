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
// Plain-text export

use chrono::{NaiveDate, Utc};
use std::{fs, io, path::{Path, PathBuf}};

pub fn export_filename(date: NaiveDate) -> String {
    format!("password-{}.txt", date.format("%Y-%m-%d"))
}

/// 以当天（UTC）日期命名，把密码原文写入 dir 下的文本文件
pub fn download_as_file(text: &str, dir: &Path) -> io::Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(export_filename(Utc::now().date_naive()));
    fs::write(&path, text)?;
    tracing::debug!(path = %path.display(), "password exported");
    Ok(path)
}
