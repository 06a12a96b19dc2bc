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
// Clipboard handler

use arboard::Clipboard;
use std::fmt;

#[derive(Debug)]
pub struct ClipboardError(arboard::Error);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clipboard error: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        ClipboardError(e)
    }
}

pub fn copy_to_clipboard(secret: &str) -> Result<(), ClipboardError> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Default,
    Destructive,
}

// 一次性提示消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: &str) -> Self {
        Self { kind: NotificationKind::Default, message: message.to_string() }
    }

    pub fn destructive(message: &str) -> Self {
        Self { kind: NotificationKind::Destructive, message: message.to_string() }
    }

    /// 普通提示写到 stdout，失败提示写到 stderr
    pub fn show(&self) {
        match self.kind {
            NotificationKind::Default => println!("{}", self.message),
            NotificationKind::Destructive => eprintln!("{}", self.message),
        }
    }
}

/// 把复制结果转换成提示；失败不影响后续操作
pub fn notify_copy(result: &Result<(), ClipboardError>) -> Notification {
    match result {
        Ok(()) => Notification::info("Password copied to clipboard"),
        Err(e) => {
            tracing::error!("Failed to copy to clipboard: {}", e);
            Notification::destructive("Failed to copy password")
        }
    }
}
