use chrono::{Local, TimeZone};
use rpawogen::history::{HistoryItem, HistoryStore};
use rpawogen::setclip::{copy_to_clipboard, notify_copy};

fn open_store() -> Result<HistoryStore, String> {
    HistoryStore::open_default().map_err(|e| format!("Failed to open password history: {}", e))
}

fn mask(password: &str) -> String {
    "•".repeat(password.chars().count())
}

fn format_time(item: &HistoryItem) -> String {
    Local
        .timestamp_millis_opt(item.timestamp)
        .single()
        .map_or("unknown".to_string(), |d| d.format("%Y-%m-%d %H:%M:%S").to_string())
}

pub fn list_history(show: bool) -> Result<(), String> {
    let history = open_store()?.get_password_history();
    if history.is_empty() {
        println!("No password history yet");
        return Ok(());
    }

    println!("{:<3} | {:<12} | {:<20} | {}", "#", "Strength", "Time", "Password");
    println!("{}", "-".repeat(80));
    for (i, item) in history.iter().enumerate() {
        let password = if show { item.password.clone() } else { mask(&item.password) };
        println!("{:<3} | {:<12} | {:<20} | {}",
                 i + 1,
                 item.strength.to_string(),
                 format_time(item),
                 password);
    }
    Ok(())
}

/// 按 1 起始的序号选取历史条目
pub fn select_entry(history: &[HistoryItem], index: usize) -> Result<&HistoryItem, String> {
    if history.is_empty() {
        return Err("No password history yet".to_string());
    }
    index
        .checked_sub(1)
        .and_then(|i| history.get(i))
        .ok_or_else(|| format!("Invalid selection. Please enter a number between 1 and {}", history.len()))
}

pub fn copy_entry(index: usize) -> Result<(), String> {
    let history = open_store()?.get_password_history();
    let item = select_entry(&history, index)?;
    notify_copy(&copy_to_clipboard(&item.password)).show();
    Ok(())
}

pub fn clear_history() -> Result<(), String> {
    open_store()?.clear_history();
    println!("Password history cleared.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpawogen::strength::Strength;

    fn sample_history() -> Vec<HistoryItem> {
        ["newest", "middle", "oldest"]
            .iter()
            .map(|p| HistoryItem::new(p, Strength::Weak))
            .collect()
    }

    #[test]
    fn test_select_entry_in_range() {
        let history = sample_history();
        assert_eq!(select_entry(&history, 1).unwrap().password, "newest");
        assert_eq!(select_entry(&history, 3).unwrap().password, "oldest");
    }

    #[test]
    fn test_select_entry_zero_is_invalid() {
        let err = select_entry(&sample_history(), 0).unwrap_err();
        assert_eq!(err, "Invalid selection. Please enter a number between 1 and 3");
    }

    #[test]
    fn test_select_entry_past_end_is_invalid() {
        assert!(select_entry(&sample_history(), 4).is_err());
    }

    #[test]
    fn test_select_entry_empty_history() {
        assert_eq!(select_entry(&[], 1).unwrap_err(), "No password history yet");
    }

    #[test]
    fn test_mask_hides_every_char() {
        assert_eq!(mask("aé#"), "•••");
    }
}
