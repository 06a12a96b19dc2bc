use rpawogen::history::*;
use rpawogen::strength::Strength;
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // 创建测试用 HistoryStore（使用临时目录）
    fn test_store() -> (tempfile::TempDir, HistoryStore) {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = HistoryStore::new(dir.path().join(format!("{}.json", STORAGE_KEY)));
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, store) = test_store();
        assert!(store.get_password_history().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let (_dir, store) = test_store();
        let saved = store.save_password_to_history("Xy7#abcd", Strength::Medium);
        let loaded = store.get_password_history();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].password, "Xy7#abcd");
        assert_eq!(loaded[0].strength, Strength::Medium);
        assert_eq!(loaded[0].id, saved[0].id);
        assert_eq!(loaded[0].timestamp, saved[0].timestamp);
    }

    #[test]
    fn test_newest_first_and_capped() {
        let (_dir, store) = test_store();
        for i in 0..12 {
            let updated = store.save_password_to_history(&format!("password-{}", i), Strength::Weak);
            assert!(updated.len() <= HISTORY_LIMIT);
            assert_eq!(updated[0].password, format!("password-{}", i));
        }
        let history = store.get_password_history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        let passwords: Vec<&str> = history.iter().map(|h| h.password.as_str()).collect();
        assert_eq!(passwords, vec!["password-11", "password-10", "password-9", "password-8", "password-7"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let (_dir, store) = test_store();
        for _ in 0..HISTORY_LIMIT {
            store.save_password_to_history("same", Strength::Weak);
        }
        let mut ids: Vec<String> = store.get_password_history().into_iter().map(|h| h.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), HISTORY_LIMIT);
    }

    #[test]
    fn test_clear_history() {
        let (_dir, store) = test_store();
        store.save_password_to_history("one", Strength::Weak);
        store.save_password_to_history("two", Strength::Strong);
        store.clear_history();
        assert!(store.get_password_history().is_empty());
        assert!(!store.path().exists());
        // 重复清空不会出错
        store.clear_history();
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let (_dir, store) = test_store();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.get_password_history().is_empty());

        // 写入会覆盖损坏的数据
        store.save_password_to_history("fresh", Strength::Strong);
        let history = store.get_password_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].password, "fresh");
    }

    #[test]
    fn test_unwritable_location_is_swallowed() {
        let dir = tempdir().unwrap();
        // 父路径是一个普通文件，无法创建目录
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let store = HistoryStore::new(blocker.join(format!("{}.json", STORAGE_KEY)));

        let updated = store.save_password_to_history("lost", Strength::Weak);
        assert_eq!(updated.len(), 1);
        assert!(store.get_password_history().is_empty());
        store.clear_history();
    }

    #[test]
    fn test_persisted_format() {
        let (_dir, store) = test_store();
        store.save_password_to_history("abc", Strength::VeryStrong);
        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value.as_array().unwrap()[0];
        assert_eq!(entry["password"], "abc");
        assert_eq!(entry["strength"], "very-strong");
        assert!(entry["timestamp"].is_i64());
        assert!(entry["id"].is_string());
    }

    #[test]
    fn test_push_capped() {
        let items: Vec<HistoryItem> = (0..HISTORY_LIMIT)
            .map(|i| HistoryItem::new(&i.to_string(), Strength::Weak))
            .collect();
        let newest = HistoryItem::new("new", Strength::Strong);
        let updated = push_capped(items.clone(), newest.clone());
        assert_eq!(updated.len(), HISTORY_LIMIT);
        assert_eq!(updated[0], newest);
        assert_eq!(updated[1], items[0]);
        assert!(!updated.contains(&items[HISTORY_LIMIT - 1]));

        let updated = push_capped(Vec::new(), newest.clone());
        assert_eq!(updated, vec![newest]);
    }
}
