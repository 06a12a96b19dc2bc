use rpawogen::configtool::*;
use rpawogen::passgen::PasswordOptions;
use tempfile::tempdir;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_settings_use_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.defaults, PasswordOptions::default());
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let settings = Settings {
            defaults: PasswordOptions {
                length: 24,
                include_symbols: false,
                avoid_similar_characters: true,
                ..Default::default()
            },
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_corrupt_settings_report_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[1, 2").unwrap();
        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, StoreError::JsonError(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
