use rpawogen::configtool::{CONFIG_FILE_NAME, Settings, get_config_dir};
use rpawogen::passgen::PasswordOptions;

pub fn show_defaults() -> Result<(), String> {
    let settings = Settings::load();
    let json = serde_json::to_string_pretty(&settings.defaults)
        .map_err(|e| format!("Failed to format settings: {}", e))?;
    println!("{}", json);
    Ok(())
}

/// 保存新的默认生成选项；reset 时恢复内置默认值
pub fn save_defaults(options: PasswordOptions, reset: bool) -> Result<(), String> {
    let path = get_config_dir().map_err(|e| e.to_string())?.join(CONFIG_FILE_NAME);
    let settings = Settings {
        defaults: if reset { PasswordOptions::default() } else { options },
    };
    settings.save_to(&path)
        .map_err(|e| format!("Failed to write config file: {}", e))?;
    println!("Default options saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpawogen::configtool::HOME_ENV;
    use std::env;
    use tempfile::tempdir;

    // 环境变量是进程级的，保存与重置放在同一个测试里顺序执行
    #[test]
    fn test_save_and_reset_defaults_under_home_override() {
        let dir = tempdir().unwrap();
        unsafe {
            env::set_var(HOME_ENV, dir.path());
        }
        let path = dir.path().join(CONFIG_FILE_NAME);

        let custom = PasswordOptions {
            length: 30,
            include_symbols: false,
            avoid_similar_characters: true,
            ..Default::default()
        };
        save_defaults(custom.clone(), false).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap().defaults, custom);
        assert_eq!(Settings::load().defaults, custom);

        save_defaults(custom, true).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap().defaults, PasswordOptions::default());

        unsafe {
            env::remove_var(HOME_ENV);
        }
    }
}
