use rpawogen::export::download_as_file;
use rpawogen::history::HistoryStore;
use rpawogen::passgen::{self, PasswordOptions};
use rpawogen::setclip::{copy_to_clipboard, notify_copy};
use rpawogen::strength::calculate_password_strength;
use std::path::PathBuf;

use super::display_strength;

pub fn generate_random(
    options: PasswordOptions,
    copy: bool,
    export_dir: Option<PathBuf>,
    save_history: bool,
) -> Result<(), String> {
    let password = passgen::generate_password(&options);
    println!("Generated random password: {}", password);

    let result = calculate_password_strength(&password);
    display_strength(&result);

    if save_history {
        match HistoryStore::open_default() {
            Ok(store) => {
                store.save_password_to_history(&password, result.strength);
            }
            Err(e) => tracing::error!("Failed to save password to history: {}", e),
        }
    }

    if copy {
        notify_copy(&copy_to_clipboard(&password)).show();
    }

    if let Some(dir) = export_dir {
        let path = download_as_file(&password, &dir)
            .map_err(|e| format!("Failed to export password: {}", e))?;
        println!("Password downloaded as text file: {}", path.display());
    }

    Ok(())
}
