//! General utility functions.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Name of the per-user data folder
const VIEWER_FOLDER: &str = ".stockviewer";

/// Resolve the data directory.
///
/// A `.stockviewer` folder in the current directory takes precedence over the
/// one in the home directory.
fn get_viewer_dir(temp_name: &str) -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let temp_path = cwd.join(temp_name);

    if temp_path.exists() {
        return temp_path;
    }

    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(temp_name)
}

/// Data directory holding settings and logs
pub static TEMP_DIR: LazyLock<PathBuf> = LazyLock::new(|| get_viewer_dir(VIEWER_FOLDER));

/// Get path for a file in the data directory
pub fn get_file_path(filename: &str) -> PathBuf {
    TEMP_DIR.join(filename)
}

/// Get path for a folder in the data directory, creating it if needed
pub fn get_folder_path(folder_name: &str) -> PathBuf {
    let folder_path = TEMP_DIR.join(folder_name);
    if !folder_path.exists() {
        let _ = fs::create_dir_all(&folder_path);
    }
    folder_path
}

/// Format a price as US dollars with two decimals
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(9.75), "$9.75");
        assert_eq!(format_currency(12.5), "$12.50");
        assert_eq!(format_currency(1234.567), "$1234.57");
    }

    #[test]
    fn test_file_path_in_data_dir() {
        let path = get_file_path("viewer_setting.json");
        assert!(path.ends_with("viewer_setting.json"));
        assert!(path.starts_with(&*TEMP_DIR));
    }
}
