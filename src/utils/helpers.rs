use std::env;
use std::fs;
use std::io;
use std::path::Path;

/// Returns the value of the environment variable `key`.
/// If the variable is not set, returns the provided fallback value or an empty string if no fallback is provided.
pub fn get_env(key: &str, fallback: Option<&str>) -> String {
    env::var(key).unwrap_or_else(|_| fallback.unwrap_or("").to_string())
}

/// Creates a folder (and any necessary parent directories) at `folder_path`.
pub fn create_folder(folder_path: &Path) -> io::Result<()> {
    fs::create_dir_all(folder_path)
}

/// Creates the directory a file will be written into, if the path has one.
pub fn create_parent_folder(file_path: &Path) -> io::Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_folder(parent),
        _ => Ok(()),
    }
}
