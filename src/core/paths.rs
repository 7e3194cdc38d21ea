//! Centralized path helpers for cache and log locations.

use std::path::PathBuf;

use crate::core::app;

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Cache directory (~/.cache/foodies-chat/).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Log file used in TUI mode (~/.cache/foodies-chat/foodies-chat.log).
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|d| d.join(format!("{}.log", app::NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_named_after_the_app() {
        if let Some(path) = log_file() {
            assert_eq!(
                path.file_name().and_then(|n| n.to_str()),
                Some("foodies-chat.log")
            );
            assert_eq!(path.parent(), cache_dir().as_deref());
        }
    }
}
