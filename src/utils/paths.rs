use crate::error::{OverlayError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".currTasks.conf";
pub const DEMO_TARGET_FILE: &str = "todos.org";

/// Домашняя директория пользователя. Без неё работать нельзя.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(OverlayError::HomeNotFound)
}

/// Путь к файлу задач: явный из CLI или `$HOME/.currTasks.conf`
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        debug!("Используется указанный файл конфигурации: {:?}", path);
        return Ok(path.to_path_buf());
    }

    Ok(home_dir()?.join(CONFIG_FILE_NAME))
}

pub fn demo_target_path(home: &Path) -> PathBuf {
    home.join(DEMO_TARGET_FILE)
}
