use super::Settings;
use crate::config::Limits;
use crate::events::DisplaySize;
use crate::utils::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Владелец файла задач и текущего снимка настроек
pub struct ConfigStore {
    path: PathBuf,
    limits: Limits,
    display: DisplaySize,
    current: Arc<Settings>,
}

impl ConfigStore {
    /// Читает файл сразу. Отсутствующий файл даёт пустой снимок.
    pub fn open(path: impl Into<PathBuf>, limits: Limits, display: DisplaySize, fs: &dyn FileSystem) -> Self {
        let mut store = Self {
            path: path.into(),
            limits,
            display,
            current: Arc::new(Settings::empty(&limits, display)),
        };
        store.reload(fs);
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Текущий снимок; читатели держат свой `Arc` и не видят подмену
    pub fn snapshot(&self) -> Arc<Settings> {
        Arc::clone(&self.current)
    }

    /// Строки файла без переводов строк, не больше `max_config_lines`
    pub fn read_lines(&self, fs: &dyn FileSystem) -> Vec<String> {
        if !fs.exists(&self.path) {
            debug!("Файл конфигурации {:?} отсутствует", self.path);
            return Vec::new();
        }

        let content = match fs.read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Не удалось прочитать {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
        if lines.len() > self.limits.max_config_lines {
            warn!(
                "В {:?} больше {} строк, остальные проигнорированы",
                self.path, self.limits.max_config_lines
            );
            lines.truncate(self.limits.max_config_lines);
        }
        lines
    }

    /// Перечитывает файл и подменяет снимок одним присваиванием
    pub fn reload(&mut self, fs: &dyn FileSystem) -> Arc<Settings> {
        let lines = self.read_lines(fs);
        let settings = Arc::new(Settings::parse(&lines, &self.limits, self.display));

        info!(
            "Конфигурация {:?}: {} файлов, {} ключевых слов ({} строк)",
            self.path,
            settings.target_paths.len(),
            settings.keywords.len(),
            lines.len()
        );

        self.current = Arc::clone(&settings);
        settings
    }

    /// Файл исчез: пустой снимок без чтения
    pub fn clear(&mut self) -> Arc<Settings> {
        self.current = Arc::new(Settings::empty(&self.limits, self.display));
        Arc::clone(&self.current)
    }
}
