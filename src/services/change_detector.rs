//! Обнаружение устаревания по опросу: сравниваем время изменения и факт
//! существования файлов между тиками. Подписки на события ФС нет.

use crate::trace_if_enabled;
use crate::utils::FileSystem;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Отслеживаемый целевой файл
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedPath {
    pub path: PathBuf,
    pub existed: bool,
}

impl WatchedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            existed: true,
        }
    }
}

/// Набор целевых файлов с общим "последним увиденным" временем.
///
/// Заменяется целиком при перезагрузке конфигурации.
#[derive(Debug, Clone)]
pub struct TargetWatcher {
    paths: Vec<WatchedPath>,
    last_seen: SystemTime,
}

impl TargetWatcher {
    pub fn new<P: AsRef<Path>>(paths: &[P]) -> Self {
        Self {
            paths: paths.iter().map(|p| WatchedPath::new(p.as_ref())).collect(),
            last_seen: UNIX_EPOCH,
        }
    }

    #[cfg(test)]
    pub fn paths(&self) -> &[WatchedPath] {
        &self.paths
    }

    /// `true`, если нужно пересканировать файлы.
    ///
    /// Первый же переход "есть/нет" считается событием "сейчас" и
    /// прерывает обход: остальные переходы будут замечены на следующих тиках.
    pub fn is_stale(&mut self, fs: &dyn FileSystem) -> bool {
        let mut latest = UNIX_EPOCH;

        for watched in self.paths.iter_mut() {
            let exists = fs.exists(&watched.path);

            match (exists, watched.existed) {
                (false, true) => {
                    debug!("Файл {:?} исчез", watched.path);
                    watched.existed = false;
                    latest = fs.now();
                    break;
                }
                (true, false) => {
                    debug!("Файл {:?} появился", watched.path);
                    watched.existed = true;
                    latest = fs.now();
                    break;
                }
                (false, false) => continue,
                (true, true) => match fs.modified(&watched.path) {
                    Ok(mtime) => {
                        if mtime > latest {
                            latest = mtime;
                        }
                    }
                    Err(e) => {
                        warn!("Не удалось получить mtime {:?}: {}", watched.path, e);
                    }
                },
            }
        }

        let stale = self.last_seen < latest;
        if stale {
            trace_if_enabled!("Целевые файлы изменились: {:?} -> {:?}", self.last_seen, latest);
            self.last_seen = latest;
        }
        stale
    }
}

/// Итог проверки файла конфигурации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange {
    Unchanged,
    /// Файл изменился или появился - перечитать
    Modified,
    /// Файл исчез - настройки становятся пустыми
    Removed,
}

/// Отдельный трекер для самого файла конфигурации
#[derive(Debug, Clone)]
pub struct ConfigWatcher {
    path: PathBuf,
    existed: bool,
    last_seen: SystemTime,
}

impl ConfigWatcher {
    /// Базовая точка - текущее состояние файла
    pub fn new(path: impl Into<PathBuf>, fs: &dyn FileSystem) -> Self {
        let path = path.into();
        let existed = fs.exists(&path);
        let last_seen = if existed {
            fs.modified(&path).unwrap_or(UNIX_EPOCH)
        } else {
            UNIX_EPOCH
        };

        Self {
            path,
            existed,
            last_seen,
        }
    }

    pub fn exists(&self) -> bool {
        self.existed
    }

    pub fn check(&mut self, fs: &dyn FileSystem) -> ConfigChange {
        let exists = fs.exists(&self.path);

        let (latest, change) = match (exists, self.existed) {
            (false, true) => {
                self.existed = false;
                (fs.now(), ConfigChange::Removed)
            }
            (false, false) => (self.last_seen, ConfigChange::Unchanged),
            (true, false) => {
                self.existed = true;
                (fs.now(), ConfigChange::Modified)
            }
            (true, true) => match fs.modified(&self.path) {
                Ok(mtime) => (mtime, ConfigChange::Modified),
                Err(e) => {
                    warn!("Не удалось получить mtime {:?}: {}", self.path, e);
                    (self.last_seen, ConfigChange::Unchanged)
                }
            },
        };

        if self.last_seen < latest {
            debug!("Файл конфигурации {:?}: {:?}", self.path, change);
            self.last_seen = latest;
            change
        } else {
            ConfigChange::Unchanged
        }
    }
}
