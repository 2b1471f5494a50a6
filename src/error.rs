use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Не удалось определить домашнюю директорию")]
    HomeNotFound,

    #[error("Не удалось создать файл {path:?}: {source}")]
    Bootstrap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Отменено пользователем: {0}")]
    Declined(String),

    #[error("Ошибка драйвера отображения: {0}")]
    Driver(String),
}

impl OverlayError {
    pub fn bootstrap(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OverlayError::Bootstrap {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OverlayError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! overlay_error {
    (declined, $($arg:tt)*) => {
        $crate::error::OverlayError::Declined(format!($($arg)*))
    };
    (driver, $($arg:tt)*) => {
        $crate::error::OverlayError::Driver(format!($($arg)*))
    };
}
