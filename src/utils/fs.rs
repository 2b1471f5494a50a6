use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Минимальный срез файловой системы, нужный детектору изменений и сканеру.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// "Сейчас" для событий появления/исчезновения файлов
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
