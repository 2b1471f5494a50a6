use super::keyword_scanner::{KeywordScanner, MatchRecord};
use crate::utils::FileSystem;
use std::path::PathBuf;
use tracing::{info, warn};

/// Упорядоченные совпадения с жёстким потолком.
///
/// Всё, что не помещается, отбрасывается и считается в `dropped`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCollection {
    records: Vec<MatchRecord>,
    capacity: usize,
    dropped: usize,
}

impl MatchCollection {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
            dropped: 0,
        }
    }

    /// `false`, если запись не поместилась
    pub fn push(&mut self, record: MatchRecord) -> bool {
        if self.is_full() {
            self.dropped += 1;
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = MatchRecord>) {
        for record in records {
            self.push(record);
        }
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MatchRecord> {
        self.records.get(index)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &MatchRecord> {
        self.records.iter()
    }
}

/// Собирает совпадения по всем целевым файлам в порядке конфигурации
pub struct MatchAggregator<'a> {
    scanner: KeywordScanner<'a>,
    capacity: usize,
}

impl<'a> MatchAggregator<'a> {
    pub fn new(fs: &'a dyn FileSystem, capacity: usize) -> Self {
        Self {
            scanner: KeywordScanner::new(fs),
            capacity,
        }
    }

    /// Новая коллекция целиком; предыдущая не переиспользуется.
    /// После заполнения оставшиеся файлы не читаются.
    pub fn rebuild(&self, paths: &[PathBuf], keywords: &[&str]) -> MatchCollection {
        let mut collection = MatchCollection::with_capacity(self.capacity);
        let mut skipped = 0;

        for (origin, path) in paths.iter().enumerate() {
            if collection.is_full() {
                skipped = paths.len() - origin;
                break;
            }

            collection.extend(self.scanner.scan(origin, path, keywords));
        }

        if collection.dropped() > 0 || skipped > 0 {
            warn!(
                "Достигнут предел в {} совпадений: отброшено {}, не прочитано файлов {}",
                self.capacity,
                collection.dropped(),
                skipped
            );
        }

        info!(
            "Найдено {} совпадений в {} файлах",
            collection.len(),
            paths.len()
        );
        collection
    }
}
