use crate::debug_if_enabled;
use crate::utils::FileSystem;
use std::path::Path;
use tracing::{debug, warn};

/// Строка целевого файла, в которой найдено ключевое слово
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Строка без изменений
    pub line: String,
    /// Индекс целевого файла в конфигурации
    pub origin: usize,
    /// Индекс совпавшего ключевого слова
    pub keyword: usize,
}

/// Пары (строка, индекс ключевого слова) в порядке строк, затем ключевых слов.
///
/// Строка с двумя ключевыми словами встречается дважды. Пустые строки
/// пропускаются, совпадение - обычное вхождение подстроки.
pub fn keyword_lines<'a>(
    content: &'a str,
    keywords: &'a [&'a str],
) -> impl Iterator<Item = (&'a str, usize)> + 'a {
    content
        .split('\n')
        .filter(|line| !line.is_empty())
        .flat_map(move |line| {
            keywords
                .iter()
                .enumerate()
                .filter(move |(_, keyword)| line.contains(**keyword))
                .map(move |(index, _)| (line, index))
        })
}

pub struct KeywordScanner<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> KeywordScanner<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Все совпадения файла. Недоступный файл ничего не вносит в этот тик.
    pub fn scan(&self, origin: usize, path: &Path, keywords: &[&str]) -> Vec<MatchRecord> {
        if !self.fs.exists(path) {
            debug!("Пропускаем {:?}: файл не существует", path);
            return Vec::new();
        }

        let content = match self.fs.read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Не удалось прочитать {:?}: {}", path, e);
                return Vec::new();
            }
        };

        keyword_lines(&content, keywords)
            .map(|(line, keyword)| {
                debug_if_enabled!("{:?}: [{}] {}", path, keywords[keyword], line);
                MatchRecord {
                    line: line.to_string(),
                    origin,
                    keyword,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::memory::MemoryFileSystem;

    fn lines_of(records: &[MatchRecord]) -> Vec<&str> {
        records.iter().map(|r| r.line.as_str()).collect()
    }

    #[test]
    fn test_single_keyword_scan() {
        let fs = MemoryFileSystem::new();
        fs.write("/tmp/a.org", "* TODO write report\n* DONE ship it\n");

        let records = KeywordScanner::new(&fs).scan(0, Path::new("/tmp/a.org"), &["TODO"]);
        assert_eq!(lines_of(&records), vec!["* TODO write report"]);
        assert_eq!(records[0].origin, 0);
        assert_eq!(records[0].keyword, 0);
    }

    #[test]
    fn test_line_with_two_keywords_yields_two_records() {
        let fs = MemoryFileSystem::new();
        fs.write("/tmp/a.org", "* TODO WAIT blocked task\n");

        let records = KeywordScanner::new(&fs).scan(3, Path::new("/tmp/a.org"), &["TODO", "WAIT"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, "* TODO WAIT blocked task");
        assert_eq!(records[1].line, "* TODO WAIT blocked task");
        assert_eq!((records[0].keyword, records[1].keyword), (0, 1));
        assert!(records.iter().all(|r| r.origin == 3));
    }

    #[test]
    fn test_overlapping_keywords_each_count() {
        let matches: Vec<_> = keyword_lines("TODOS here", &["TODO", "TODOS", "ODO"]).collect();
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|(line, _)| *line == "TODOS here"));
    }

    #[test]
    fn test_substring_matching_is_not_word_aware() {
        let matches: Vec<_> = keyword_lines("banana\nkiwi\n", &["a"]).collect();
        assert_eq!(matches, vec![("banana", 0)]);
    }

    #[test]
    fn test_order_is_line_then_keyword() {
        let content = "WAIT first\nTODO second\nTODO WAIT third\n";
        let matches: Vec<_> = keyword_lines(content, &["TODO", "WAIT"]).collect();
        assert_eq!(
            matches,
            vec![
                ("WAIT first", 1),
                ("TODO second", 0),
                ("TODO WAIT third", 0),
                ("TODO WAIT third", 1),
            ]
        );
    }

    #[test]
    fn test_scan_returns_every_match() {
        let fs = MemoryFileSystem::new();
        fs.write("/tmp/a.org", "TODO 1\nTODO 2\nTODO 3\n");

        let records = KeywordScanner::new(&fs).scan(0, Path::new("/tmp/a.org"), &["TODO"]);
        assert_eq!(lines_of(&records), vec!["TODO 1", "TODO 2", "TODO 3"]);
    }

    #[test]
    fn test_missing_file_contributes_nothing() {
        let fs = MemoryFileSystem::new();
        let records = KeywordScanner::new(&fs).scan(0, Path::new("/tmp/none.org"), &["TODO"]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_no_keywords_no_matches() {
        assert_eq!(keyword_lines("TODO a\n", &[]).count(), 0);
    }
}
