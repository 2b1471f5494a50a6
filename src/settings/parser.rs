//! Разбор строк файла задач вида `key = "value"`.
//!
//! Строка без кавычек или с незакрытой кавычкой пропускается, ошибок нет.

use tracing::warn;

pub const COMMENT_MARKERS: [char; 2] = ['#', ';'];

/// Первый непробельный символ строки - маркер комментария
pub fn is_comment(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| COMMENT_MARKERS.contains(&c))
}

/// Содержимое между первой и второй `"` строки
pub fn quoted_value(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once('"')?;
    let (value, _) = rest.split_once('"')?;
    Some(value)
}

/// Значения ключа `key` в порядке появления, без повторов.
///
/// Строка подходит, если она содержит подстроку `key` (в любом месте,
/// включая значение) и не является комментарием. Больше `limit` различных
/// значений не берётся.
pub fn extract_values<'a, S: AsRef<str>>(key: &str, lines: &'a [S], limit: usize) -> Vec<&'a str> {
    let mut values: Vec<&'a str> = Vec::new();

    for line in lines.iter().map(AsRef::as_ref) {
        if !line.contains(key) || is_comment(line) {
            continue;
        }

        let Some(value) = quoted_value(line) else {
            continue;
        };

        if values.contains(&value) {
            continue;
        }

        if values.len() >= limit {
            if limit > 1 {
                warn!("Ключ '{}': больше {} значений, остальные отброшены", key, limit);
            }
            break;
        }

        values.push(value);
    }

    values
}

/// Целое из первого значения, только если оно начинается с цифры.
/// Как `atoi`: берутся ведущие цифры, хвост игнорируется.
pub fn parse_int_or_default(values: &[&str], default: i32) -> i32 {
    let Some(first) = values.first() else {
        return default;
    };

    let digits: &str = {
        let end = first
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(first.len());
        &first[..end]
    };

    if digits.is_empty() {
        return default;
    }

    match digits.parse::<i32>() {
        Ok(value) => value,
        Err(_) => {
            warn!("Значение '{}' вне диапазона i32, используется {}", first, default);
            default
        }
    }
}

/// `true` только для буквального `"true"`; отсутствие значения даёт `default`,
/// любое другое значение даёт `false`.
pub fn parse_bool_or_default(values: &[&str], default: bool) -> bool {
    match values.first() {
        None => default,
        Some(value) => *value == "true",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_comment_detection() {
        assert!(is_comment("# file = \"a\""));
        assert!(is_comment("   ; keyword = \"TODO\""));
        assert!(is_comment("\t#x"));
        assert!(!is_comment("file = \"a#b\""));
        assert!(!is_comment(""));
    }

    #[test]
    fn test_quoted_value() {
        assert_eq!(quoted_value("file = \"/tmp/a.org\""), Some("/tmp/a.org"));
        assert_eq!(quoted_value("keyword = \"\""), Some(""));
        assert_eq!(quoted_value("keyword = \"TODO"), None);
        assert_eq!(quoted_value("keyword = TODO"), None);
        assert_eq!(quoted_value("k = \"a\" \"b\""), Some("a"));
    }

    #[test]
    fn test_extract_values_dedupes_and_keeps_order() {
        let config = lines(&[
            "file = \"/tmp/b.org\"",
            "file = \"/tmp/a.org\"",
            "file = \"/tmp/b.org\"",
            "# file = \"/tmp/commented.org\"",
            "file = /tmp/unquoted.org",
            "file = \"/tmp/unterminated.org",
        ]);

        assert_eq!(
            extract_values("file", &config, 90),
            vec!["/tmp/b.org", "/tmp/a.org"]
        );
    }

    #[test]
    fn test_extract_values_matches_key_anywhere_in_line() {
        let config = lines(&["keyword = \"file\"", "keyword = \"TODO\""]);
        assert_eq!(extract_values("file", &config, 90), vec!["file"]);
    }

    #[test]
    fn test_extract_values_respects_limit() {
        let config = lines(&[
            "keyword = \"A\"",
            "keyword = \"B\"",
            "keyword = \"C\"",
        ]);
        assert_eq!(extract_values("keyword", &config, 2), vec!["A", "B"]);
        assert_eq!(extract_values("keyword", &config, 1), vec!["A"]);
    }

    #[test]
    fn test_parse_int_or_default() {
        assert_eq!(parse_int_or_default(&["640"], 10), 640);
        assert_eq!(parse_int_or_default(&["12px"], 10), 12);
        assert_eq!(parse_int_or_default(&["-5"], 10), 10);
        assert_eq!(parse_int_or_default(&["wide"], 10), 10);
        assert_eq!(parse_int_or_default(&[""], 10), 10);
        assert_eq!(parse_int_or_default(&[], 10), 10);
        assert_eq!(parse_int_or_default(&["99999999999"], 10), 10);
    }

    #[test]
    fn test_parse_bool_or_default() {
        assert!(parse_bool_or_default(&["true"], false));
        assert!(!parse_bool_or_default(&["TRUE"], true));
        assert!(!parse_bool_or_default(&["yes"], true));
        assert!(parse_bool_or_default(&[], true));
        assert!(!parse_bool_or_default(&[], false));
    }
}
