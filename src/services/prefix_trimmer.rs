//! Срезает разметку списков/заголовков (`*`, `-`, `+`, `#`) и ключевое слово
//! в начале строки. Функции возвращают срез исходной строки.

const ITEM_MARKERS: [char; 4] = ['*', '-', '+', '#'];

fn skip_one_space(text: &str) -> &str {
    text.strip_prefix(' ').unwrap_or(text)
}

/// Ведущие пробелы/табы, затем серия одного маркера и один пробел после неё
pub fn trim_item_prefix(line: &str) -> &str {
    let rest = line.trim_start_matches([' ', '\t']);

    match rest.chars().next() {
        Some(marker) if ITEM_MARKERS.contains(&marker) => {
            skip_one_space(rest.trim_start_matches(marker))
        }
        _ => rest,
    }
}

/// Разметка, затем `keyword` и один пробел. Пустое ключевое слово
/// оставляет строку как есть.
pub fn trim_keyword_prefix<'a>(line: &'a str, keyword: &str) -> &'a str {
    if keyword.is_empty() {
        return line;
    }

    let rest = trim_item_prefix(line);
    match rest.strip_prefix(keyword) {
        Some(after) => skip_one_space(after),
        None => rest,
    }
}

/// Последовательно по всем ключевым словам в порядке конфигурации
pub fn trim_all<'a, S: AsRef<str>>(line: &'a str, keywords: &[S]) -> &'a str {
    keywords
        .iter()
        .fold(line, |text, keyword| trim_keyword_prefix(text, keyword.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_heading_with_keyword() {
        assert_eq!(trim_keyword_prefix("* TODO write report", "TODO"), "write report");
        assert_eq!(trim_keyword_prefix("*** TODO nested", "TODO"), "nested");
    }

    #[test]
    fn test_item_markers() {
        assert_eq!(trim_item_prefix("- item"), "item");
        assert_eq!(trim_item_prefix("++ item"), "item");
        assert_eq!(trim_item_prefix("## Heading"), "Heading");
        assert_eq!(trim_item_prefix("  \t* indented"), "indented");
        assert_eq!(trim_item_prefix("*bold*"), "bold*");
        assert_eq!(trim_item_prefix("plain text"), "plain text");
        assert_eq!(trim_item_prefix("   plain"), "plain");
    }

    #[test]
    fn test_only_one_marker_kind_is_consumed() {
        assert_eq!(trim_item_prefix("*- mixed"), "- mixed");
    }

    #[test]
    fn test_keyword_must_start_remainder() {
        assert_eq!(trim_keyword_prefix("* write TODO later", "TODO"), "write TODO later");
        assert_eq!(trim_keyword_prefix("TODOS now", "TODO"), "S now");
        assert_eq!(trim_keyword_prefix("- WAIT", "WAIT"), "");
    }

    #[test]
    fn test_empty_keyword_is_noop() {
        assert_eq!(trim_keyword_prefix("* TODO x", ""), "* TODO x");
    }

    #[test]
    fn test_trim_all_applies_keywords_in_order() {
        assert_eq!(trim_all("* TODO WAIT blocked", &["TODO", "WAIT"]), "blocked");
        assert_eq!(trim_all("* WAIT TODO blocked", &["TODO", "WAIT"]), "TODO blocked");
        assert_eq!(trim_all::<&str>("* TODO x", &[]), "* TODO x");
    }
}
