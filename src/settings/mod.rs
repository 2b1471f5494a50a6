//! Настройки оверлея из файла задач (`.currTasks.conf`).
//!
//! `Settings` - неизменяемый снимок. При перезагрузке строится новый снимок
//! и подменяется целиком (`ConfigStore::reload`), частично обновлённых
//! настроек не бывает.

pub mod bootstrap;
pub mod parser;
pub mod store;

pub use bootstrap::{create_prompt, Bootstrap};
pub use store::ConfigStore;

use crate::config::Limits;
use crate::events::window::{centered_x, DisplaySize, WindowGeometry};
use smallvec::SmallVec;
use std::path::PathBuf;

use parser::{extract_values, parse_bool_or_default, parse_int_or_default};

pub const KEY_FILE: &str = "file";
pub const KEY_KEYWORD: &str = "keyword";
pub const KEY_FIRST_ENTRY_ONLY: &str = "first_entry_only";
pub const KEY_TRIM_OUT_KEYWORDS: &str = "trim_out_keywords";
pub const KEY_WINDOW_X: &str = "initial_window_x";
pub const KEY_WINDOW_Y: &str = "initial_window_y";
pub const KEY_WINDOW_WIDTH: &str = "initial_window_width";
pub const KEY_WINDOW_HEIGHT: &str = "initial_window_height";

const DEFAULT_FIRST_ENTRY_ONLY: bool = true;
const DEFAULT_TRIM_OUT_KEYWORDS: bool = false;

pub type Keywords = SmallVec<[String; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Целевые файлы в порядке из конфигурации
    pub target_paths: Vec<PathBuf>,
    pub keywords: Keywords,
    pub first_entry_only: bool,
    pub trim_out_keywords: bool,
    pub geometry: WindowGeometry,
}

impl Settings {
    /// Разбор уже прочитанных строк. Одинаковые строки всегда дают
    /// одинаковый снимок.
    pub fn parse<S: AsRef<str>>(lines: &[S], limits: &Limits, display: DisplaySize) -> Self {
        let target_paths = extract_values(KEY_FILE, lines, limits.max_target_paths)
            .into_iter()
            .map(PathBuf::from)
            .collect();

        let keywords = extract_values(KEY_KEYWORD, lines, limits.max_keywords)
            .into_iter()
            .map(str::to_string)
            .collect();

        let single = |key: &str| extract_values(key, lines, 1);

        let defaults = WindowGeometry::defaults_for(display);
        let width = parse_int_or_default(&single(KEY_WINDOW_WIDTH), defaults.width);
        let height = parse_int_or_default(&single(KEY_WINDOW_HEIGHT), defaults.height);
        // без явного x окно центрируется по фактической ширине
        let x = parse_int_or_default(&single(KEY_WINDOW_X), centered_x(display.width, width));
        let y = parse_int_or_default(&single(KEY_WINDOW_Y), defaults.y);

        Self {
            target_paths,
            keywords,
            first_entry_only: parse_bool_or_default(
                &single(KEY_FIRST_ENTRY_ONLY),
                DEFAULT_FIRST_ENTRY_ONLY,
            ),
            trim_out_keywords: parse_bool_or_default(
                &single(KEY_TRIM_OUT_KEYWORDS),
                DEFAULT_TRIM_OUT_KEYWORDS,
            ),
            geometry: WindowGeometry {
                x,
                y,
                width,
                height,
            },
        }
    }

    /// Снимок для отсутствующего файла задач
    pub fn empty(limits: &Limits, display: DisplaySize) -> Self {
        Self::parse::<&str>(&[], limits, display)
    }

    pub fn keyword_refs(&self) -> Vec<&str> {
        self.keywords.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: DisplaySize = DisplaySize {
        width: 1920,
        height: 1080,
    };

    fn parse(raw: &[&str]) -> Settings {
        Settings::parse(raw, &Limits::default(), DISPLAY)
    }

    #[test]
    fn test_parse_full_config() {
        let settings = parse(&[
            "; overlay config",
            "file = \"/tmp/a.org\"",
            "file = \"/tmp/b.org\"",
            "keyword = \"TODO\"",
            "keyword = \"WAIT\"",
            "first_entry_only = \"false\"",
            "trim_out_keywords = \"true\"",
            "initial_window_x = \"100\"",
            "initial_window_y = \"20\"",
            "initial_window_width = \"800\"",
            "initial_window_height = \"40\"",
        ]);

        assert_eq!(
            settings.target_paths,
            vec![PathBuf::from("/tmp/a.org"), PathBuf::from("/tmp/b.org")]
        );
        // строка trim_out_keywords содержит подстроку "keyword"
        assert_eq!(settings.keyword_refs(), vec!["TODO", "WAIT", "true"]);
        assert!(!settings.first_entry_only);
        assert!(settings.trim_out_keywords);
        assert_eq!(
            settings.geometry,
            WindowGeometry {
                x: 100,
                y: 20,
                width: 800,
                height: 40
            }
        );
    }

    #[test]
    fn test_trim_out_keywords_line_counts_as_keyword() {
        let settings = parse(&["keyword = \"TODO\"", "trim_out_keywords = \"true\""]);
        assert_eq!(settings.keyword_refs(), vec!["TODO", "true"]);
        assert!(settings.trim_out_keywords);

        let settings = parse(&["trim_out_keywords = \"false\""]);
        assert_eq!(settings.keyword_refs(), vec!["false"]);
        assert!(!settings.trim_out_keywords);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = parse(&[]);

        assert!(settings.target_paths.is_empty());
        assert!(settings.keywords.is_empty());
        assert!(settings.first_entry_only);
        assert!(!settings.trim_out_keywords);
        assert_eq!(settings.geometry, WindowGeometry::defaults_for(DISPLAY));
        assert_eq!(settings, Settings::empty(&Limits::default(), DISPLAY));
    }

    #[test]
    fn test_width_without_x_recenters() {
        let settings = parse(&["initial_window_width = \"920\""]);
        assert_eq!(settings.geometry.width, 920);
        assert_eq!(settings.geometry.x, 500);
    }

    #[test]
    fn test_single_valued_keys_take_first_match() {
        let settings = parse(&[
            "initial_window_height = \"30\"",
            "initial_window_height = \"90\"",
            "first_entry_only = \"maybe\"",
            "first_entry_only = \"true\"",
        ]);
        assert_eq!(settings.geometry.height, 30);
        assert!(!settings.first_entry_only);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let raw = [
            "file = \"/tmp/a.org\"",
            "keyword = \"TODO\"",
            "# keyword = \"NEVER\"",
            "keyword = \"TODO\"",
            "garbage line",
            "initial_window_x = \"x\"",
        ];
        assert_eq!(parse(&raw), parse(&raw));
    }

    #[test]
    fn test_capacity_limits_are_applied() {
        let limits = Limits {
            max_target_paths: 1,
            max_keywords: 2,
            ..Limits::default()
        };
        let raw = [
            "file = \"/tmp/a.org\"",
            "file = \"/tmp/b.org\"",
            "keyword = \"A\"",
            "keyword = \"B\"",
            "keyword = \"C\"",
        ];
        let settings = Settings::parse(&raw, &limits, DISPLAY);
        assert_eq!(settings.target_paths.len(), 1);
        assert_eq!(settings.keyword_refs(), vec!["A", "B"]);
    }
}
