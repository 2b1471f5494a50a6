use super::window::{Appearance, WindowGeometry};
use std::fmt;

pub const CURRENT_TASK_PREFIX: &str = "Current Task: ";
pub const EMPTY_PLACEHOLDER: &str = "NONE";

/// Одна строка для отрисовки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    pub selected: bool,
}

impl DisplayLine {
    pub fn new(text: impl Into<String>, selected: bool) -> Self {
        Self {
            text: text.into(),
            selected,
        }
    }
}

/// Всё, что драйвер получает за один кадр
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFrame {
    pub lines: Vec<DisplayLine>,
    pub geometry: WindowGeometry,
    pub appearance: Appearance,
    /// Драйвер должен вернуть окно в `geometry`
    pub restore_geometry: bool,
}

impl DisplayFrame {
    #[cfg(test)]
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

impl fmt::Display for DisplayFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            let marker = if line.selected { '>' } else { ' ' };
            writeln!(f, "{} {}", marker, line.text)?;
        }
        Ok(())
    }
}
