use crate::events::{Key, KeyPress, Modifiers};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Маппинг имён клавиш, которые понимает терминальный драйвер
pub struct Keymap;

// Статическая карта именованных клавиш
static KEY_NAMES: Lazy<HashMap<&'static str, Key>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Стрелки
    map.insert("up", Key::Up);
    map.insert("down", Key::Down);

    // Символы, которые неудобно писать после '+'
    map.insert("equals", Key::Char('='));
    map.insert("minus", Key::Char('-'));
    map.insert("zero", Key::Char('0'));

    // Синонимы команд
    map.insert("quit", Key::Char('q'));
    map.insert("exit", Key::Char('q'));
    map.insert("reload", Key::Char('c'));
    map.insert("reset", Key::Char('0'));

    map
});

impl Keymap {
    /// Имя или одиночный символ в клавишу
    pub fn key(name: &str) -> Option<Key> {
        if let Some(key) = KEY_NAMES.get(name.to_lowercase().as_str()) {
            return Some(*key);
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Key::Char(c.to_ascii_lowercase())),
            _ => None,
        }
    }

    /// Разбор токена вида `ctrl+=`, `shift+down`, `R` (заглавная = shift)
    pub fn parse(token: &str) -> Option<KeyPress> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        // последний '+' отделяет клавишу, кроме случая "ctrl++"
        let (prefix, key_name) = match token.rfind('+') {
            Some(pos) if pos + 1 == token.len() && token[..pos].ends_with('+') => {
                (&token[..pos - 1], &token[pos..])
            }
            Some(pos) if pos + 1 < token.len() => (&token[..pos], &token[pos + 1..]),
            _ => ("", token),
        };

        let mut modifiers = Modifiers::new();
        for modifier in prefix.split('+').filter(|m| !m.is_empty()) {
            if !modifiers.insert(&modifier.to_lowercase()) {
                return None;
            }
        }

        let mut single = key_name.chars();
        if let (Some(c), None) = (single.next(), single.next()) {
            if c.is_ascii_uppercase() {
                modifiers.shift = true;
            }
        }

        Self::key(key_name).map(|key| KeyPress::new(key, modifiers))
    }
}
