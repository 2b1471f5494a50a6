use super::keyboard::{Key, KeyPress};
use super::window::ColorChannel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Дискретное событие интерфейса, которое меняет состояние оверлея
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiEvent {
    OffsetUp,
    OffsetDown,
    ResetOffset,
    ReloadConfig,
    ToggleBorder,
    ToggleOnTop,
    RestoreGeometry,
    AdjustColor { channel: ColorChannel, raise: bool },
    ZoomIn,
    ZoomOut,
    ZoomReset,
    /// Любое событие окна (resize, expose): только перерисовка
    Redraw,
    Quit,
}

impl UiEvent {
    /// Раскладка горячих клавиш оверлея
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        let modifiers = press.modifiers;

        if modifiers.shift {
            return match press.key {
                Key::Up => Some(UiEvent::OffsetUp),
                Key::Down => Some(UiEvent::OffsetDown),
                Key::Char(c) => color_channel(c).map(|channel| UiEvent::AdjustColor {
                    channel,
                    raise: false,
                }),
            };
        }

        if modifiers.ctrl {
            return match press.key {
                Key::Char('=') => Some(UiEvent::ZoomIn),
                Key::Char('-') => Some(UiEvent::ZoomOut),
                Key::Char('0') => Some(UiEvent::ZoomReset),
                _ => None,
            };
        }

        match press.key {
            Key::Char('0') => Some(UiEvent::ResetOffset),
            Key::Char('c') => Some(UiEvent::ReloadConfig),
            Key::Char('t') => Some(UiEvent::ToggleBorder),
            Key::Char('z') => Some(UiEvent::RestoreGeometry),
            Key::Char('p') => Some(UiEvent::ToggleOnTop),
            Key::Char('q') => Some(UiEvent::Quit),
            Key::Char(c) => color_channel(c).map(|channel| UiEvent::AdjustColor {
                channel,
                raise: true,
            }),
            Key::Up | Key::Down => None,
        }
    }
}

fn color_channel(c: char) -> Option<ColorChannel> {
    match c {
        'r' => Some(ColorChannel::Red),
        'g' => Some(ColorChannel::Green),
        'b' => Some(ColorChannel::Blue),
        'a' => Some(ColorChannel::Alpha),
        _ => None,
    }
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEvent::AdjustColor { channel, raise } => {
                write!(f, "AdjustColor({:?}, {})", channel, if *raise { "+" } else { "-" })
            }
            other => write!(f, "{:?}", other),
        }
    }
}
