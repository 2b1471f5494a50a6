use serde::{Deserialize, Serialize};
use std::fmt;

pub const WINDOW_TITLE: &str = "WhatWasiDoing";

const COLOR_CHANGE_FACTOR: u8 = 16;
const ZOOM_SCALE_FACTOR: f32 = 0.15;
const MIN_ZOOM_SCALE: f32 = 0.5;
const MAX_ZOOM_SCALE: f32 = 5.0;

/// Геометрия окна оверлея
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    /// Полоса внизу экрана, по центру, чуть уже экрана
    pub fn defaults_for(display: DisplaySize) -> Self {
        let width = display.width - 60;
        let height = 50;
        Self {
            x: centered_x(display.width, width),
            y: display.height - height,
            width,
            height,
        }
    }
}

impl fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

pub fn centered_x(display_width: i32, window_width: i32) -> i32 {
    display_width / 2 - window_width / 2
}

/// Размер экрана, сообщаемый драйвером
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: i32,
    pub height: i32,
}

impl Default for DisplaySize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    Alpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Каналы переполняются по кругу, как у u8
    pub fn shift(&mut self, channel: ColorChannel, raise: bool) {
        let value = match channel {
            ColorChannel::Red => &mut self.r,
            ColorChannel::Green => &mut self.g,
            ColorChannel::Blue => &mut self.b,
            ColorChannel::Alpha => &mut self.a,
        };
        *value = if raise {
            value.wrapping_add(COLOR_CHANGE_FACTOR)
        } else {
            value.wrapping_sub(COLOR_CHANGE_FACTOR)
        };
    }
}

/// Внешний вид окна, меняется только событиями пользователя
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub background: Rgba,
    pub zoom: f32,
    pub bordered: bool,
    pub resizable: bool,
    pub always_on_top: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: Rgba {
                r: 24,
                g: 128,
                b: 64,
                a: 240,
            },
            zoom: 1.0,
            bordered: false,
            resizable: false,
            always_on_top: true,
        }
    }
}

impl Appearance {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_SCALE_FACTOR * self.zoom).clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_SCALE_FACTOR * self.zoom).clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Рамка и изменение размера переключаются вместе
    pub fn toggle_border(&mut self) {
        self.bordered = !self.bordered;
        self.resizable = !self.resizable;
    }

    pub fn toggle_on_top(&mut self) {
        self.always_on_top = !self.always_on_top;
    }
}
