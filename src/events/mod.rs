pub mod frame;
pub mod keyboard;
pub mod ui;
pub mod window;

pub use frame::{DisplayFrame, DisplayLine};
pub use keyboard::{Key, KeyPress, Modifiers};
pub use ui::UiEvent;
pub use window::{Appearance, ColorChannel, DisplaySize, WindowGeometry};
