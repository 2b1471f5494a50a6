//! Driver: внешний коллаборатор оверлея.
//!
//! Драйвер отвечает ТОЛЬКО за доставку событий интерфейса и отрисовку
//! готового `DisplayFrame`. Он не читает файлы и не принимает решений об
//! устаревании: всё это делает `OverlayEngine`.

mod dry_run;
mod terminal;
mod r#trait;

pub use self::dry_run::DryRunDriver;
pub use self::r#trait::{create_driver, DriverTrait};
