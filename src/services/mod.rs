pub mod change_detector;
pub mod driver;
pub mod keymap;
pub mod keyword_scanner;
pub mod match_aggregator;
pub mod navigator;
pub mod overlay;
pub mod prefix_trimmer;

pub use driver::create_driver;
pub use overlay::{run_overlay, OverlayEngine};
