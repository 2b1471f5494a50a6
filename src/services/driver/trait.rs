use crate::error::Result;
use crate::events::{DisplayFrame, DisplaySize, UiEvent};

/// Trait for display drivers that can run in different modes
#[async_trait::async_trait]
pub trait DriverTrait {
    /// Size of the screen the overlay is placed on
    fn display_size(&self) -> DisplaySize;

    /// All events collected since the previous tick, never blocks
    async fn drain_events(&mut self) -> Result<Vec<UiEvent>>;

    /// Draw a frame
    async fn render(&mut self, frame: &DisplayFrame) -> Result<()>;
}

/// Factory function to create an appropriate driver based on the dry_run flag
pub fn create_driver(dry_run: bool) -> Result<Box<dyn DriverTrait + Send>> {
    if dry_run {
        Ok(Box::new(super::dry_run::DryRunDriver::demo(DisplaySize::default())))
    } else {
        Ok(Box::new(super::terminal::TerminalDriver::new(DisplaySize::default())?))
    }
}
