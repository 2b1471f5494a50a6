use super::r#trait::DriverTrait;
use crate::error::Result;
use crate::events::{DisplayFrame, DisplaySize, UiEvent};
use std::collections::VecDeque;
use tracing::info;

const DEMO_EVERY_TICKS: u64 = 16;
const DEMO_EVENTS: [UiEvent; 6] = [
    UiEvent::OffsetDown,
    UiEvent::OffsetDown,
    UiEvent::OffsetUp,
    UiEvent::ResetOffset,
    UiEvent::ZoomIn,
    UiEvent::ZoomReset,
];

/// Драйвер без окна: события по сценарию, кадры только в лог
pub struct DryRunDriver {
    display: DisplaySize,
    script: VecDeque<Vec<UiEvent>>,
    demo: bool,
    tick: u64,
    demo_index: usize,
    rendered: Vec<DisplayFrame>,
}

impl DryRunDriver {
    /// По одному пакету событий на тик, затем тишина. Кадры сохраняются.
    pub fn scripted(display: DisplaySize, script: Vec<Vec<UiEvent>>) -> Self {
        Self {
            display,
            script: script.into(),
            demo: false,
            tick: 0,
            demo_index: 0,
            rendered: Vec::new(),
        }
    }

    /// Бесконечно листает совпадения и меняет масштаб
    pub fn demo(display: DisplaySize) -> Self {
        info!("Dry-run режим - драйвер работает в режиме эмуляции");
        Self {
            demo: true,
            ..Self::scripted(display, Vec::new())
        }
    }

    #[cfg(test)]
    pub fn rendered(&self) -> &[DisplayFrame] {
        &self.rendered
    }
}

#[async_trait::async_trait]
impl DriverTrait for DryRunDriver {
    fn display_size(&self) -> DisplaySize {
        self.display
    }

    async fn drain_events(&mut self) -> Result<Vec<UiEvent>> {
        if let Some(batch) = self.script.pop_front() {
            return Ok(batch);
        }

        if !self.demo {
            return Ok(Vec::new());
        }

        self.tick += 1;
        if self.tick % DEMO_EVERY_TICKS != 0 {
            return Ok(Vec::new());
        }

        let event = DEMO_EVENTS[self.demo_index];
        self.demo_index = (self.demo_index + 1) % DEMO_EVENTS.len();
        info!("Dry-run: эмулируем событие {}", event);
        Ok(vec![event])
    }

    async fn render(&mut self, frame: &DisplayFrame) -> Result<()> {
        info!("Dry-run кадр ({} строк):\n{}", frame.lines.len(), frame);
        if !self.demo {
            self.rendered.push(frame.clone());
        }
        Ok(())
    }
}
