use super::r#trait::DriverTrait;
use crate::error::Result;
use crate::events::window::WINDOW_TITLE;
use crate::events::{DisplayFrame, DisplaySize, UiEvent};
use crate::overlay_error;
use crate::services::keymap::Keymap;
use std::io::{BufRead, Write};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Текстовый драйвер: команды из stdin, кадры в stdout
pub struct TerminalDriver {
    display: DisplaySize,
    events: mpsc::UnboundedReceiver<UiEvent>,
    last_frame: Option<DisplayFrame>,
}

impl TerminalDriver {
    pub fn new(size: DisplaySize) -> Result<Self> {
        info!("Инициализация TerminalDriver ({}x{})", size.width, size.height);

        let (tx, rx) = mpsc::unbounded_channel();

        // Блокирующее чтение stdin в отдельном потоке, чтобы не держать рантайм
        std::thread::Builder::new()
            .name("stdin-commands".to_string())
            .spawn(move || read_commands(tx))?;

        Ok(Self {
            display: size,
            events: rx,
            last_frame: None,
        })
    }
}

fn read_commands(tx: mpsc::UnboundedSender<UiEvent>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Ошибка чтения stdin: {}", e);
                return;
            }
        };

        for event in events_from_line(&line) {
            if tx.send(event).is_err() {
                return;
            }
        }
    }
    debug!("stdin закрыт, команды больше не принимаются");
}

/// Токены строки в события; неизвестные токены пропускаются
pub fn events_from_line(line: &str) -> Vec<UiEvent> {
    line.split_whitespace()
        .filter_map(|token| {
            let event = Keymap::parse(token).and_then(|press| UiEvent::from_key(&press));
            if event.is_none() {
                warn!("Неизвестная команда: {}", token);
            }
            event
        })
        .collect()
}

fn write_frame(out: &mut impl Write, frame: &DisplayFrame) -> std::io::Result<()> {
    writeln!(
        out,
        "-- {} {} zoom {:.2} --",
        WINDOW_TITLE, frame.geometry, frame.appearance.zoom
    )?;
    write!(out, "{}", frame)?;
    out.flush()
}

#[async_trait::async_trait]
impl DriverTrait for TerminalDriver {
    fn display_size(&self) -> DisplaySize {
        self.display
    }

    async fn drain_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        Ok(events)
    }

    async fn render(&mut self, frame: &DisplayFrame) -> Result<()> {
        if self.last_frame.as_ref() == Some(frame) {
            return Ok(());
        }

        if frame.restore_geometry {
            info!("Окно возвращено в {}", frame.geometry);
        }

        write_frame(&mut std::io::stdout().lock(), frame)
            .map_err(|e| overlay_error!(driver, "не удалось вывести кадр: {}", e))?;

        self.last_frame = Some(frame.clone());
        Ok(())
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        info!("TerminalDriver завершает работу");
    }
}
