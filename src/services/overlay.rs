//! Тик оверлея: события -> конфигурация -> целевые файлы -> кадр.
//!
//! Всё состояние принадлежит `OverlayEngine`, единственному мутатору.
//! Внутри тика порядок строгий: перечитывание конфигурации всегда
//! завершается до проверки целевых файлов, пересборка - до отрисовки.

use super::change_detector::{ConfigChange, ConfigWatcher, TargetWatcher};
use super::driver::DriverTrait;
use super::match_aggregator::{MatchAggregator, MatchCollection};
use super::navigator::NavigationState;
use super::prefix_trimmer::trim_all;
use crate::error::Result;
use crate::events::frame::{CURRENT_TASK_PREFIX, EMPTY_PLACEHOLDER};
use crate::events::{Appearance, DisplayFrame, DisplayLine, UiEvent};
use crate::settings::{ConfigStore, Settings};
use crate::utils::FileSystem;
use std::future::Future;
use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

/// Что произошло за тик
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub config_reloaded: bool,
    pub rebuilt: bool,
}

pub struct OverlayEngine {
    fs: Arc<dyn FileSystem + Send + Sync>,
    store: ConfigStore,
    config_watcher: ConfigWatcher,
    targets: TargetWatcher,
    matches: MatchCollection,
    navigation: NavigationState,
    appearance: Appearance,
    reload_requested: bool,
    restore_geometry: bool,
    needs_render: bool,
    running: bool,
}

impl OverlayEngine {
    /// Сразу строит первую коллекцию совпадений
    pub fn new(fs: Arc<dyn FileSystem + Send + Sync>, store: ConfigStore) -> Self {
        let config_watcher = ConfigWatcher::new(store.path(), fs.as_ref());
        let settings = store.snapshot();
        let capacity = store.limits().match_capacity;

        let mut engine = Self {
            fs,
            store,
            config_watcher,
            targets: TargetWatcher::new(&settings.target_paths),
            matches: MatchCollection::with_capacity(capacity),
            navigation: NavigationState::new(),
            appearance: Appearance::default(),
            reload_requested: false,
            restore_geometry: false,
            needs_render: true,
            running: true,
        };
        engine.targets.is_stale(engine.fs.as_ref());
        engine.rebuild(&settings);
        engine
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn matches(&self) -> &MatchCollection {
        &self.matches
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn settings(&self) -> Arc<Settings> {
        self.store.snapshot()
    }

    /// Любое событие требует перерисовки
    pub fn handle_event(&mut self, event: UiEvent) {
        debug!("Событие интерфейса: {}", event);
        self.needs_render = true;

        match event {
            UiEvent::OffsetUp => self.navigation.step(-1),
            UiEvent::OffsetDown => self.navigation.step(1),
            UiEvent::ResetOffset => self.navigation.reset(),
            UiEvent::ReloadConfig => self.reload_requested = true,
            UiEvent::ToggleBorder => self.appearance.toggle_border(),
            UiEvent::ToggleOnTop => self.appearance.toggle_on_top(),
            UiEvent::RestoreGeometry => self.restore_geometry = true,
            UiEvent::AdjustColor { channel, raise } => {
                self.appearance.background.shift(channel, raise)
            }
            UiEvent::ZoomIn => self.appearance.zoom_in(),
            UiEvent::ZoomOut => self.appearance.zoom_out(),
            UiEvent::ZoomReset => self.appearance.reset_zoom(),
            UiEvent::Redraw => {}
            UiEvent::Quit => {
                info!("Получен запрос на завершение");
                self.running = false;
            }
        }
    }

    /// Проверка устаревания и, при необходимости, пересборка
    pub fn tick(&mut self) -> TickOutcome {
        let fs = Arc::clone(&self.fs);
        let change = self.config_watcher.check(fs.as_ref());

        if change != ConfigChange::Unchanged || self.reload_requested {
            self.reload_requested = false;

            let settings = if self.config_watcher.exists() {
                self.store.reload(fs.as_ref())
            } else {
                info!("Файл конфигурации {:?} удалён, настройки сброшены", self.store.path());
                self.store.clear()
            };

            self.targets = TargetWatcher::new(&settings.target_paths);
            self.targets.is_stale(fs.as_ref());
            self.rebuild(&settings);

            return TickOutcome {
                config_reloaded: true,
                rebuilt: true,
            };
        }

        if self.targets.is_stale(fs.as_ref()) {
            let settings = self.store.snapshot();
            self.rebuild(&settings);
            return TickOutcome {
                config_reloaded: false,
                rebuilt: true,
            };
        }

        TickOutcome::default()
    }

    fn rebuild(&mut self, settings: &Settings) {
        let keywords = settings.keyword_refs();
        let aggregator = MatchAggregator::new(self.fs.as_ref(), self.store.limits().match_capacity);
        self.matches = aggregator.rebuild(&settings.target_paths, &keywords);
        self.needs_render = true;
    }

    /// Кадр, если с прошлой отрисовки что-то изменилось
    pub fn take_frame(&mut self) -> Option<DisplayFrame> {
        if !self.needs_render {
            return None;
        }
        self.needs_render = false;

        let frame = self.frame();
        self.restore_geometry = false;
        Some(frame)
    }

    pub fn frame(&self) -> DisplayFrame {
        let settings = self.store.snapshot();
        DisplayFrame {
            lines: compose_lines(&self.matches, &self.navigation, &settings),
            geometry: settings.geometry,
            appearance: self.appearance,
            restore_geometry: self.restore_geometry,
        }
    }
}

/// Строки для отображения с учётом сдвига и флагов отображения
pub fn compose_lines(
    matches: &MatchCollection,
    navigation: &NavigationState,
    settings: &Settings,
) -> Vec<DisplayLine> {
    let count = matches.len();
    if count == 0 {
        return vec![DisplayLine::new(EMPTY_PLACEHOLDER, false)];
    }

    let keywords = &settings.keywords[..];
    let entry = |position: usize| {
        navigation
            .index_for(position, count)
            .and_then(|index| matches.get(index))
            .map(|record| record.line.as_str())
    };

    if settings.first_entry_only {
        return entry(0)
            .map(|line| {
                DisplayLine::new(format!("{}{}", CURRENT_TASK_PREFIX, trim_all(line, keywords)), true)
            })
            .into_iter()
            .collect();
    }

    (0..count)
        .filter_map(|position| entry(position).map(|line| (position, line)))
        .map(|(position, line)| {
            let text = if settings.trim_out_keywords {
                trim_all(line, keywords)
            } else {
                line
            };

            if position == 0 {
                DisplayLine::new(format!("{}{}", CURRENT_TASK_PREFIX, text), true)
            } else {
                DisplayLine::new(text, false)
            }
        })
        .collect()
}

/// Цикл опроса: события драйвера, тик, отрисовка, пауза.
///
/// Завершается по `Quit` от драйвера или когда готов `shutdown`.
pub async fn run_overlay<S>(
    engine: &mut OverlayEngine,
    driver: &mut (dyn DriverTrait + Send),
    poll_interval: Duration,
    shutdown: S,
) -> Result<()>
where
    S: Future<Output = ()>,
{
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    info!("Цикл опроса запущен, интервал {:?}", poll_interval);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => {
                info!("Получен сигнал завершения");
                break;
            }
        }

        for event in driver.drain_events().await? {
            engine.handle_event(event);
        }

        if !engine.is_running() {
            break;
        }

        let outcome = engine.tick();
        if outcome.rebuilt {
            debug!(
                "Тик: {:?}, совпадений {} (отброшено {}), сдвиг {}",
                outcome,
                engine.matches().len(),
                engine.matches().dropped(),
                engine.navigation().offset()
            );
        }

        if let Some(frame) = engine.take_frame() {
            driver.render(&frame).await?;
        }
    }

    info!("Цикл опроса остановлен");
    Ok(())
}
