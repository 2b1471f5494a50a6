//! Создание демонстрационных файлов при первом запуске.
//!
//! Работает только при старте: горячая перезагрузка никогда не создаёт файлы.

use crate::error::{OverlayError, Result};
use crate::overlay_error;
use crate::utils::paths::{demo_target_path, CONFIG_FILE_NAME};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEMO_KEYWORD: &str = "TODO";

/// Подтверждение действия пользователем
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Спрашивает в терминале, ответ по умолчанию - да
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        let mut stdout = std::io::stdout();
        if write!(stdout, "{} [Y/n] ", message).and_then(|_| stdout.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes"),
        }
    }
}

/// Всегда соглашается (`--yes`)
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&self, message: &str) -> bool {
        info!("{} -> да (--yes)", message);
        true
    }
}

pub fn create_prompt(assume_yes: bool) -> Box<dyn Prompt> {
    if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalPrompt)
    }
}

pub struct Bootstrap<'a> {
    home: PathBuf,
    prompt: &'a dyn Prompt,
}

impl<'a> Bootstrap<'a> {
    pub fn new(home: impl Into<PathBuf>, prompt: &'a dyn Prompt) -> Self {
        Self {
            home: home.into(),
            prompt,
        }
    }

    /// Создаёт демо-конфигурацию, если файла нет. `Ok(true)` - файл создан.
    pub fn ensure_config(&self, config_path: &Path) -> Result<bool> {
        if config_path.exists() {
            return Ok(false);
        }

        info!("Файл конфигурации {:?} не найден", config_path);
        let message = format!("Create a \"{}\" config file in $HOME?", CONFIG_FILE_NAME);
        if !self.prompt.confirm(&message) {
            return Err(overlay_error!(declined, "нет файла конфигурации {:?}", config_path));
        }

        let target = demo_target_path(&self.home);
        let content = format!(
            "file = \"{}\"\nkeyword = \"{}\"\n",
            target.display(),
            DEMO_KEYWORD
        );
        fs::write(config_path, content).map_err(|e| OverlayError::bootstrap(config_path, e))?;
        info!("Создан демонстрационный файл конфигурации {:?}", config_path);

        self.ensure_demo_target(&target)?;
        Ok(true)
    }

    pub fn ensure_demo_target(&self, target: &Path) -> Result<()> {
        if target.exists() {
            return Ok(());
        }

        let message = format!("Create a demo \"{}\" file in $HOME?", target.display());
        if !self.prompt.confirm(&message) {
            warn!("Демонстрационный файл {:?} не создан", target);
            return Err(overlay_error!(declined, "в конфигурации не задан целевой файл"));
        }

        let content = format!(
            "* {} Checkout the demo file located at {}\n",
            DEMO_KEYWORD,
            target.display()
        );
        fs::write(target, content).map_err(|e| OverlayError::bootstrap(target, e))?;
        info!("Создан демонстрационный файл {:?}", target);
        Ok(())
    }
}
