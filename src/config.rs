use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Параметры процесса. Файл задач (`.currTasks.conf`) читается отдельно,
/// см. `settings::ConfigStore`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RuntimeOptions {
    pub logging: LoggingConfig,
    pub poll_interval_ms: u64,
    pub limits: Limits,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Верхние границы коллекций. Всё, что выше, отбрасывается с предупреждением.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Limits {
    pub max_config_lines: usize,
    pub max_target_paths: usize,
    pub max_keywords: usize,
    pub match_capacity: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_config_lines: 100,
            max_target_paths: 90,
            max_keywords: 10,
            match_capacity: 150,
        }
    }
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            poll_interval_ms: 256,
            limits: Limits::default(),
        }
    }
}

impl RuntimeOptions {
    /// Значения по умолчанию, затем TOML (если указан), затем `CURR_TASKS_*`.
    pub fn load(options_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(RuntimeOptions::default()));

        if let Some(path) = options_path {
            figment = figment.merge(Toml::file(path));
        }

        let options: RuntimeOptions = figment
            .merge(Env::prefixed("CURR_TASKS_").split("__"))
            .extract()
            .with_context(|| format!("Не удалось загрузить параметры из {:?}", options_path))?;

        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        if self.poll_interval_ms < 10 {
            anyhow::bail!("poll_interval_ms должно быть минимум 10");
        }

        let limits = [
            ("max_config_lines", self.limits.max_config_lines),
            ("max_target_paths", self.limits.max_target_paths),
            ("max_keywords", self.limits.max_keywords),
            ("match_capacity", self.limits.match_capacity),
        ];
        for (name, value) in limits {
            if value == 0 {
                anyhow::bail!("{} должно быть больше 0", name);
            }
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_options_validation() {
        let options = RuntimeOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.limits.match_capacity, 150);
        assert_eq!(options.poll_interval(), Duration::from_millis(256));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let mut options = RuntimeOptions::default();
        options.logging.level = "verbose".to_string();
        assert!(options.validate().is_err());

        let mut options = RuntimeOptions::default();
        options.limits.match_capacity = 0;
        assert!(options.validate().is_err());

        let mut options = RuntimeOptions::default();
        options.poll_interval_ms = 1;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_load_merges_toml_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "poll_interval_ms = 500").unwrap();
        writeln!(file, "[limits]").unwrap();
        writeln!(file, "match_capacity = 20").unwrap();

        let options = RuntimeOptions::load(Some(file.path())).unwrap();
        assert_eq!(options.poll_interval_ms, 500);
        assert_eq!(options.limits.match_capacity, 20);
        assert_eq!(options.limits.max_keywords, 10);
        assert_eq!(options.logging.level, "info");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let options = RuntimeOptions::load(None).unwrap();
        assert_eq!(options.limits, Limits::default());
    }
}
