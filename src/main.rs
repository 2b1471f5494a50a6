use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
mod config;
mod error;
mod events;
mod services;
mod settings;
mod utils;

use config::RuntimeOptions;
use services::{create_driver, run_overlay, OverlayEngine};
use settings::{create_prompt, Bootstrap, ConfigStore};
use utils::OsFileSystem;

#[derive(Parser, Debug)]
#[command(name = "curr-tasks")]
#[command(about = "Показывает текущую задачу из ваших заметок поверх рабочего стола")]
struct Args {
    /// Путь к файлу задач (по умолчанию $HOME/.currTasks.conf)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TOML с параметрами процесса
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Режим сухого запуска (кадры только в лог)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования
    #[arg(long)]
    log_level: Option<String>,

    /// Отвечать "да" на все вопросы при первом запуске
    #[arg(short, long)]
    yes: bool,

    /// Не создавать демонстрационные файлы
    #[arg(long)]
    no_bootstrap: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Параметры нужны раньше логов: уровень может прийти из них
    let options = RuntimeOptions::load(args.options.as_deref())?;
    let level = args.log_level.as_deref().unwrap_or(&options.logging.level);
    init_tracing(level)?;

    info!("Запуск curr-tasks v{}", env!("CARGO_PKG_VERSION"));

    if args.dry_run {
        warn!("Режим сухого запуска - окно не создаётся");
    }

    let config_path = utils::paths::resolve_config_path(args.config.as_deref())?;
    info!("Файл задач: {:?}", config_path);

    if args.no_bootstrap {
        info!("Первичная настройка отключена");
    } else {
        let home = utils::paths::home_dir()?;
        let prompt = create_prompt(args.yes);
        Bootstrap::new(home, prompt.as_ref()).ensure_config(&config_path)?;
    }

    let mut driver = create_driver(args.dry_run)?;
    let fs = Arc::new(OsFileSystem);
    let store = ConfigStore::open(&config_path, options.limits, driver.display_size(), fs.as_ref());
    let mut engine = OverlayEngine::new(fs, store);

    let settings = engine.settings();
    info!(
        "Отслеживается файлов: {}, ключевые слова: {:?}",
        settings.target_paths.len(),
        settings.keyword_refs()
    );

    info!("Все компоненты инициализированы");

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Получен сигнал завершения (Ctrl+C)"),
            Err(err) => {
                error!("Ошибка при ожидании сигнала завершения: {}", err);
                std::future::pending::<()>().await
            }
        }
    };

    run_overlay(&mut engine, driver.as_mut(), options.poll_interval(), shutdown).await?;

    info!("curr-tasks завершил работу");
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    Ok(())
}
