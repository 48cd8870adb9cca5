use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use super::constants::{crate_root, LOGS_FOLDER_PATH};

fn init_logger(logs_folder_path: &Path) -> eyre::Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix("patcher")
        .filename_suffix("log")
        .build(logs_folder_path)?;

    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_filter = LevelFilter::INFO;
    let file_filter = LevelFilter::INFO;

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .with_ansi(true)
        .with_filter(stdout_filter);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

pub fn init_default_logger() -> eyre::Result<WorkerGuard> {
    init_logger(&crate_root().join(LOGS_FOLDER_PATH))
}
