use config::Config;
use modules::patch::patch_sdk;
use utils::logger::init_default_logger;

mod config;
mod errors;
mod modules;
mod utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let _guard = init_default_logger()?;

    let config = Config::read_default().await?;
    let report = patch_sdk(&config).await?;

    report.log_summary(&config.local);

    Ok(())
}
