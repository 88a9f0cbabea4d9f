use anyhow::Context;
use clap::Parser;
use colorspace::cli::Cli;
use colorspace::{app, config, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = config::get_app_config()?;
    logger::setup_logger(app_config.logging(), cli.verbose)
        .context("Failed to initialize logger")?;

    if let Err(e) = app::run(cli, app_config).await {
        log::error!("{e}");
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
    Ok(())
}
