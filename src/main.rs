mod application;
mod cfg;
mod domain;
mod infra;
mod utils;

use clap::Parser;

#[tokio::main]
async fn main() -> tokio::io::Result<()> {
    let config = cfg::Cli::parse().into_config();

    infra::log::tracing::init(config.debug);
    if config.debug {
        tracing::debug!("Debug mode enabled");
    }

    application::DirectoryMirror::new_default(config)?
        .run()
        .await
}
