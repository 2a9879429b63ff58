mod domain;
mod fetcher;
mod form;
mod messages;
mod clients;
mod form_actor;
mod app_system;
mod view;
mod prompt;

#[cfg(test)]
mod mock_framework;

use tokio::io::BufReader;
use tracing::{info, info_span, Instrument};
use crate::app_system::{config, setup_tracing, FormSystem};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = config::load().map_err(|e| e.to_string())?;
    info!(base_url = %config.base_url, "Starting user card");

    // Starts the form and issues the start-up fetch
    let system = FormSystem::start(&config).await.map_err(|e| e.to_string())?;

    let initial = system.form_client.settled().await.map_err(|e| e.to_string())?;
    println!("{}", view::render(&initial));

    let span = info_span!("prompt");
    let mut stdout = std::io::stdout();
    prompt::run(&system.form_client, BufReader::new(tokio::io::stdin()), &mut stdout)
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
