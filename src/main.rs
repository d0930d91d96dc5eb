use crate::config::Config;
use crate::state::AppState;
use astra::Server;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read flags / environment
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let settings = match config.validate() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Generate the availability snapshot for this run
    let state = AppState::new(&settings);

    // 3️⃣ Start the server
    tracing::info!("starting server at http://{}", settings.addr);
    let server = Server::bind(settings.addr).max_workers(settings.workers);

    // 4️⃣ Serve requests, passing shared state into closure
    let result = server.serve(move |req, _info| router::respond(req, &state));

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down cleanly");
}
