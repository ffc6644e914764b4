use site_server::{AppState, Server, setup_environment};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // 1. .env, config, logging
    let config = setup_environment();

    tracing::info!(
        "Site server starting (env: {}, store configured: {})",
        config.environment,
        config.store.is_some()
    );

    // 2. Connect to the store
    let state = AppState::initialize(&config)?;

    // 3. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
