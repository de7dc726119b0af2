use party_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv + logging)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    party_server::init_logger_with_file(
        Some(config.log_level.as_str()),
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!("Party server starting...");

    // 2. Initialize server state (ledgers + admission controller)
    let state = ServerState::initialize(&config);

    // 3. Run the HTTP server until ctrl-c
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
