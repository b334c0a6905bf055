use delivery_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env is optional) and logging
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("Delivery tracker starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state (pool, migrations, JWT)
    let state = ServerState::initialize(&config).await?;

    // 4. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
