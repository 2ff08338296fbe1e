use anyhow::Result;

use cakestore_server::core::{Server, setup_environment};
use cakestore_server::utils::logger::init_logger_with_file;

#[tokio::main]
async fn main() -> Result<()> {
    let config = setup_environment();

    let log_dir = config.log_dir();
    init_logger_with_file(Some(&config.log_level), log_dir.to_str());

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Starting cake store server"
    );

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}
