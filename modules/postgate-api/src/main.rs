use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use board_client::BoardClient;
use postgate_common::Config;
use postgate_api::{build_schema, Gateway};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("postgate_api=info".parse()?)
                .add_directive("board_client=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    let client = Arc::new(BoardClient::new(&config.board_base_url));
    let schema = build_schema(client);

    let addr = format!("{}:{}", config.api_host, config.api_port);
    let handle = Gateway::new(schema, addr).start().await?;
    info!(
        "GraphiQL IDE available at http://{}/graphql",
        handle.local_addr()
    );

    tokio::signal::ctrl_c().await?;
    handle.stop().await?;

    Ok(())
}
