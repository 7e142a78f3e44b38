// storefront/src/main.rs

use anyhow::Context;
use storefront::cli::{parse_command, Command, HELP};
use storefront::{ClientConfig, ClientError, ItemService, Shop};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr so they never interleave with the rendered shop.
  tracing_subscriber::fmt()
    .with_max_level(Level::WARN)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_writer(std::io::stderr)
    .init();

  let config = ClientConfig::from_env().context("Failed to load storefront configuration")?;
  let service = ItemService::new(config.api_base_url.clone()).context("Failed to build HTTP client")?;

  let mut shop = Shop::new(service);
  println!("{}", shop.render());
  shop.mount().await;
  println!("{}\n{}", shop.render(), HELP);

  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  while let Some(line) = lines.next_line().await.map_err(ClientError::from)? {
    match parse_command(&line) {
      Some(Command::Quit) => break,
      Some(Command::Help) | None => println!("{}", HELP),
      Some(Command::Shop(event)) => match shop.dispatch(event).await {
        Ok(()) => println!("{}", shop.render()),
        Err(e) => println!("{}", e),
      },
    }
  }

  Ok(())
}
