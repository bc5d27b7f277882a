mod preview;
mod send;
mod serve;

use crate::cli::{Cli, Commands};
use crate::config::BotConfig;
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
	let config = BotConfig::from_settings(&cli.settings)?;

	match cli.command {
		Commands::Serve => serve::run(&config).await?,
		Commands::Preview { format } => preview::run(&config, format).await?,
		Commands::Send { channel } => send::run(&config, &channel).await?,
	}

	Ok(())
}
