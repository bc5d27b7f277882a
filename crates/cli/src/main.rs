use clap::Parser;
use nvim_weekly_bot::{cli::Cli, commands, config, logging};
use tracing::{debug, error};

#[tokio::main]
async fn main() {
	let env_file = config::load_env_file();
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);
	if let Some(path) = env_file {
		debug!(target = "weekly", path = %path.display(), "loaded env file");
	}

	if let Err(err) = commands::dispatch(cli).await {
		error!(target = "weekly", error = %err, "command failed");
		std::process::exit(1);
	}
}
