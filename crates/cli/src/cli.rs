use clap::{Args, Parser, Subcommand, ValueEnum};

pub const DEFAULT_BASE_URL: &str = "https://this-week-in-neovim.org";
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

#[derive(Parser, Debug)]
#[command(name = "nvim-weekly")]
#[command(about = "Posts the latest This Week in Neovim article to Slack when mentioned")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	#[command(flatten)]
	pub settings: Settings,

	#[command(subcommand)]
	pub command: Commands,
}

/// Process configuration, read from flags or the environment.
#[derive(Args, Debug, Clone)]
pub struct Settings {
	/// Bot user OAuth token
	#[arg(long, global = true, env = "SLACK_BOT_TOKEN", default_value = "", hide_env_values = true)]
	pub bot_token: String,

	/// Signing secret used to verify Events API requests
	#[arg(long, global = true, env = "SLACK_SIGNING_SECRET", default_value = "", hide_env_values = true)]
	pub signing_secret: String,

	/// Port the events endpoint listens on
	#[arg(long, global = true, env = "PORT", default_value_t = 3000)]
	pub port: u16,

	/// Newsletter site hosting the `/latest` article
	#[arg(long, global = true, env = "WEEKLY_BASE_URL", default_value = DEFAULT_BASE_URL)]
	pub base_url: String,

	/// Slack Web API root
	#[arg(long, global = true, default_value = DEFAULT_SLACK_API_URL)]
	pub slack_api_url: String,

	/// Seconds to wait between page posts
	#[arg(long, global = true, default_value_t = 3)]
	pub page_delay_secs: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Serve the Slack Events API endpoint
	Serve,

	/// Fetch and render the latest article without posting it
	Preview {
		/// What to print
		#[arg(short, long, value_enum, default_value = "lines")]
		format: PreviewFormat,
	},

	/// Post the latest article to a channel once
	Send {
		/// Channel ID to post into
		#[arg(short, long)]
		channel: String,
	},
}

/// Output shape of the `preview` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
	/// Formatted mrkdwn lines, pages separated by a rule
	#[default]
	Lines,
	/// Per-page Block Kit payloads as JSON
	Blocks,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn send_requires_channel() {
		assert!(Cli::try_parse_from(["nvim-weekly", "send"]).is_err());
		let cli = Cli::try_parse_from(["nvim-weekly", "send", "--channel", "C1"]).unwrap();
		assert!(matches!(cli.command, Commands::Send { ref channel } if channel == "C1"));
	}

	#[test]
	fn preview_accepts_blocks_format() {
		let cli = Cli::try_parse_from(["nvim-weekly", "preview", "-f", "blocks"]).unwrap();
		assert!(matches!(cli.command, Commands::Preview { format: PreviewFormat::Blocks }));
	}

	#[test]
	fn flags_override_defaults() {
		let cli = Cli::try_parse_from(["nvim-weekly", "--port", "8080", "--page-delay-secs", "0", "serve"]).unwrap();
		assert_eq!(cli.settings.port, 8080);
		assert_eq!(cli.settings.page_delay_secs, 0);
	}
}
