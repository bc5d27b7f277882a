//! Dry-run rendering of the latest article.

use weekly::{ArticleSource, Page, build_message, latest_url, paginate, parse_article};

use crate::cli::PreviewFormat;
use crate::config::BotConfig;
use crate::error::Result;
use crate::fetch::HttpArticleSource;

const PAGE_RULE: &str = "----------------------------------------";

pub async fn run(config: &BotConfig, format: PreviewFormat) -> Result<()> {
	let source = HttpArticleSource::with_default_client()?;
	let html = source.fetch(&latest_url(&config.base_url)).await?;
	let pages = paginate(parse_article(&html)?);
	println!("{}", render(&pages, format)?);
	Ok(())
}

fn render(pages: &[Page], format: PreviewFormat) -> Result<String> {
	match format {
		PreviewFormat::Lines => Ok(pages
			.iter()
			.map(|page| page.lines().iter().map(|line| line.trim_end_matches('\n')).collect::<Vec<_>>().join("\n"))
			.collect::<Vec<_>>()
			.join(format!("\n{PAGE_RULE}\n").as_str())),
		PreviewFormat::Blocks => {
			let messages: Vec<_> = pages.iter().map(build_message).collect();
			Ok(serde_json::to_string_pretty(&messages)?)
		}
	}
}
