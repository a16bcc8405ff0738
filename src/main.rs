use std::time::Instant;

use anyhow::Result;
use tracing::info;

use dealsheaven_scraper::{CrawlConfig, DealCrawler};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting dealsheaven.in deal crawl");

    let started = Instant::now();
    let crawler = DealCrawler::new(CrawlConfig::default())?;
    crawler.run().await?;

    info!(
        "Scraping completed in {:.2} seconds",
        started.elapsed().as_secs_f64()
    );

    Ok(())
}
