use anyhow::Result;
use tracing::info;

use crate::config::{ALL_CATEGORIES, CrawlConfig, DEALS_TAB_STORE};
use crate::export::CsvSink;
use crate::scraper::Scraper;

/// Drives the full crawl: every store x category listing, then the
/// standalone deal tabs.
pub struct DealCrawler {
    scraper: Scraper,
    config: CrawlConfig,
}

impl DealCrawler {
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let scraper = Scraper::new(&config.base_url, &config.selectors)?;

        Ok(Self { scraper, config })
    }

    pub async fn run(&self) -> Result<()> {
        let mut sink = CsvSink::create(&self.config.output_path)?;

        for store in &self.config.stores {
            for category in &self.config.categories {
                self.crawl_listing(store, category, &mut sink).await?;
            }
        }

        // Deal tabs are single pages, not paginated listings
        for deal_tab in &self.config.deal_tabs {
            info!("Scraping {}...", deal_tab);
            let url = self.deal_tab_url(deal_tab);
            if let Some(deals) = self.scraper.scrape_page(&url, DEALS_TAB_STORE, deal_tab).await {
                sink.append(&deals)?;
            }
        }

        Ok(())
    }

    /// Walk a store/category listing page by page until a page fails to
    /// load or yields no products.
    async fn crawl_listing(&self, store: &str, category: &str, sink: &mut CsvSink) -> Result<()> {
        let mut page = 1u32;

        loop {
            let url = self.listing_url(store, category, page);
            info!("Scraping {} for {} in {}...", url, store, category);

            match self.scraper.scrape_page(&url, store, category).await {
                Some(deals) => sink.append(&deals)?,
                None => break,
            }

            page += 1;
        }

        Ok(())
    }

    fn listing_url(&self, store: &str, category: &str, page: u32) -> String {
        let base = &self.config.base_url;
        let store = store.to_lowercase();

        if category == ALL_CATEGORIES {
            format!("{base}/store/{store}?page={page}")
        } else {
            let category = slug(category);
            format!("{base}/category/{category}?store={store}&page={page}")
        }
    }

    fn deal_tab_url(&self, deal_tab: &str) -> String {
        format!("{}/{}", self.config.base_url, slug(deal_tab))
    }
}

/// Lower-cased, hyphen-separated path segment
/// ("Hot Deals Online" -> "hot-deals-online").
fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
