use anyhow::Result;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};
use url::Url;

use crate::config::{NOT_AVAILABLE, PLACEHOLDER_IMAGE, SiteSelectors};
use crate::models::Deal;

/// Fetches listing pages and extracts deal records from them.
pub struct Scraper {
    client: Client,
    base_url: Url,
    selectors: DealSelectors,
}

/// Selector table parsed once at construction.
struct DealSelectors {
    product_block: Selector,
    discount: Selector,
    link: Selector,
    image: Selector,
    details: Selector,
    title: Selector,
    price: Selector,
    special_price: Selector,
    rating: Selector,
}

impl DealSelectors {
    fn parse(selectors: &SiteSelectors) -> Result<Self> {
        Ok(Self {
            product_block: parse_selector(&selectors.product_block)?,
            discount: parse_selector(&selectors.discount)?,
            link: parse_selector(&selectors.link)?,
            image: parse_selector(&selectors.image)?,
            details: parse_selector(&selectors.details)?,
            title: parse_selector(&selectors.title)?,
            price: parse_selector(&selectors.price)?,
            special_price: parse_selector(&selectors.special_price)?,
            rating: parse_selector(&selectors.rating)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Failed to parse selector {:?}: {:?}", css, e))
}

impl Scraper {
    pub fn new(base_url: &str, selectors: &SiteSelectors) -> Result<Self> {
        let client = Client::new();
        let base_url = Url::parse(base_url)?;
        let selectors = DealSelectors::parse(selectors)?;

        Ok(Self {
            client,
            base_url,
            selectors,
        })
    }

    /// Fetch one listing page and extract its deals.
    ///
    /// `None` is the signal that a listing crawl should stop here: the
    /// request failed, the response was not a success, or no product block
    /// matched in the body.
    pub async fn scrape_page(&self, url: &str, store: &str, category: &str) -> Option<Vec<Deal>> {
        let body = self.fetch_page(url).await?;

        let deals = self.extract_deals(&body, store, category);
        if deals.is_none() {
            info!("No products found on {}.", url);
        }
        deals
    }

    async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to retrieve {}. Skipping... ({})", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("Failed to retrieve {}. Skipping...", url);
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to retrieve {}. Skipping... ({})", url, e);
                None
            }
        }
    }

    /// Page-local extraction, independent of any network access.
    ///
    /// Returns `None` when zero product blocks match, which terminates the
    /// pagination loop. Otherwise every matched block yields exactly one
    /// record, however many of its fields fell back to "N/A".
    pub fn extract_deals(&self, body: &str, store: &str, category: &str) -> Option<Vec<Deal>> {
        let document = Html::parse_document(body);

        let deals: Vec<Deal> = document
            .select(&self.selectors.product_block)
            .map(|block| self.extract_block(block, store, category))
            .collect();

        if deals.is_empty() { None } else { Some(deals) }
    }

    fn extract_block(&self, block: ElementRef<'_>, store: &str, category: &str) -> Deal {
        let discount = block
            .select(&self.selectors.discount)
            .next()
            .map_or_else(not_available, element_text);

        let link = block
            .select(&self.selectors.link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map_or_else(not_available, |href| self.absolute_url(href));

        // Lazy-loaded images carry the real URL in data-src
        let image = block
            .select(&self.selectors.image)
            .next()
            .and_then(|img| {
                img.value()
                    .attr("data-src")
                    .or_else(|| img.value().attr("src"))
            })
            .map_or_else(
                || PLACEHOLDER_IMAGE.to_string(),
                |src| self.absolute_url(src),
            );

        let details = block.select(&self.selectors.details).next();

        let title = details
            .and_then(|d| d.select(&self.selectors.title).next())
            .and_then(|h| h.value().attr("title"))
            .map_or_else(not_available, |t| t.trim().to_string());

        let price = details
            .and_then(|d| d.select(&self.selectors.price).next())
            .map_or_else(not_available, element_text);

        let special_price = details
            .and_then(|d| d.select(&self.selectors.special_price).next())
            .map_or_else(not_available, element_text);

        let rating = details
            .and_then(|d| d.select(&self.selectors.rating).next())
            .map_or_else(not_available, element_text);

        Deal {
            store: store.to_string(),
            category: category.to_string(),
            title,
            image,
            price,
            discount,
            special_price,
            link,
            rating,
        }
    }

    fn absolute_url(&self, href: &str) -> String {
        self.base_url
            .join(href)
            .map_or_else(|_| href.to_string(), |url| url.to_string())
    }
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
