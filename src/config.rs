//! Fixed crawl targets and HTML markers for dealsheaven.in

use std::path::PathBuf;

pub const BASE_URL: &str = "https://dealsheaven.in";

pub const STORES: [&str; 7] = [
    "Flipkart",
    "Amazon",
    "Paytm",
    "Foodpanda",
    "Freecharge",
    "paytmmall",
    "All Stores",
];

pub const CATEGORIES: [&str; 5] = [
    "All Categories",
    "Beauty And Personal Care",
    "Electronics",
    "Grocery",
    "Recharge",
];

pub const DEAL_TABS: [&str; 2] = ["Hot Deals Online", "Popular Deals"];

/// Category value that selects the store-only listing URL shape.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Store label for records scraped from the standalone deal tabs.
pub const DEALS_TAB_STORE: &str = "Deals Tab";

pub const OUTPUT_FILE: &str = "scraped_deals.csv";

/// Sentinel written for any text field whose marker is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fallback when a product block has no usable image element.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Crawl parameters. Defaults mirror the fixed production constants;
/// tests swap in a mock origin and a temp output path.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub base_url: String,
    pub stores: Vec<String>,
    pub categories: Vec<String>,
    pub deal_tabs: Vec<String>,
    pub output_path: PathBuf,
    pub selectors: SiteSelectors,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            stores: STORES.iter().map(ToString::to_string).collect(),
            categories: CATEGORIES.iter().map(ToString::to_string).collect(),
            deal_tabs: DEAL_TABS.iter().map(ToString::to_string).collect(),
            output_path: PathBuf::from(OUTPUT_FILE),
            selectors: SiteSelectors::default(),
        }
    }
}

/// CSS markers for the parts of a listing page. Layout drift on the site
/// is absorbed here without touching extraction logic.
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    /// Container for one product listing.
    pub product_block: String,
    /// Discount badge within a product block.
    pub discount: String,
    /// Product link within a product block.
    pub link: String,
    /// Product image within a product block.
    pub image: String,
    /// Nested block holding title, prices and rating.
    pub details: String,
    pub title: String,
    pub price: String,
    pub special_price: String,
    pub rating: String,
}

impl Default for SiteSelectors {
    fn default() -> Self {
        // "deatls-inner" and "spacail-price" are the site's actual class names.
        Self {
            product_block: "div.product-item-detail".to_string(),
            discount: "div.discount".to_string(),
            link: "a[href]".to_string(),
            image: "img[src]".to_string(),
            details: "div.deatls-inner".to_string(),
            title: "h3[title]".to_string(),
            price: "p.price".to_string(),
            special_price: "p.spacail-price".to_string(),
            rating: "div.star-point".to_string(),
        }
    }
}
