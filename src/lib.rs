pub mod config;
pub mod crawler;
pub mod export;
pub mod models;
pub mod scraper;

pub use config::CrawlConfig;
pub use crawler::DealCrawler;
pub use models::Deal;
