//! Data model for scraped deal listings

use serde::{Deserialize, Serialize};

/// A deal listing scraped from dealsheaven.in
///
/// Every field is a plain string. Fields whose marker was missing on the
/// page hold the "N/A" sentinel, except `image` which falls back to a
/// placeholder URL. Serialized names match the CSV header columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    #[serde(rename = "Store")]
    pub store: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Discount")]
    pub discount: String,
    #[serde(rename = "Special Price")]
    pub special_price: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Rating")]
    pub rating: String,
}
