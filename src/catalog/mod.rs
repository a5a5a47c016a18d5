//! Static catalog of scraped tweets. Parsed once from the bundled JSON asset.

pub mod models;

pub use models::*;

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use std::cmp::Ordering;

const CATALOG_JSON: &str = include_str!("../../assets/tweets.json");
const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

static CATALOG: Lazy<Vec<Item>> = Lazy::new(|| match parse_catalog(CATALOG_JSON) {
    Ok(items) => {
        tracing::info!(items = items.len(), "catalog loaded");
        items
    }
    Err(err) => {
        tracing::warn!("failed to parse bundled catalog: {err}");
        Vec::new()
    }
});

/// Playable catalog items, most recent first.
pub fn catalog() -> &'static [Item] {
    CATALOG.as_slice()
}

pub fn parse_catalog(json: &str) -> Result<Vec<Item>, serde_json::Error> {
    let mut items: Vec<Item> = serde_json::from_str(json)?;
    let before = items.len();
    items.retain(Item::is_playable);
    if items.len() != before {
        tracing::debug!(dropped = before - items.len(), "skipping items without media");
    }
    sort_most_recent_first(&mut items);
    Ok(items)
}

pub fn parse_created_at(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_str(raw, TWITTER_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}

fn sort_most_recent_first(items: &mut [Item]) {
    items.sort_by(|a, b| {
        match (parse_created_at(&a.created_at), parse_created_at(&b.created_at)) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
