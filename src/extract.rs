use std::num::{ParseFloatError, ParseIntError};

use anyhow::{anyhow, bail, Result};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, warn};

use crate::record::Record;

const ITEM_SELECTOR: &str = "div.game";
const NAME_SELECTOR: &str = "h3.game-name";
const RATING_SELECTOR: &str = "span.game-rating";
const PRICE_SELECTOR: &str = "span.game-price";

const CURRENCY_SYMBOL: char = '€';

/// Why a single item block was dropped. Skips are logged, never propagated.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("missing {0} element")]
    MissingField(&'static str),
    #[error("bad rating {0:?}: {1}")]
    Rating(String, ParseFloatError),
    #[error("bad price {0:?}: {1}")]
    Price(String, ParseIntError),
}

/// Pulls (name, rating, price) records out of a parsed catalog document.
pub struct Extractor {
    items: Selector,
    name: Selector,
    rating: Selector,
    price: Selector,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            items: compile(ITEM_SELECTOR)?,
            name: compile(NAME_SELECTOR)?,
            rating: compile(RATING_SELECTOR)?,
            price: compile(PRICE_SELECTOR)?,
        })
    }

    /// Walk item blocks in document order, keeping every block whose three
    /// fields parse. Malformed blocks are dropped with a warning.
    pub fn extract(&self, doc: &Html) -> Vec<Record> {
        let mut records = Vec::new();
        for (index, item) in doc.select(&self.items).enumerate() {
            match self.parse_item(item) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping entry {}: {}", index, e),
            }
        }
        debug!("Extracted {} records", records.len());
        records
    }

    /// Extract, then enforce the completeness invariant: the catalog must
    /// yield exactly `expected` records or the whole extraction fails.
    pub fn extract_exact(&self, doc: &Html, expected: usize) -> Result<Vec<Record>> {
        let records = self.extract(doc);
        if records.len() != expected {
            bail!(
                "expected {} catalog entries but found {}",
                expected,
                records.len()
            );
        }
        Ok(records)
    }

    fn parse_item(&self, item: ElementRef) -> Result<Record, ItemError> {
        let name = self.field_text(item, &self.name, "name")?;
        let rating_text = self.field_text(item, &self.rating, "rating")?;
        let price_text = self.field_text(item, &self.price, "price")?;

        // "4.9/5" → everything before the first slash; the scale suffix is
        // ignored, not validated
        let rating_raw = rating_text
            .split_once('/')
            .map_or(rating_text.as_str(), |(left, _)| left);
        let rating: f64 = rating_raw
            .trim()
            .parse()
            .map_err(|e| ItemError::Rating(rating_text.clone(), e))?;

        // "€ 60" → strip every currency symbol, trim, parse as integer
        let price: i32 = price_text
            .replace(CURRENCY_SYMBOL, "")
            .trim()
            .parse()
            .map_err(|e| ItemError::Price(price_text.clone(), e))?;

        Ok(Record::new(name, rating, price))
    }

    fn field_text(
        &self,
        item: ElementRef,
        selector: &Selector,
        field: &'static str,
    ) -> Result<String, ItemError> {
        let el = item
            .select(selector)
            .next()
            .ok_or(ItemError::MissingField(field))?;
        Ok(text_of(el))
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("invalid selector {:?}: {}", selector, e))
}

/// Text content of an element with whitespace normalized, the way an HTML
/// renderer would collapse it.
fn text_of(el: ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Tests ──
