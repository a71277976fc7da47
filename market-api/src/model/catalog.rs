//! Immutable in-memory catalog of instruments.
//!
//! The catalog is built once and never mutated afterwards. It is backed by
//! `Arc`s, so cloning the handle is cheap and clones can be shared across
//! threads without locking.

use crate::error::CatalogError;
use crate::model::instrument::Instrument;
use crate::model::overview::MarketOverview;
use crate::model::query::{CatalogQuery, Page};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A read-only handle to the generated instruments.
#[derive(Debug, Clone)]
pub struct Catalog {
    instruments: Arc<[Instrument]>,
    /// Symbol -> position of its first occurrence.
    by_symbol: Arc<HashMap<String, usize>>,
}

impl Catalog {
    /// Freezes a list of instruments into a catalog, keeping their order.
    ///
    /// Symbols are not required to be unique; lookups resolve to the first
    /// instrument carrying the symbol.
    pub fn new(instruments: Vec<Instrument>) -> Self {
        let mut by_symbol = HashMap::with_capacity(instruments.len());
        for (index, instrument) in instruments.iter().enumerate() {
            by_symbol
                .entry(instrument.get_symbol().to_string())
                .or_insert(index);
        }

        Self {
            instruments: instruments.into(),
            by_symbol: Arc::new(by_symbol),
        }
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    /// Retrieves the first instrument with this exact symbol.
    pub fn find(&self, symbol: &str) -> Option<&Instrument> {
        self.by_symbol
            .get(symbol)
            .map(|&index| &self.instruments[index])
    }

    /// Like `find`, but reports an unknown symbol as `CatalogError::NotFound`.
    pub fn require(&self, symbol: &str) -> Result<&Instrument, CatalogError> {
        self.find(symbol)
            .ok_or_else(|| CatalogError::NotFound(symbol.to_string()))
    }

    /// Distinct sectors in order of first appearance.
    pub fn sectors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.instruments
            .iter()
            .map(Instrument::get_sector)
            .filter(|sector| seen.insert(*sector))
            .collect()
    }

    pub fn overview(&self) -> MarketOverview {
        MarketOverview::from_instruments(self.instruments.iter())
    }

    /// Filters and sorts the catalog.
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Instrument> {
        let mut matches: Vec<(usize, &Instrument)> = self
            .instruments
            .iter()
            .enumerate()
            .filter(|(_, instrument)| query.matches(instrument))
            .collect();

        matches.sort_by(|a, b| query.compare(*a, *b));
        matches.into_iter().map(|(_, instrument)| instrument).collect()
    }

    /// Runs `query` and returns page `page` (1-based) of the result.
    pub fn paginate(&self, query: &CatalogQuery, page: usize, page_size: usize) -> Page<'_> {
        let matches = self.query(query);
        Page::slice(&matches, page, page_size)
    }
}

impl FromIterator<Instrument> for Catalog {
    fn from_iter<I: IntoIterator<Item = Instrument>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
