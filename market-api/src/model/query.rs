//! Query types for browsing the catalog.
//!
//! A `CatalogQuery` combines a free-text search, a sector filter, an asset type
//! filter and a sort key. Sorting goes through `SortField`, which maps every
//! sortable column to a typed comparator.

use crate::error::ParseError;
use crate::model::instrument::{AssetType, Instrument};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Default number of instruments per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Wildcard used by the filter controls.
pub const ALL: &str = "All";

/// Either everything, or exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T> Filter<T> {
    pub fn matches<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected.borrow() == value,
        }
    }
}

impl<T> FromStr for Filter<T>
where
    T: FromStr,
    ParseError: From<T::Err>,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Filter::All);
        }
        Ok(Filter::Only(s.parse::<T>()?))
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str(ALL),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ParseError::SortOrder(s.to_string())),
        }
    }
}

/// The sortable columns of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Symbol,
    Name,
    Sector,
    Price,
    Change,
    ChangePercent,
    Volume,
    MarketCap,
}

impl SortField {
    /// Compares two instruments on this column, in ascending order.
    ///
    /// Text columns compare case-insensitively.
    pub fn compare(&self, a: &Instrument, b: &Instrument) -> Ordering {
        match self {
            SortField::Symbol => cmp_text(a.get_symbol(), b.get_symbol()),
            SortField::Name => cmp_text(a.get_name(), b.get_name()),
            SortField::Sector => cmp_text(a.get_sector(), b.get_sector()),
            SortField::Price => a.get_price().total_cmp(&b.get_price()),
            SortField::Change => a.get_change().total_cmp(&b.get_change()),
            SortField::ChangePercent => a.get_change_percent().total_cmp(&b.get_change_percent()),
            SortField::Volume => a.get_volume().cmp(&b.get_volume()),
            SortField::MarketCap => a.get_market_cap().cmp_magnitude(b.get_market_cap()),
        }
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl FromStr for SortField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "symbol" => Ok(SortField::Symbol),
            "name" => Ok(SortField::Name),
            "sector" => Ok(SortField::Sector),
            "price" => Ok(SortField::Price),
            "change" => Ok(SortField::Change),
            "changepercent" => Ok(SortField::ChangePercent),
            "volume" => Ok(SortField::Volume),
            "marketcap" => Ok(SortField::MarketCap),
            _ => Err(ParseError::SortField(s.to_string())),
        }
    }
}

/// Search, filter and sort settings for a catalog listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    search: String,
    sector: Filter<String>,
    asset_type: Filter<AssetType>,
    sort_field: SortField,
    sort_order: SortOrder,
}

impl CatalogQuery {
    /// Matches everything, sorted by symbol ascending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the results to instruments whose symbol or name contains
    /// `search`, ignoring case. An empty string matches everything.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restricts the results to one exact sector.
    pub fn with_sector(mut self, sector: Filter<String>) -> Self {
        self.sector = sector;
        self
    }

    /// Restricts the results to one asset type.
    pub fn with_asset_type(mut self, asset_type: Filter<AssetType>) -> Self {
        self.asset_type = asset_type;
        self
    }

    /// Sets the sort column and direction.
    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }

    /// Returns the free-text search, as given.
    pub fn get_search(&self) -> &str {
        &self.search
    }

    pub fn get_sector(&self) -> &Filter<String> {
        &self.sector
    }

    pub fn get_asset_type(&self) -> &Filter<AssetType> {
        &self.asset_type
    }

    pub fn get_sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn get_sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Whether an instrument passes the search and both filters.
    pub fn matches(&self, instrument: &Instrument) -> bool {
        self.matches_search(instrument)
            && self.sector.matches(instrument.get_sector())
            && self.asset_type.matches(&instrument.get_asset_type())
    }

    fn matches_search(&self, instrument: &Instrument) -> bool {
        let needle = self.search.to_lowercase();
        needle.is_empty()
            || instrument.get_symbol().to_lowercase().contains(&needle)
            || instrument.get_name().to_lowercase().contains(&needle)
    }

    /// Orders two catalog entries given their catalog positions.
    ///
    /// Ties on the sort column break on position, so a descending listing is
    /// always the exact reverse of the ascending one.
    pub fn compare(&self, a: (usize, &Instrument), b: (usize, &Instrument)) -> Ordering {
        let ordering = self
            .sort_field
            .compare(a.1, b.1)
            .then_with(|| a.0.cmp(&b.0));
        self.sort_order.apply(ordering)
    }
}

/// One page of a catalog listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    items: Vec<&'a Instrument>,
    /// 1-based page number.
    page: usize,
    page_size: usize,
    total_matches: usize,
    total_pages: usize,
}

impl<'a> Page<'a> {
    /// Cuts page `page` (1-based, clamped to at least 1) out of `matches`.
    pub fn slice(matches: &[&'a Instrument], page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_matches = matches.len();
        let total_pages = total_matches.div_ceil(page_size);
        let start = (page - 1).saturating_mul(page_size).min(total_matches);
        let end = start.saturating_add(page_size).min(total_matches);

        Self {
            items: matches[start..end].to_vec(),
            page,
            page_size,
            total_matches,
            total_pages,
        }
    }

    pub fn get_items(&self) -> &[&'a Instrument] {
        &self.items
    }

    pub fn get_page(&self) -> usize {
        self.page
    }

    pub fn get_page_size(&self) -> usize {
        self.page_size
    }

    pub fn get_total_matches(&self) -> usize {
        self.total_matches
    }

    pub fn get_total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
