use std::convert::Infallible;
use thiserror::Error;

/// Rejected user input for one of the catalog's typed controls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown asset type '{0}' (expected stock, gold or mutual_fund)")]
    AssetType(String),

    #[error(
        "Unknown sort field '{0}' (expected symbol, name, sector, price, change, changePercent, volume or marketCap)"
    )]
    SortField(String),

    #[error("Unknown sort order '{0}' (expected asc or desc)")]
    SortOrder(String),
}

impl From<Infallible> for ParseError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Errors returned by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No instrument carries this symbol.
    #[error("Symbol '{0}' not found")]
    NotFound(String),
}
