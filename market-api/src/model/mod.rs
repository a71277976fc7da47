//! Data models shared by the generators and the front end.
//!
//! # Submodules
//! - [`instrument`]: Catalog entries and their asset types.
//! - [`market_cap`]: Market capitalization as a value plus unit.
//! - [`series`]: Historical and predicted price points.
//! - [`catalog`]: The immutable, queryable collection of instruments.
//! - [`query`]: Search, filter, sort and pagination types.
//! - [`overview`]: Headline counts over the catalog.

pub mod catalog;
pub mod instrument;
pub mod market_cap;
pub mod overview;
pub mod query;
pub mod series;

pub use catalog::Catalog;
pub use instrument::{AssetType, Instrument, InstrumentId, Sparkline, Trend};
pub use market_cap::{CapUnit, MarketCap};
pub use overview::MarketOverview;
pub use query::{CatalogQuery, Filter, Page, SortField, SortOrder};
pub use series::{ChartPoint, HistoricalPoint, PredictionPoint};
