pub mod error;
pub mod model;
pub mod traits;

pub use error::{CatalogError, ParseError};
pub use model::catalog::Catalog;
pub use model::instrument::{AssetType, Instrument, InstrumentId};
pub use model::market_cap::MarketCap;
pub use model::overview::MarketOverview;
pub use model::query::{CatalogQuery, Filter, SortField, SortOrder};
pub use model::series::{ChartPoint, HistoricalPoint, PredictionPoint};
pub use traits::instrument_source::InstrumentSource;

pub mod prelude {
    pub use crate::model::catalog::Catalog;
    pub use crate::model::instrument::{AssetType, Instrument};
    pub use crate::model::query::{CatalogQuery, Filter, SortField, SortOrder};
    pub use crate::traits::instrument_source::InstrumentSource;
}
