//! Defines the `InstrumentSource` trait for symbol lookups.
//!
//! Series generation only needs to resolve a symbol to its current price. This
//! trait keeps that dependency narrow, so the generators work against the full
//! `Catalog` as well as against a plain slice of instruments in tests.

use crate::model::catalog::Catalog;
use crate::model::instrument::Instrument;

/// A read-only collection that can resolve symbols to instruments.
///
/// # Examples
///
/// ```
/// use market::traits::instrument_source::InstrumentSource;
/// use market::model::instrument::{AssetType, Instrument, InstrumentId};
///
/// let instruments = vec![
///     Instrument::new(InstrumentId::from_random_bytes([0; 16]), "AAPL", "AAPL Inc.", "Technology", AssetType::Stock)
///         .with_quote(150.0, 0.0, 0.0, 1_000_000),
/// ];
///
/// assert_eq!(instruments.as_slice().base_price("AAPL"), Some(150.0));
/// assert_eq!(instruments.as_slice().base_price("MSFT"), None);
/// ```
pub trait InstrumentSource {
    /// Returns the first instrument with this exact symbol.
    fn find_instrument(&self, symbol: &str) -> Option<&Instrument>;

    /// Current price of the symbol, if it is known.
    fn base_price(&self, symbol: &str) -> Option<f64> {
        self.find_instrument(symbol).map(Instrument::get_price)
    }
}

impl InstrumentSource for Catalog {
    fn find_instrument(&self, symbol: &str) -> Option<&Instrument> {
        self.find(symbol)
    }
}

impl InstrumentSource for [Instrument] {
    fn find_instrument(&self, symbol: &str) -> Option<&Instrument> {
        self.iter().find(|instrument| instrument.get_symbol() == symbol)
    }
}
