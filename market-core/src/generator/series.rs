//! On-demand price series for a single symbol.
//!
//! Nothing here is cached: every call draws fresh values, so two calls for the
//! same symbol return different series unless the generator was seeded and
//! replayed.

use super::{rng_from_seed, round2};
use chrono::{Duration, NaiveDate, Utc};
use log::{debug, warn};
use market::model::series::{
    combine, ChartPoint, HistoricalPoint, PredictionPoint, HISTORY_POINTS, PREDICTION_POINTS,
};
use market::{Catalog, CatalogError, Instrument, InstrumentSource};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

/// Base price used for symbols the catalog does not know.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

/// Daily noise around the base price, as a fraction of it.
const HISTORY_SPREAD: f64 = 0.1;
const PREDICTION_NOISE: f64 = 0.05;
const BULLISH_DRIFT: f64 = 1.02;
const BEARISH_DRIFT: f64 = 0.98;

/// The current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Everything the detail view of one symbol shows.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolDetail {
    instrument: Instrument,
    historical: Vec<HistoricalPoint>,
    predictions: Vec<PredictionPoint>,
}

impl SymbolDetail {
    pub fn get_instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn get_historical(&self) -> &[HistoricalPoint] {
        &self.historical
    }

    pub fn get_predictions(&self) -> &[PredictionPoint] {
        &self.predictions
    }

    /// History followed by predictions, as one chart sequence.
    pub fn chart(&self) -> Vec<ChartPoint> {
        combine(&self.historical, &self.predictions)
    }
}

/// Generates series against a catalog, drawing from an injected random source.
#[derive(Debug)]
pub struct SeriesGenerator<R> {
    catalog: Catalog,
    rng: R,
}

impl SeriesGenerator<StdRng> {
    pub fn seeded(catalog: Catalog, seed: u64) -> Self {
        Self::new(catalog, rng_from_seed(Some(seed)))
    }

    pub fn from_entropy(catalog: Catalog) -> Self {
        Self::new(catalog, rng_from_seed(None))
    }
}

impl<R: Rng> SeriesGenerator<R> {
    pub fn new(catalog: Catalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    pub fn get_catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn historical_series(&mut self, symbol: &str) -> Vec<HistoricalPoint> {
        self.historical_series_on(symbol, today())
    }

    /// One point per calendar day from `today - 30` to `today`, oldest first.
    ///
    /// Each price is drawn independently around the base price; the series is
    /// not a walk.
    pub fn historical_series_on(&mut self, symbol: &str, today: NaiveDate) -> Vec<HistoricalPoint> {
        let base = self.base_price_or_default(symbol);
        let first = today - Duration::days(HISTORY_POINTS as i64 - 1);

        (0..HISTORY_POINTS)
            .map(|offset| {
                let date = first + Duration::days(offset as i64);
                let price =
                    round2(base * (1.0 + (self.rng.gen::<f64>() - 0.5) * HISTORY_SPREAD));
                let volume = self.rng.gen_range(1_000_000..11_000_000);
                HistoricalPoint::new(date, price, volume)
            })
            .collect()
    }

    pub fn prediction_series(&mut self, symbol: &str) -> Vec<PredictionPoint> {
        self.prediction_series_on(symbol, today())
    }

    /// One point per day from `today + 1` to `today + 7`.
    ///
    /// Anchored on the last price of a freshly generated history, so it does
    /// not continue any series a caller already holds.
    pub fn prediction_series_on(&mut self, symbol: &str, today: NaiveDate) -> Vec<PredictionPoint> {
        let history = self.historical_series_on(symbol, today);
        let last_price = history
            .last()
            .map(HistoricalPoint::get_price)
            .unwrap_or(DEFAULT_BASE_PRICE);

        (1..=PREDICTION_POINTS)
            .map(|offset| {
                let date = today + Duration::days(offset as i64);
                let drift = if self.rng.gen::<f64>() > 0.5 {
                    BULLISH_DRIFT
                } else {
                    BEARISH_DRIFT
                };
                let noise = (self.rng.gen::<f64>() - 0.5) * PREDICTION_NOISE;
                let price = round2(last_price * drift * (1.0 + noise));
                let confidence = self.rng.gen::<f64>() * 0.3 + 0.7;
                PredictionPoint::new(date, price, confidence)
            })
            .collect()
    }

    pub fn symbol_detail(&mut self, symbol: &str) -> Result<SymbolDetail, CatalogError> {
        self.symbol_detail_on(symbol, today())
    }

    /// Looks up `symbol` and generates its history and predictions.
    pub fn symbol_detail_on(
        &mut self,
        symbol: &str,
        today: NaiveDate,
    ) -> Result<SymbolDetail, CatalogError> {
        let instrument = self.catalog.require(symbol)?.clone();
        let historical = self.historical_series_on(symbol, today);
        let predictions = self.prediction_series_on(symbol, today);
        debug!(
            "Built detail for {}: {} historical, {} predicted points",
            symbol,
            historical.len(),
            predictions.len()
        );

        Ok(SymbolDetail {
            instrument,
            historical,
            predictions,
        })
    }

    fn base_price_or_default(&self, symbol: &str) -> f64 {
        self.catalog.base_price(symbol).unwrap_or_else(|| {
            warn!(
                "Unknown symbol '{}', using base price {}",
                symbol, DEFAULT_BASE_PRICE
            );
            DEFAULT_BASE_PRICE
        })
    }
}
