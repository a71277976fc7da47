//! Price series models.
//!
//! Includes `HistoricalPoint` for the trailing month of daily prices,
//! `PredictionPoint` for the forward week, and `ChartPoint` which merges both
//! into the single sequence a chart is drawn from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of points in a historical series (today and the 30 days before it).
pub const HISTORY_POINTS: usize = 31;

/// Number of points in a prediction series (the 7 days after today).
pub const PREDICTION_POINTS: usize = 7;

/// One day of synthetic trading history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Calendar day, serialized as `YYYY-MM-DD`.
    date: NaiveDate,
    /// Price for the day, rounded to 2 decimals.
    price: f64,
    volume: u64,
}

impl HistoricalPoint {
    /// Creates a new HistoricalPoint.
    ///
    /// # Arguments
    ///
    /// * `date` - The trading day.
    /// * `price` - Price for the day.
    /// * `volume` - Volume traded that day.
    pub fn new(date: NaiveDate, price: f64, volume: u64) -> Self {
        Self {
            date,
            price,
            volume,
        }
    }

    /// Returns the calendar day.
    pub fn get_date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the price, rounded to 2 decimals.
    pub fn get_price(&self) -> f64 {
        self.price
    }

    /// Returns the volume traded that day.
    pub fn get_volume(&self) -> u64 {
        self.volume
    }
}

/// One day of the forward "prediction".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    date: NaiveDate,
    price: f64,
    /// Confidence in `[0.7, 1.0)`.
    confidence: f64,
}

impl PredictionPoint {
    /// Creates a new PredictionPoint.
    ///
    /// # Arguments
    ///
    /// * `date` - The predicted day, after today.
    /// * `price` - Predicted price.
    /// * `confidence` - Confidence attached to the price.
    pub fn new(date: NaiveDate, price: f64, confidence: f64) -> Self {
        Self {
            date,
            price,
            confidence,
        }
    }

    /// Returns the calendar day.
    pub fn get_date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the price, rounded to 2 decimals.
    pub fn get_price(&self) -> f64 {
        self.price
    }

    /// Returns the confidence, in `[0.7, 1.0)`.
    pub fn get_confidence(&self) -> f64 {
        self.confidence
    }
}

/// A point on the combined history-plus-prediction chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartPoint {
    Historical(HistoricalPoint),
    Prediction(PredictionPoint),
}

impl ChartPoint {
    pub fn date(&self) -> NaiveDate {
        match self {
            ChartPoint::Historical(p) => p.get_date(),
            ChartPoint::Prediction(p) => p.get_date(),
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            ChartPoint::Historical(p) => p.get_price(),
            ChartPoint::Prediction(p) => p.get_price(),
        }
    }

    pub fn is_prediction(&self) -> bool {
        matches!(self, ChartPoint::Prediction(_))
    }
}

/// Concatenates history and predictions, history first.
pub fn combine(historical: &[HistoricalPoint], predictions: &[PredictionPoint]) -> Vec<ChartPoint> {
    historical
        .iter()
        .cloned()
        .map(ChartPoint::Historical)
        .chain(predictions.iter().cloned().map(ChartPoint::Prediction))
        .collect()
}
