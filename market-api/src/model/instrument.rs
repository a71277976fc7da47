//! Defines the data model for catalog instruments.
//!
//! An `Instrument` is one row of the mock market: a stock, a gold product or a
//! mutual fund, with its current snapshot (price, change, volume), its market
//! capitalization and a short sparkline of recent prices.

use crate::error::ParseError;
use crate::model::market_cap::MarketCap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of points in every instrument's sparkline.
pub const SPARKLINE_POINTS: usize = 8;

/// Short synthetic price walk shown next to an instrument.
pub type Sparkline = [f64; SPARKLINE_POINTS];

/// Opaque identifier of an instrument, stable for the lifetime of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstrumentId(Uuid);

impl InstrumentId {
    /// Builds an identifier from 16 random bytes.
    ///
    /// The bytes are expected to come from the generator's random source, so a
    /// seeded generator reproduces the same identifiers.
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// The three asset classes listed in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Stock,
    Gold,
    MutualFund,
}

impl AssetType {
    /// Every asset type, in the order the dashboard lists them.
    pub const ALL: [AssetType; 3] = [AssetType::Stock, AssetType::Gold, AssetType::MutualFund];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Gold => "gold",
            AssetType::MutualFund => "mutual_fund",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stock" | "stocks" => Ok(AssetType::Stock),
            "gold" => Ok(AssetType::Gold),
            "mutual_fund" | "mutual-fund" | "mf" => Ok(AssetType::MutualFund),
            _ => Err(ParseError::AssetType(s.to_string())),
        }
    }
}

/// Direction of an instrument's sparkline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

/// Represents a single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique identifier, drawn at creation time.
    id: InstrumentId,

    /// The ticker symbol (e.g., "AAPL", "GOLDBEES", "FUND042").
    symbol: String,

    /// Display name (e.g., "AAPL Inc.").
    name: String,

    /// Sector for stocks, category for funds, product type for gold.
    sector: String,

    #[serde(rename = "type")]
    asset_type: AssetType,

    /// Current price, rounded to 2 decimals.
    price: f64,

    /// Absolute change against the base price, rounded to 2 decimals.
    change: f64,

    /// Relative change in percent, rounded to 2 decimals.
    change_percent: f64,

    volume: u64,

    market_cap: MarketCap,

    sparkline: Sparkline,
}

impl Instrument {
    /// Creates a new Instrument with an empty snapshot.
    ///
    /// Use `with_quote`, `with_market_cap` and `with_sparkline` to fill in the
    /// generated values.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier drawn by the generator.
    /// * `symbol` - The ticker symbol (e.g., "AAPL").
    /// * `name` - Display name (e.g., "AAPL Inc.").
    /// * `sector` - Sector, fund category or gold product type.
    /// * `asset_type` - Stock, gold or mutual fund.
    ///
    /// # Returns
    ///
    /// An `Instrument` with zero price and volume, no market cap and a flat
    /// sparkline.
    pub fn new(
        id: InstrumentId,
        symbol: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
        asset_type: AssetType,
    ) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            name: name.into(),
            sector: sector.into(),
            asset_type,
            price: 0.0,
            change: 0.0,
            change_percent: 0.0,
            volume: 0,
            market_cap: MarketCap::NotApplicable,
            sparkline: [0.0; SPARKLINE_POINTS],
        }
    }

    /// Sets the snapshot values.
    ///
    /// # Arguments
    ///
    /// * `price` - Current price.
    /// * `change` - Absolute change against the base price.
    /// * `change_percent` - Relative change, in percent.
    /// * `volume` - Traded volume.
    pub fn with_quote(mut self, price: f64, change: f64, change_percent: f64, volume: u64) -> Self {
        self.price = price;
        self.change = change;
        self.change_percent = change_percent;
        self.volume = volume;
        self
    }

    /// Sets the market capitalization (`MarketCap::NotApplicable` for gold).
    pub fn with_market_cap(mut self, market_cap: MarketCap) -> Self {
        self.market_cap = market_cap;
        self
    }

    /// Sets the recent price walk, oldest point first.
    pub fn with_sparkline(mut self, sparkline: Sparkline) -> Self {
        self.sparkline = sparkline;
        self
    }

    /// Returns the instrument identifier.
    pub fn get_id(&self) -> InstrumentId {
        self.id
    }

    /// Returns the ticker symbol.
    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the display name.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns the sector, fund category or gold product type.
    pub fn get_sector(&self) -> &str {
        &self.sector
    }

    pub fn get_asset_type(&self) -> AssetType {
        self.asset_type
    }

    /// Returns the current price.
    pub fn get_price(&self) -> f64 {
        self.price
    }

    /// Returns the absolute change against the base price.
    pub fn get_change(&self) -> f64 {
        self.change
    }

    /// Returns the relative change, in percent.
    pub fn get_change_percent(&self) -> f64 {
        self.change_percent
    }

    /// Returns the traded volume.
    pub fn get_volume(&self) -> u64 {
        self.volume
    }

    /// Returns the market capitalization.
    pub fn get_market_cap(&self) -> &MarketCap {
        &self.market_cap
    }

    /// Returns the sparkline, oldest point first.
    pub fn get_sparkline(&self) -> &Sparkline {
        &self.sparkline
    }

    /// Whether the sparkline ends at or above where it started.
    pub fn trend(&self) -> Trend {
        if self.sparkline[SPARKLINE_POINTS - 1] >= self.sparkline[0] {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}
