use crate::model::instrument::{AssetType, Instrument};
use serde::{Deserialize, Serialize};

/// Headline counts shown above the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketOverview {
    pub total_stocks: usize,
    pub total_mutual_funds: usize,
    pub total_gold: usize,
    /// Instruments with a positive change.
    pub gainers: usize,
    /// Instruments with a negative change.
    pub losers: usize,
    pub unchanged: usize,
}

impl MarketOverview {
    pub fn from_instruments<'a>(instruments: impl IntoIterator<Item = &'a Instrument>) -> Self {
        instruments
            .into_iter()
            .fold(Self::default(), |mut overview, instrument| {
                match instrument.get_asset_type() {
                    AssetType::Stock => overview.total_stocks += 1,
                    AssetType::MutualFund => overview.total_mutual_funds += 1,
                    AssetType::Gold => overview.total_gold += 1,
                }
                let change = instrument.get_change();
                if change > 0.0 {
                    overview.gainers += 1;
                } else if change < 0.0 {
                    overview.losers += 1;
                } else {
                    overview.unchanged += 1;
                }
                overview
            })
    }

    pub fn total(&self) -> usize {
        self.total_stocks + self.total_mutual_funds + self.total_gold
    }
}
