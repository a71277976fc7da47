//! Synthetic catalog generation.
//!
//! `CatalogGenerator` turns a symbol, name, sector, base price and asset type
//! into a fully populated `Instrument`, and assembles the whole catalog from
//! the named groups in [`universe`](super::universe) plus three bulk-random
//! batches sized by `GeneratorConfig`.

use super::round2;
use super::universe::{
    NamedGroup, PriceRange, SectorRule, NAMED_GROUPS, RANDOM_FUND_PRICE, RANDOM_FUND_TYPES,
    RANDOM_GOLD_PRICE, RANDOM_GOLD_TYPES, RANDOM_STOCK_PRICE, RANDOM_STOCK_SECTORS,
    RANDOM_SYMBOL_MAX_LEN, RANDOM_SYMBOL_MIN_LEN,
};
use crate::config::GeneratorConfig;
use log::{debug, info};
use market::model::instrument::{AssetType, Instrument, InstrumentId, Sparkline, SPARKLINE_POINTS};
use market::model::market_cap::MarketCap;
use market::Catalog;
use rand::Rng;

/// Half-width of the snapshot change, as a fraction of the base price.
const CHANGE_SPREAD: f64 = 0.1;
/// Per-step spread of the sparkline walk.
const SPARKLINE_SPREAD: f64 = 0.05;

/// Generates instruments from an injected random source.
#[derive(Debug)]
pub struct CatalogGenerator<R> {
    rng: R,
}

impl<R: Rng> CatalogGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates one instrument around `base_price`.
    ///
    /// The snapshot price lands within 5% of the base price. `price`, `change`
    /// and `change_percent` are each rounded to 2 decimals on their own, so
    /// `price - base_price` can differ from `change` by one cent.
    pub fn generate_instrument(
        &mut self,
        symbol: &str,
        name: &str,
        sector: &str,
        base_price: f64,
        asset_type: AssetType,
    ) -> Instrument {
        let change = (self.rng.gen::<f64>() - 0.5) * base_price * CHANGE_SPREAD;
        let change_percent = change / base_price * 100.0;

        let volume = match asset_type {
            AssetType::MutualFund => self.rng.gen_range(100_000..1_100_000),
            AssetType::Stock | AssetType::Gold => self.rng.gen_range(1_000_000..51_000_000),
        };

        let shares: u64 = self.rng.gen_range(100_000_000..1_100_000_000);
        let market_cap = match asset_type {
            AssetType::Gold => MarketCap::NotApplicable,
            AssetType::MutualFund => MarketCap::Crore(self.rng.gen::<f64>() * 50_000.0 + 1_000.0),
            AssetType::Stock => MarketCap::from_magnitude(base_price * shares as f64),
        };

        let sparkline = self.sparkline(base_price);
        let id = InstrumentId::from_random_bytes(self.rng.gen());

        Instrument::new(id, symbol, name, sector, asset_type)
            .with_quote(
                round2(base_price + change),
                round2(change),
                round2(change_percent),
                volume,
            )
            .with_market_cap(market_cap)
            .with_sparkline(sparkline)
    }

    /// Multiplicative random walk starting at the base price.
    fn sparkline(&mut self, base_price: f64) -> Sparkline {
        let mut points = [0.0; SPARKLINE_POINTS];
        let mut current = base_price;
        for point in points.iter_mut() {
            current *= 1.0 + (self.rng.gen::<f64>() - 0.5) * SPARKLINE_SPREAD;
            *point = round2(current);
        }
        points
    }

    /// Builds the full catalog: named groups first, then the random batches.
    pub fn build(&mut self, config: &GeneratorConfig) -> Catalog {
        let capacity = NAMED_GROUPS.iter().map(|g| g.symbols.len()).sum::<usize>()
            + config.random_stocks
            + config.random_funds
            + config.random_gold;
        let mut instruments = Vec::with_capacity(capacity);

        for group in NAMED_GROUPS {
            self.named_group(group, &mut instruments);
        }
        debug!("Generated {} named instruments", instruments.len());

        self.random_stocks(config.random_stocks, &mut instruments);
        self.random_funds(config.random_funds, &mut instruments);
        self.random_gold(config.random_gold, &mut instruments);

        let catalog = Catalog::new(instruments);
        let overview = catalog.overview();
        info!(
            "Catalog generated: {} instruments ({} stocks, {} mutual funds, {} gold)",
            catalog.len(),
            overview.total_stocks,
            overview.total_mutual_funds,
            overview.total_gold
        );
        catalog
    }

    fn named_group(&mut self, group: &NamedGroup, out: &mut Vec<Instrument>) {
        for (index, symbol) in group.symbols.iter().enumerate() {
            let name = group.name.apply(symbol);
            let sector = match group.sector {
                SectorRule::Fixed(sector) => sector,
                SectorRule::OneOf(pool) => self.pick_covering(pool, index),
            };
            let base_price = self.draw_price(group.base_price);
            out.push(self.generate_instrument(symbol, &name, sector, base_price, group.asset_type));
        }
    }

    fn random_stocks(&mut self, count: usize, out: &mut Vec<Instrument>) {
        for index in 0..count {
            let symbol = self.random_symbol();
            let sector = self.pick_covering(RANDOM_STOCK_SECTORS, index);
            let base_price = self.draw_price(RANDOM_STOCK_PRICE);
            let name = format!("{symbol} Corporation");
            out.push(self.generate_instrument(&symbol, &name, sector, base_price, AssetType::Stock));
        }
        debug!("Generated {} random stocks", count);
    }

    fn random_funds(&mut self, count: usize, out: &mut Vec<Instrument>) {
        for index in 0..count {
            let fund_type = self.pick_covering(RANDOM_FUND_TYPES, index);
            let symbol = format!("FUND{index:03}");
            let name = format!("{symbol} {fund_type} Fund");
            let base_price = self.draw_price(RANDOM_FUND_PRICE);
            out.push(self.generate_instrument(
                &symbol,
                &name,
                fund_type,
                base_price,
                AssetType::MutualFund,
            ));
        }
        debug!("Generated {} random mutual funds", count);
    }

    fn random_gold(&mut self, count: usize, out: &mut Vec<Instrument>) {
        for index in 0..count {
            let gold_type = self.pick_covering(RANDOM_GOLD_TYPES, index);
            let symbol = format!("GOLD{index:02}");
            let name = format!("{symbol} {gold_type}");
            let base_price = self.draw_price(RANDOM_GOLD_PRICE);
            out.push(self.generate_instrument(&symbol, &name, gold_type, base_price, AssetType::Gold));
        }
        debug!("Generated {} random gold products", count);
    }

    fn draw_price(&mut self, range: PriceRange) -> f64 {
        range.floor + self.rng.gen::<f64>() * range.span
    }

    /// The `index`-th pick from `pool`: in order for the first pass, uniform after.
    fn pick_covering(&mut self, pool: &[&'static str], index: usize) -> &'static str {
        if index < pool.len() {
            pool[index]
        } else {
            pool[self.rng.gen_range(0..pool.len())]
        }
    }

    fn random_symbol(&mut self) -> String {
        let len = self
            .rng
            .gen_range(RANDOM_SYMBOL_MIN_LEN..=RANDOM_SYMBOL_MAX_LEN);
        (0..len)
            .map(|_| char::from(b'A' + self.rng.gen_range(0..26u8)))
            .collect()
    }
}
