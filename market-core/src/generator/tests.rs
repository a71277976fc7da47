use super::*;
use market::model::instrument::{AssetType, SPARKLINE_POINTS};
use market::model::market_cap::{CapUnit, MarketCap};
use rand::rngs::StdRng;

fn generator(seed: u64) -> CatalogGenerator<StdRng> {
    CatalogGenerator::new(rng_from_seed(Some(seed)))
}

#[test]
fn test_round2() {
    assert_eq!(round2(1.234), 1.23);
    assert_eq!(round2(1.235_1), 1.24);
    assert_eq!(round2(-4.999), -5.0);
}

#[test]
fn test_stock_at_base_100_stays_within_five_percent() {
    let mut gen = generator(1);
    for _ in 0..500 {
        let inst = gen.generate_instrument("TEST", "Test Inc.", "Technology", 100.0, AssetType::Stock);
        assert!((95.0..=105.0).contains(&inst.get_price()), "price {}", inst.get_price());
        assert!((-5.0..=5.0).contains(&inst.get_change()));
        assert!((-5.0..=5.0).contains(&inst.get_change_percent()));
        assert!((1_000_000..51_000_000).contains(&inst.get_volume()));
        assert_eq!(inst.get_sparkline().len(), SPARKLINE_POINTS);
    }
}

#[test]
fn test_price_and_change_differ_by_at_most_a_cent() {
    let mut gen = generator(2);
    for _ in 0..500 {
        let inst = gen.generate_instrument("X", "X", "Energy", 123.456, AssetType::Stock);
        let implied = inst.get_price() - 123.456;
        assert!((implied - inst.get_change()).abs() <= 0.0101);
    }
}

#[test]
fn test_market_cap_by_asset_type() {
    let mut gen = generator(3);

    let gold = gen.generate_instrument("G", "G", "Gold", 5000.0, AssetType::Gold);
    assert_eq!(gold.get_market_cap(), &MarketCap::NotApplicable);
    assert_eq!(gold.get_market_cap().to_string(), "N/A");

    let fund = gen.generate_instrument("F", "F", "Debt", 20.0, AssetType::MutualFund);
    let text = fund.get_market_cap().to_string();
    let amount = text.strip_suffix(" Cr").expect("fund cap ends in Cr");
    let amount: u64 = amount.parse().expect("integer crore amount");
    assert!((1_000..=51_000).contains(&amount));
    assert!((100_000..1_100_000).contains(&fund.get_volume()));

    for base in [1.0, 50.0, 900.0, 2500.0] {
        let stock = gen.generate_instrument("S", "S", "Energy", base, AssetType::Stock);
        match stock.get_market_cap() {
            MarketCap::Bucketed { value, unit } => {
                let magnitude = value * unit.divisor();
                assert_eq!(CapUnit::for_magnitude(magnitude), *unit);
                assert!(stock.get_market_cap().to_string().ends_with(unit.suffix()));
            }
            other => panic!("unexpected stock market cap {other:?}"),
        }
    }
}

#[test]
fn test_sparkline_moves_at_most_two_and_a_half_percent_per_step() {
    let mut gen = generator(4);
    let inst = gen.generate_instrument("S", "S", "Energy", 200.0, AssetType::Stock);
    let mut previous = 200.0;
    for &point in inst.get_sparkline() {
        assert!((point / previous - 1.0).abs() <= 0.026, "{previous} -> {point}");
        previous = point;
    }
}

#[test]
fn test_build_order_and_batch_naming() {
    let config = GeneratorConfig::default().with_random_counts(12, 9, 5);
    let catalog = generator(5).build(&config);

    let named: usize = universe::NAMED_GROUPS.iter().map(|g| g.symbols.len()).sum();
    assert_eq!(named, 236);
    assert_eq!(catalog.len(), named + 12 + 9 + 5);

    let instruments = catalog.instruments();
    assert_eq!(instruments[0].get_symbol(), "AAPL");
    assert_eq!(instruments[0].get_name(), "AAPL Inc.");

    let stocks = &instruments[named..named + 12];
    for stock in stocks {
        let symbol = stock.get_symbol();
        assert!((3..=5).contains(&symbol.len()));
        assert!(symbol.chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(stock.get_name(), format!("{symbol} Corporation"));
    }

    let funds = &instruments[named + 12..named + 21];
    assert_eq!(funds[0].get_symbol(), "FUND000");
    assert_eq!(funds[8].get_symbol(), "FUND008");
    assert_eq!(funds[3].get_name(), "FUND003 Debt Fund");
    assert_eq!(funds[3].get_sector(), "Debt");

    let gold = &instruments[named + 21..];
    assert_eq!(gold[0].get_symbol(), "GOLD00");
    assert_eq!(gold[0].get_name(), "GOLD00 Digital Gold");
    assert!(gold
        .iter()
        .all(|g| (4000.0 * 0.95..=6000.0 * 1.05).contains(&g.get_price())));
}

#[test]
fn test_indian_names_strip_non_letters() {
    let catalog = generator(6).build(&GeneratorConfig::default().with_random_counts(0, 0, 0));
    assert_eq!(catalog.require("BAJAJ-AUTO").unwrap().get_name(), "BAJAJAUTO Ltd.");
    assert_eq!(catalog.require("M&M").unwrap().get_name(), "MM Ltd.");
}

#[test]
fn test_initialize_is_deterministic_with_seed() {
    let config = GeneratorConfig::default()
        .with_seed(99)
        .with_random_counts(20, 8, 5);
    let a = initialize(&config).unwrap();
    let b = initialize(&config).unwrap();
    assert_eq!(a.instruments(), b.instruments());

    let c = initialize(&config.clone().with_seed(100)).unwrap();
    assert_ne!(a.instruments(), c.instruments());
}
