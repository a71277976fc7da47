use market::model::instrument::{AssetType, SPARKLINE_POINTS};
use market::model::market_cap::MarketCap;
use market::model::query::{CatalogQuery, Filter, SortField, SortOrder};
use market_core::generator::universe::{
    expected_sectors, RANDOM_FUND_TYPES, RANDOM_GOLD_TYPES, RANDOM_STOCK_SECTORS,
};
use market_core::testing::{init_test_logger, seeded_catalog, small_config};
use market_core::generator::rng_from_seed;
use market_core::{initialize, CatalogGenerator, ConfigError, GeneratorConfig};

#[test]
fn test_every_instrument_is_well_formed() {
    init_test_logger();
    let catalog = seeded_catalog();

    for inst in catalog.iter() {
        assert_eq!(inst.get_sparkline().len(), SPARKLINE_POINTS);
        assert!(inst.get_price() > 0.0);
        let cap = inst.get_market_cap().to_string();
        match inst.get_asset_type() {
            AssetType::Gold => assert_eq!(cap, "N/A"),
            AssetType::MutualFund => {
                let amount = cap.strip_suffix(" Cr").unwrap();
                assert!(amount.chars().all(|c| c.is_ascii_digit()), "{cap}");
            }
            AssetType::Stock => {
                assert!(matches!(inst.get_market_cap(), MarketCap::Bucketed { .. }));
                assert!(["T", "B", "L Cr", "M"].iter().any(|s| cap.ends_with(s)), "{cap}");
            }
        }
    }
}

#[test]
fn test_every_sector_and_category_is_present() {
    let catalog = seeded_catalog();
    let sectors = catalog.sectors();

    for sector in expected_sectors()
        .into_iter()
        .chain(RANDOM_STOCK_SECTORS.iter().copied())
        .chain(RANDOM_FUND_TYPES.iter().copied())
        .chain(RANDOM_GOLD_TYPES.iter().copied())
    {
        assert!(sectors.contains(&sector), "missing sector {sector}");
    }
}

#[test]
fn test_named_lists_cover_every_sector_without_random_batches() {
    let config = GeneratorConfig::default()
        .with_seed(3)
        .with_random_counts(0, 0, 0);
    let catalog = CatalogGenerator::new(rng_from_seed(config.seed)).build(&config);
    let sectors = catalog.sectors();
    for sector in expected_sectors() {
        assert!(sectors.contains(&sector), "missing sector {sector}");
    }
    for asset_type in AssetType::ALL {
        assert!(catalog.iter().any(|i| i.get_asset_type() == asset_type));
    }
}

#[test]
fn test_small_batches_are_rejected_before_generation() {
    let config = GeneratorConfig::default()
        .with_seed(1)
        .with_random_counts(3, 2, 1);
    assert!(matches!(initialize(&config), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_smallest_accepted_batches_cover_every_pool() {
    let config = GeneratorConfig::default().with_seed(1).with_random_counts(
        RANDOM_STOCK_SECTORS.len(),
        RANDOM_FUND_TYPES.len(),
        RANDOM_GOLD_TYPES.len(),
    );
    let catalog = initialize(&config).unwrap();
    let sectors = catalog.sectors();

    for sector in RANDOM_STOCK_SECTORS
        .iter()
        .chain(RANDOM_FUND_TYPES)
        .chain(RANDOM_GOLD_TYPES)
    {
        assert!(sectors.contains(sector), "missing sector {sector}");
    }
}

#[test]
fn test_overview_counts_add_up() {
    let config = small_config();
    let catalog = initialize(&config).unwrap();
    let overview = catalog.overview();

    assert_eq!(overview.total(), catalog.len());
    assert_eq!(
        overview.gainers + overview.losers + overview.unchanged,
        catalog.len()
    );
    assert_eq!(overview.total_gold, 15 + config.random_gold);
    assert_eq!(overview.total_mutual_funds, 80 + config.random_funds);
    assert_eq!(overview.total_stocks, 141 + config.random_stocks);
}

#[test]
fn test_duplicate_symbols_resolve_to_first() {
    let catalog = seeded_catalog();
    let pypl: Vec<_> = catalog
        .iter()
        .filter(|i| i.get_symbol() == "PYPL")
        .collect();
    assert_eq!(pypl.len(), 2);
    assert_eq!(catalog.find("PYPL").unwrap().get_id(), pypl[0].get_id());
    assert_eq!(catalog.find("PYPL").unwrap().get_sector(), "Technology");
}

#[test]
fn test_same_seed_same_catalog() {
    let a = seeded_catalog();
    let b = seeded_catalog();
    let ids_a: Vec<_> = a.iter().map(|i| i.get_id()).collect();
    let ids_b: Vec<_> = b.iter().map(|i| i.get_id()).collect();
    assert_eq!(ids_a, ids_b);
    assert_eq!(a.instruments(), b.instruments());
}

#[test]
fn test_gold_query_on_generated_catalog() {
    let catalog = seeded_catalog();
    let gold = CatalogQuery::new().with_asset_type(Filter::Only(AssetType::Gold));

    for sector in catalog.sectors() {
        let query = gold.clone().with_sector(Filter::Only(sector.to_string()));
        assert!(catalog
            .query(&query)
            .iter()
            .all(|i| i.get_asset_type() == AssetType::Gold && i.get_sector() == sector));
    }

    let searched = catalog.query(&gold.clone().with_search("hdfc"));
    assert!(!searched.is_empty());
    assert!(searched.iter().all(|i| {
        i.get_symbol().to_lowercase().contains("hdfc") || i.get_name().to_lowercase().contains("hdfc")
    }));
}

#[test]
fn test_sorting_generated_catalog_reverses_exactly() {
    let catalog = seeded_catalog();
    for field in [SortField::Price, SortField::Symbol, SortField::MarketCap, SortField::Sector] {
        let asc = catalog.query(&CatalogQuery::new().sorted_by(field, SortOrder::Ascending));
        let mut desc = catalog.query(&CatalogQuery::new().sorted_by(field, SortOrder::Descending));
        desc.reverse();
        let asc_ids: Vec<_> = asc.iter().map(|i| i.get_id()).collect();
        let desc_ids: Vec<_> = desc.iter().map(|i| i.get_id()).collect();
        assert_eq!(asc_ids, desc_ids, "{field:?}");
    }
}

#[test]
fn test_pagination_over_generated_catalog() {
    let config = small_config();
    let catalog = initialize(&config).unwrap();
    let query = CatalogQuery::new();

    let first = catalog.paginate(&query, 1, config.page_size);
    assert_eq!(first.get_items().len(), config.page_size);
    assert_eq!(
        first.get_total_pages(),
        catalog.len().div_ceil(config.page_size)
    );
    assert!(!first.has_previous());

    let past_end = catalog.paginate(&query, first.get_total_pages() + 1, config.page_size);
    assert!(past_end.get_items().is_empty());
}
