//! Static definition of the named part of the catalog.
//!
//! Each `NamedGroup` lists the symbols of one category together with how their
//! display name, sector and base price are derived. The bulk-random batches
//! that pad the catalog use the pools at the bottom of this file.

use market::model::instrument::AssetType;

/// How a group derives an instrument's display name from its symbol.
#[derive(Debug, Clone, Copy)]
pub enum NameRule {
    /// `"<SYMBOL><suffix>"`.
    Suffix(&'static str),
    /// Symbol with every character outside `A-Z` removed, then the suffix.
    LettersOnly(&'static str),
}

impl NameRule {
    pub fn apply(&self, symbol: &str) -> String {
        match self {
            NameRule::Suffix(suffix) => format!("{symbol}{suffix}"),
            NameRule::LettersOnly(suffix) => {
                let letters: String = symbol.chars().filter(|c| c.is_ascii_uppercase()).collect();
                format!("{letters}{suffix}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SectorRule {
    Fixed(&'static str),
    /// The first instruments of the group take the pool in order, so every
    /// entry appears at least once; the rest are drawn uniformly.
    OneOf(&'static [&'static str]),
}

/// Base prices are drawn as `floor + u * span` with `u` in `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct PriceRange {
    pub floor: f64,
    pub span: f64,
}

const fn range(floor: f64, span: f64) -> PriceRange {
    PriceRange { floor, span }
}

#[derive(Debug, Clone, Copy)]
pub struct NamedGroup {
    pub symbols: &'static [&'static str],
    pub name: NameRule,
    pub sector: SectorRule,
    pub base_price: PriceRange,
    pub asset_type: AssetType,
}

const US_TECH: &[&str] = &[
    "AAPL", "GOOGL", "MSFT", "AMZN", "TSLA", "META", "NVDA", "NFLX", "ORCL", "CRM", "ADBE", "INTC",
    "AMD", "QCOM", "CSCO", "IBM", "HPQ", "DELL", "VMW", "SNOW", "PLTR", "UBER", "LYFT", "ABNB",
    "DOCU", "ZM", "SHOP", "SQ", "PYPL", "COIN", "ROKU", "TWLO", "OKTA", "CRWD", "NET", "DDOG", "MDB",
    "FSLY", "ESTC", "TEAM",
];

const US_BANKING: &[&str] = &[
    "JPM", "BAC", "WFC", "GS", "MS", "C", "USB", "PNC", "TFC", "COF", "AXP", "BLK", "SCHW", "CME",
    "ICE", "SPGI", "MCO", "V", "MA", "PYPL", "SQ", "FISV", "FIS", "INTU", "ADP", "PAYX",
];

const US_HEALTHCARE: &[&str] = &[
    "JNJ", "PFE", "UNH", "MRK", "ABT", "TMO", "MDT", "AMGN", "GILD", "BMY", "LLY", "ABBV", "CVS",
    "CI", "HUM", "ANTM", "DHR", "SYK", "BSX", "EW", "ISRG", "VRTX", "REGN", "BIIB", "MRNA", "NVAX",
];

const INDIAN_EQUITIES: &[&str] = &[
    "RELIANCE", "TCS", "INFY", "HDFCBANK", "ICICIBANK", "KOTAKBANK", "SBIN", "BHARTIARTL", "ITC",
    "HINDUNILVR", "ASIANPAINT", "MARUTI", "BAJFINANCE", "HCLTECH", "WIPRO", "ULTRACEMCO",
    "NESTLEIND", "TITAN", "POWERGRID", "NTPC", "COALINDIA", "ONGC", "TECHM", "SUNPHARMA", "DRREDDY",
    "CIPLA", "DIVISLAB", "BAJAJFINSV", "AXISBANK", "LT", "TATASTEEL", "HINDALCO", "JSWSTEEL",
    "INDUSINDBK", "BAJAJ-AUTO", "HEROMOTOCO", "M&M", "TATAMOTORS", "EICHERMOT", "BRITANNIA",
    "GODREJCP", "DABUR", "MARICO", "COLPAL", "PIDILITIND", "BERGEPAINT", "ASIAN", "INDIGO",
    "SPICEJET",
];

const INDIAN_SECTORS: &[&str] = &["Technology", "Banking", "FMCG", "Auto", "Pharma", "Energy"];

const GOLD_ETFS: &[&str] = &[
    "GOLDIETF", "GOLDBEES", "GOLDSHARE", "GOLDMOZART", "GOLDCASE", "HDFCGOLD", "ICICIGOLD",
    "SBIGOLD", "KOTAKGOLD", "INVESCOGOLD", "NIFTYGOLDETF", "GOLDPETAL", "EDELGOLD", "LIQUIDGOLD",
    "GOLDMINE",
];

const FUNDS_LARGE_CAP: &[&str] = &[
    "HDFCTOP100", "ICICIPRU500", "SBILARGECAP", "HDFCLARGECAP", "AXISLARGECAP", "KOTAKLARGECAP",
    "UTINIFTY", "INVESCOLARGECAP", "FRANKLINTEMPLETON", "ADITYABIRLA500",
];

const FUNDS_MID_CAP: &[&str] = &[
    "HDFCMIDCAP", "ICICIMIDCAP", "SBIMIDCAP", "KOTAKMIDCAP", "AXISMIDCAP", "INVESCOMIDCAP",
    "FRANKLINMIDCAP", "ADITYABIRLAMID", "DSPMIDCAP", "L&TMIDCAP",
];

const FUNDS_SMALL_CAP: &[&str] = &[
    "HDFCSMALLCAP", "ICICISMALLCAP", "SBISMALLCAP", "KOTAKSMALLCAP", "AXISSMALLCAP",
    "INVESCOSMALLCAP", "FRANKLINSMALL", "ADITYABIRLASMALL", "DSPSMALLCAP", "L&TSMALLCAP",
];

const FUNDS_DEBT: &[&str] = &[
    "HDFCDEBT", "ICICIULTRASF", "SBIDEBT", "KOTAKDEBT", "AXISDEBT", "INVESCODEBT", "FRANKLINDEBT",
    "ADITYABIRLADEBT", "DSPDEBT", "L&TDEBT",
];

const FUNDS_HYBRID: &[&str] = &[
    "HDFCHYBRID", "ICICIHYBRID", "SBIHYBRID", "KOTAKHYBRID", "AXISHYBRID", "INVESCOHYBRID",
    "FRANKLINHYBRID", "ADITYABIRLAHYBRID", "DSPHYBRID", "L&THYBRID",
];

const FUNDS_ELSS: &[&str] = &[
    "HDFCELSS", "ICICIELSS", "SBIELSS", "KOTAKELSS", "AXISELSS", "INVESCOELSS", "FRANKLINELSS",
    "ADITYABIRLAELSS", "DSPELSS", "L&TELSS",
];

const FUNDS_INDEX: &[&str] = &[
    "HDFCINDEX", "ICICIINDEX", "SBIINDEX", "KOTAKINDEX", "AXISINDEX", "INVESCOINDEX",
    "FRANKLININDEX", "ADITYABIRLAINDEX", "DSPINDEX", "L&TINDEX",
];

const FUNDS_INTERNATIONAL: &[&str] = &[
    "HDFCINTL", "ICICIINTL", "SBIINTL", "KOTAKINTL", "AXISINTL", "INVESCOINTL", "FRANKLININTL",
    "ADITYABIRLAINTL", "DSPINTL", "L&TINTL",
];

const fn fund_group(
    symbols: &'static [&'static str],
    suffix: &'static str,
    sector: &'static str,
    base_price: PriceRange,
) -> NamedGroup {
    NamedGroup {
        symbols,
        name: NameRule::Suffix(suffix),
        sector: SectorRule::Fixed(sector),
        base_price,
        asset_type: AssetType::MutualFund,
    }
}

/// Named groups, in catalog order.
pub const NAMED_GROUPS: &[NamedGroup] = &[
    NamedGroup {
        symbols: US_TECH,
        name: NameRule::Suffix(" Inc."),
        sector: SectorRule::Fixed("Technology"),
        base_price: range(50.0, 500.0),
        asset_type: AssetType::Stock,
    },
    NamedGroup {
        symbols: US_BANKING,
        name: NameRule::Suffix(" Corp."),
        sector: SectorRule::Fixed("Banking"),
        base_price: range(30.0, 200.0),
        asset_type: AssetType::Stock,
    },
    NamedGroup {
        symbols: US_HEALTHCARE,
        name: NameRule::Suffix(" Healthcare"),
        sector: SectorRule::Fixed("Healthcare"),
        base_price: range(40.0, 300.0),
        asset_type: AssetType::Stock,
    },
    NamedGroup {
        symbols: INDIAN_EQUITIES,
        name: NameRule::LettersOnly(" Ltd."),
        sector: SectorRule::OneOf(INDIAN_SECTORS),
        base_price: range(100.0, 3000.0),
        asset_type: AssetType::Stock,
    },
    NamedGroup {
        symbols: GOLD_ETFS,
        name: NameRule::Suffix(" Gold ETF"),
        sector: SectorRule::Fixed("Gold"),
        base_price: range(4500.0, 1500.0),
        asset_type: AssetType::Gold,
    },
    fund_group(FUNDS_LARGE_CAP, " Large Cap Fund", "Equity Large Cap", range(45.0, 200.0)),
    fund_group(FUNDS_MID_CAP, " Mid Cap Fund", "Equity Mid Cap", range(35.0, 150.0)),
    fund_group(FUNDS_SMALL_CAP, " Small Cap Fund", "Equity Small Cap", range(25.0, 100.0)),
    fund_group(FUNDS_DEBT, " Debt Fund", "Debt", range(12.0, 25.0)),
    fund_group(FUNDS_HYBRID, " Hybrid Fund", "Hybrid", range(18.0, 50.0)),
    fund_group(FUNDS_ELSS, " ELSS Tax Saver", "ELSS", range(22.0, 80.0)),
    fund_group(FUNDS_INDEX, " Index Fund", "Index", range(15.0, 40.0)),
    fund_group(FUNDS_INTERNATIONAL, " International Fund", "International", range(25.0, 60.0)),
];

/// Sectors for the procedurally named stocks.
pub const RANDOM_STOCK_SECTORS: &[&str] = &[
    "Energy",
    "Utilities",
    "Real Estate",
    "Materials",
    "Consumer Goods",
    "Industrials",
    "Telecommunications",
    "Transportation",
    "Retail",
    "Entertainment",
];

/// Fund types for the procedurally named funds; used as their sector.
pub const RANDOM_FUND_TYPES: &[&str] = &[
    "Large Cap",
    "Mid Cap",
    "Small Cap",
    "Debt",
    "Hybrid",
    "ELSS",
    "Index",
    "International",
];

/// Product types for the procedurally named gold products; used as their sector.
pub const RANDOM_GOLD_TYPES: &[&str] = &["Digital Gold", "Gold ETF", "Gold Bonds", "Gold Savings"];

pub const RANDOM_STOCK_PRICE: PriceRange = range(1.0, 1000.0);
pub const RANDOM_FUND_PRICE: PriceRange = range(10.0, 100.0);
pub const RANDOM_GOLD_PRICE: PriceRange = range(4000.0, 2000.0);

/// Symbol length for procedurally named stocks: 3 to 5 letters.
pub const RANDOM_SYMBOL_MIN_LEN: usize = 3;
pub const RANDOM_SYMBOL_MAX_LEN: usize = 5;

/// Every sector and fund category the named groups contribute.
pub fn expected_sectors() -> Vec<&'static str> {
    let mut sectors = Vec::new();
    for group in NAMED_GROUPS {
        match group.sector {
            SectorRule::Fixed(sector) => sectors.push(sector),
            SectorRule::OneOf(pool) => sectors.extend_from_slice(pool),
        }
    }
    sectors
}
