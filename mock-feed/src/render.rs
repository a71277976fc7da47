//! Plain-text rendering of catalog data.

use market::model::instrument::{AssetType, Instrument, Trend};
use market::model::query::Page;
use market::MarketOverview;
use market_core::SymbolDetail;
use std::fmt::Write;

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}

/// Volume in millions, e.g. `12.3M`.
fn volume_millions(volume: u64) -> String {
    format!("{:.1}M", volume as f64 / 1_000_000.0)
}

/// Funds report their market cap as assets under management.
fn cap_label(instrument: &Instrument) -> String {
    match instrument.get_asset_type() {
        AssetType::MutualFund => format!("AUM {}", instrument.get_market_cap()),
        AssetType::Stock | AssetType::Gold => instrument.get_market_cap().to_string(),
    }
}

fn trend_marker(instrument: &Instrument) -> &'static str {
    match instrument.trend() {
        Trend::Up => "up",
        Trend::Down => "down",
    }
}

pub fn page(page: &Page<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<32} {:<20} {:<12} {:>10} {:>9} {:>8} {:>8} {:>14} {:>5}",
        "SYMBOL", "NAME", "SECTOR", "TYPE", "PRICE", "CHANGE", "CHG%", "VOLUME", "MCAP/AUM", "TREND"
    );
    for inst in page.get_items() {
        let _ = writeln!(
            out,
            "{:<12} {:<32} {:<20} {:<12} {:>10.2} {:>9} {:>8} {:>8} {:>14} {:>5}",
            inst.get_symbol(),
            truncate(inst.get_name(), 32),
            truncate(inst.get_sector(), 20),
            inst.get_asset_type(),
            inst.get_price(),
            signed(inst.get_change()),
            signed(inst.get_change_percent()),
            volume_millions(inst.get_volume()),
            cap_label(inst),
            trend_marker(inst),
        );
    }
    if page.get_total_matches() == 0 {
        let _ = writeln!(out, "No instruments match.");
    } else {
        let _ = writeln!(
            out,
            "Page {} of {} ({} matches)",
            page.get_page(),
            page.get_total_pages(),
            page.get_total_matches()
        );
    }
    out
}

pub fn overview(overview: &MarketOverview) -> String {
    format!(
        "Stocks:        {}\nMutual funds:  {}\nGold:          {}\nGainers:       {}\nLosers:        {}\nUnchanged:     {}\n",
        overview.total_stocks,
        overview.total_mutual_funds,
        overview.total_gold,
        overview.gainers,
        overview.losers,
        overview.unchanged
    )
}

pub fn detail(detail: &SymbolDetail) -> String {
    let inst = detail.get_instrument();
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", inst.get_symbol(), inst.get_name());
    let _ = writeln!(
        out,
        "{} | {} | {}",
        inst.get_sector(),
        inst.get_asset_type(),
        match inst.get_asset_type() {
            AssetType::MutualFund => cap_label(inst),
            AssetType::Stock | AssetType::Gold => format!("market cap {}", inst.get_market_cap()),
        }
    );
    let _ = writeln!(
        out,
        "Price {:.2} ({} / {}%), volume {}",
        inst.get_price(),
        signed(inst.get_change()),
        signed(inst.get_change_percent()),
        volume_millions(inst.get_volume())
    );

    let _ = writeln!(out, "\nHistory");
    for point in detail.get_historical() {
        let _ = writeln!(
            out,
            "  {}  {:>10.2}  {:>8}",
            point.get_date(),
            point.get_price(),
            volume_millions(point.get_volume())
        );
    }

    let _ = writeln!(out, "\nPredictions");
    for point in detail.get_predictions() {
        let _ = writeln!(
            out,
            "  {}  {:>10.2}  {:>5.1}%",
            point.get_date(),
            point.get_price(),
            point.get_confidence() * 100.0
        );
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('~');
        cut
    }
}
