//! Command-line interface of the mock feed.

use clap::{Parser, Subcommand};
use market::model::instrument::AssetType;
use market::model::query::{CatalogQuery, Filter, SortField, SortOrder};
use market_core::args::CommonArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search, filter, sort and page through the catalog
    List(ListArgs),

    /// Print the distinct sectors in catalog order
    Sectors {
        #[arg(long)]
        json: bool,
    },

    /// Print headline counts over the catalog
    Overview {
        #[arg(long)]
        json: bool,
    },

    /// Show one instrument with its history and predictions
    Show {
        /// Exact ticker symbol, e.g. AAPL
        symbol: String,

        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive substring of the symbol or name
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sector name, or "All"
    #[arg(long, default_value = "All")]
    pub sector: Filter<String>,

    /// stock, gold, mutual_fund, or "All"
    #[arg(short = 't', long = "type", default_value = "All")]
    pub asset_type: Filter<AssetType>,

    /// symbol, name, sector, price, change, changePercent, volume or marketCap
    #[arg(long, default_value = "symbol")]
    pub sort: SortField,

    /// asc or desc
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page; defaults to the configured page size
    #[arg(long)]
    pub page_size: Option<usize>,

    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn to_query(&self) -> CatalogQuery {
        CatalogQuery::new()
            .with_search(self.search.clone())
            .with_sector(self.sector.clone())
            .with_asset_type(self.asset_type.clone())
            .sorted_by(self.sort, self.order)
    }
}
