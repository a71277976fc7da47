//! Terminal front end for the synthetic market.
//!
//! Generates the catalog once at start-up and answers one command against it:
//! a filtered listing, the sector list, the overview counts, or the detail of
//! a single symbol with its history and predictions.

mod args;
mod render;

use anyhow::{Context, Result};
use args::{Cli, Command, ListArgs};
use clap::Parser;
use log::{info, warn};
use market::{Catalog, CatalogError};
use market_core::generator::rng_from_seed;
use market_core::{initialize, logging, GeneratorConfig, SeriesGenerator};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.common.get_log_level());

    let config = cli
        .common
        .resolve_config()
        .context("Failed to load generator configuration")?;
    let catalog = initialize(&config)?;

    match cli.command {
        Command::List(list) => run_list(&catalog, &config, &list),
        Command::Sectors { json } => {
            let sectors = catalog.sectors();
            if json {
                println!("{}", serde_json::to_string_pretty(&sectors)?);
            } else {
                sectors.iter().for_each(|sector| println!("{sector}"));
            }
            Ok(())
        }
        Command::Overview { json } => {
            let overview = catalog.overview();
            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                print!("{}", render::overview(&overview));
            }
            Ok(())
        }
        Command::Show { symbol, json } => run_show(catalog, &config, &symbol, json),
    }
}

fn run_list(catalog: &Catalog, config: &GeneratorConfig, list: &ListArgs) -> Result<()> {
    let page_size = list.page_size.unwrap_or(config.page_size);
    let query = list.to_query();
    let page = catalog.paginate(&query, list.page, page_size);
    info!(
        "Listing page {} of {} ({} matches)",
        page.get_page(),
        page.get_total_pages(),
        page.get_total_matches()
    );

    if list.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", render::page(&page));
    }
    Ok(())
}

fn run_show(catalog: Catalog, config: &GeneratorConfig, symbol: &str, json: bool) -> Result<()> {
    // Offset the seed so series draws do not replay the catalog's.
    let rng = rng_from_seed(config.seed.map(|seed| seed.wrapping_add(1)));
    let mut series = SeriesGenerator::new(catalog, rng);

    match series.symbol_detail(symbol) {
        Ok(detail) if json => println!("{}", serde_json::to_string_pretty(&detail)?),
        Ok(detail) => print!("{}", render::detail(&detail)),
        Err(CatalogError::NotFound(missing)) => {
            warn!("Lookup failed for '{}'", missing);
            println!("Symbol '{missing}' not found.");
            println!("Run `mock-feed list --search <TEXT>` to browse available symbols.");
        }
    }
    Ok(())
}
