//! One-shot page fetch

use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{
    Cell, Color, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::api::ArtworkSource;
use crate::models::PageResult;

/// Fetch `page` and print it as a table, or as JSON
pub fn cmd_page(source: &dyn ArtworkSource, page: u32, limit: u32, json: bool) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Fetching page {page} from {}...", source.name()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = source.fetch_page(page, limit);
    spinner.finish_and_clear();

    let result = result.with_context(|| format!("Failed to fetch page {page}"))?;
    info!("Fetched {} records for page {}", result.len(), result.page);

    if json {
        let out = serde_json::to_string_pretty(&result).context("Failed to serialize page")?;
        println!("{out}");
        return Ok(());
    }

    if result.is_empty() {
        println!("{} Page {} has no artworks", "!".yellow(), page);
        return Ok(());
    }

    println!("{}", page_table(&result));
    println!(
        "{} Page {} of {}",
        ">".cyan(),
        result.page.to_string().bold(),
        result.total_pages
    );

    Ok(())
}

fn year_cell(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Build the comfy-table rendering of a page
pub fn page_table(page: &PageResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Title", "Artist", "Start Date", "End Date"]);

    for record in &page.records {
        let artist = if record.artist.is_empty() {
            Cell::new("Unknown").fg(Color::DarkGrey)
        } else {
            Cell::new(&record.artist)
        };
        table.add_row(vec![
            Cell::new(record.id).fg(Color::Cyan),
            Cell::new(&record.title),
            artist,
            Cell::new(year_cell(record.date_start)),
            Cell::new(year_cell(record.date_end)),
        ]);
    }

    table
}
