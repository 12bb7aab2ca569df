//! Collection statistics command

use anyhow::Result;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

use artcat_sdk::CatalogStatistics;

use crate::context::Context;
use crate::output::{print_field, print_section, OutputFormat};

/// Fetch and display collection statistics
pub async fn execute(ctx: &Context) -> Result<()> {
    let client = ctx.create_client()?;

    let spinner = ctx.output.spinner("Fetching statistics...");
    let stats = client.statistics().get().await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let stats = stats?;

    if ctx.output_format() == OutputFormat::Json {
        return ctx.output.json(&stats);
    }

    display(&stats);
    Ok(())
}

fn display(stats: &CatalogStatistics) {
    print_section("Collection");
    print_field("Total artworks", &stats.total_artworks.to_string());

    if !stats.top_creators.is_empty() {
        print_section("Top creators");
        let rows = stats
            .top_creators
            .iter()
            .map(|c| (c.creator.as_str(), c.count));
        println!("{}", count_table("Creator", rows));
    }

    if !stats.top_museums.is_empty() {
        print_section("Top museums");
        let rows = stats.top_museums.iter().map(|m| (m.museum.as_str(), m.count));
        println!("{}", count_table("Museum", rows));
    }

    if !stats.top_movements.is_empty() {
        print_section("Top movements");
        let rows = stats
            .top_movements
            .iter()
            .map(|m| (m.movement.as_str(), m.count));
        println!("{}", count_table("Movement", rows));
    }

    if !stats.by_century.is_empty() {
        print_section("Artworks by century");
        let rows = stats
            .by_century
            .iter()
            .map(|c| (c.century.as_str(), c.count));
        println!("{}", count_table("Century", rows));
    }

    if !stats.museum_breakdown.is_empty() {
        print_section("Museum breakdown");
        for museum in &stats.museum_breakdown {
            println!();
            println!(
                "{} ({} artworks)",
                museum.museum.bold(),
                museum.total_artworks
            );
            for movement in &museum.top_movements {
                println!("    - {} ({})", movement.movement, movement.movement_count);
            }
        }
    }
}

fn count_table<'a>(label: &str, rows: impl Iterator<Item = (&'a str, u64)>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new(label).fg(Color::Cyan),
        Cell::new("Count").fg(Color::Cyan),
    ]);

    for (name, count) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }

    table
}
