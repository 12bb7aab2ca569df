//! Heritage list command

use anyhow::Result;

use crate::context::Context;
use crate::output::OutputFormat;
use crate::render::record_block;

/// Fetch and display the heritage-flagged records
pub async fn execute(ctx: &Context) -> Result<()> {
    let client = ctx.create_client()?;

    let spinner = ctx.output.spinner("Fetching heritage records...");
    let records = client.heritage().list().await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let records = records?;

    if ctx.output_format() == OutputFormat::Json {
        return ctx.output.json(&records);
    }

    if records.is_empty() {
        ctx.output.info("No heritage records found");
        return Ok(());
    }

    let blocks: Vec<_> = records.iter().map(record_block).collect();
    ctx.output.blocks(&blocks);

    println!();
    ctx.output
        .info(&format!("{} heritage records", records.len()));
    Ok(())
}
