//! Inspect command - Show the contents of a strategy table

use anyhow::Result;
use clap::Parser;

use crate::cli::{
    config::CommonArgs,
    output::{print_kv, print_section, print_table},
};

#[derive(Parser, Debug)]
#[command(about = "Show the patterns and candidate moves of a strategy table")]
pub struct InspectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the table as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let table = args.common.load_table()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let source = args
        .common
        .table
        .as_ref()
        .filter(|path| path.exists())
        .map_or_else(|| "stock table".to_string(), |path| path.display().to_string());

    print_section("Strategy Table");
    print_kv("Source", &source);
    print_kv("Patterns", &table.pattern_count().to_string());
    print_kv("Candidates", &table.candidate_count().to_string());
    let passive = table
        .turns()
        .flat_map(|(_, patterns)| patterns.iter())
        .filter(|pattern| pattern.is_passive())
        .count();
    print_kv("Exhausted patterns", &passive.to_string());

    print_table(&table);
    Ok(())
}
