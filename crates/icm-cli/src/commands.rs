//! Subcommand implementations.

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Table};
use tracing::debug;

use icm_lookup::LookupEngine;
use icm_model::{Catalog, SubsetId};

use crate::cli::{FindArgs, SampleArgs, SearchArgs, SubsetsArgs};
use crate::output::{align_column, apply_table_style, code_cell, header_cell, subset_cell};

/// Exact lookup. Returns whether a match was found; absence is not an error.
pub fn run_find(catalog: &Catalog, args: &FindArgs) -> Result<bool> {
    let engine = LookupEngine::new(catalog);
    let subset = args.subset.map(SubsetId::from);
    debug!(query = %args.code, subset = ?subset.map(|s| s.name()), "find");
    match engine.find(&args.code, subset) {
        Some(found) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                let mut table = Table::new();
                table.set_header(vec![
                    header_cell("Subset"),
                    header_cell("Code"),
                    header_cell("Description"),
                ]);
                apply_table_style(&mut table);
                table.add_row(vec![
                    subset_cell(found.subset.name()),
                    code_cell(&found.entry.code),
                    Cell::new(&found.entry.description),
                ]);
                println!("{table}");
            }
            Ok(true)
        }
        None => {
            if args.json {
                println!("null");
            } else {
                eprintln!("no entry matches {:?}", args.code);
            }
            Ok(false)
        }
    }
}

/// Fuzzy search across the whole catalog, ranked by edit distance.
pub fn run_search(catalog: &Catalog, args: &SearchArgs) -> Result<()> {
    let engine = LookupEngine::new(catalog);
    let hits = engine.search(&args.code);
    debug!(query = %args.code, hits = hits.len(), "search");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Distance"),
        header_cell("Subset"),
        header_cell("Code"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for hit in &hits {
        table.add_row(vec![
            Cell::new(hit.distance),
            subset_cell(hit.subset.name()),
            code_cell(&hit.entry.code),
            Cell::new(&hit.entry.description),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Draw random entries from one subset.
pub fn run_sample(catalog: &Catalog, args: &SampleArgs) -> Result<()> {
    let engine = LookupEngine::new(catalog);
    let subset = SubsetId::from(args.subset);
    let drawn = engine.sample(subset, args.count)?;
    debug!(subset = %subset, count = drawn.len(), "sample");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&drawn)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Description")]);
    apply_table_style(&mut table);
    for entry in &drawn {
        table.add_row(vec![code_cell(&entry.code), Cell::new(&entry.description)]);
    }
    println!("{table}");
    Ok(())
}

/// List the four subsets with their entry counts.
pub fn run_subsets(catalog: &Catalog, args: &SubsetsArgs) -> Result<()> {
    if args.json {
        let counts: Vec<_> = SubsetId::ALL
            .into_iter()
            .map(|id| {
                serde_json::json!({
                    "subset": id.name(),
                    "entries": catalog.subset(id).len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Subset"), header_cell("Entries")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for id in SubsetId::ALL {
        table.add_row(vec![
            Cell::new(id.name()),
            Cell::new(catalog.subset(id).len()),
        ]);
    }
    table.add_row(vec![
        header_cell("TOTAL"),
        Cell::new(catalog.len()),
    ]);
    println!("{table}");
    Ok(())
}
