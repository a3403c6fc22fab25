use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(dir: Option<&Path>) -> Result<(), String> {
    let tables = super::load_tables(dir)?;

    if tables.is_empty() {
        println!("  No tables found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Entries", "First entry"]);

    for category in tables.categories() {
        let t = tables.get(category).map_err(|e| e.to_string())?;
        let first = t.entries().first().map_or("—", String::as_str);
        table.add_row(vec![category.to_string(), t.len().to_string(), first.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} tables", tables.len());

    Ok(())
}
