use std::error::Error;
use std::fs;
use std::path::Path;

use storage_terminal::inventory::{Chest, Placement};
use storage_terminal::item::{ItemCatalog, ItemStack};
use storage_terminal::logging;
use storage_terminal::save::FilterStore;
use storage_terminal::selection::select_containers;
use storage_terminal::storage::StorageTerminal;
use storage_terminal::TerminalConfig;

// Column widths of the printed table
const NAME_WIDTH: usize = 24;
const NUMBER_WIDTH: usize = 8;

/// Prints the aggregated storage table
///
/// Usage: `storage-terminal [world.json] [search text]`
///
/// `world.json` holds a JSON array of chests. Without it a small demo
/// world is used.
fn main() -> Result<(), Box<dyn Error>> {
    let config = TerminalConfig::load_or_default(TerminalConfig::default_path())?;
    logging::init(&config);

    let mut args = std::env::args().skip(1);
    let chests = match args.next() {
        Some(path) => load_world(Path::new(&path))?,
        None => demo_world(&ItemCatalog::create_default()),
    };
    let search = args.next().unwrap_or_default();

    let store = FilterStore::new(FilterStore::default_directory())?;
    let filter = store.load()?;
    let linked = select_containers(chests, &filter, config.use_whitelist);

    let mut terminal = StorageTerminal::new(linked, &config);
    terminal.set_search_text(search);

    print_table(&terminal);
    Ok(())
}

fn load_world(path: &Path) -> Result<Vec<Chest>, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    let chests: Vec<Chest> = serde_json::from_str(&json)?;
    tracing::info!(path = %path.display(), chests = chests.len(), "loaded world");
    Ok(chests)
}

fn demo_world(catalog: &ItemCatalog) -> Vec<Chest> {
    vec![
        Chest::placed(Placement::new("Farm", 64, 15), 36)
            .with_items(stacks(catalog, &[("wood", 999, 0), ("wood", 240, 0), ("stone", 80, 0)])),
        Chest::placed(Placement::new("Farm", 65, 15), 36)
            .with_items(stacks(catalog, &[("parsnip", 12, 0), ("parsnip", 4, 2), ("copper_pickaxe", 1, 0)])),
        Chest::placed(Placement::new("Shed", 3, 4), 36)
            .with_items(stacks(catalog, &[("stone", 310, 0), ("copper_ore", 45, 0), ("sap", 18, 0)])),
    ]
}

/// Builds catalog stacks from (id, quantity, quality) triples
fn stacks(catalog: &ItemCatalog, wanted: &[(&str, u32, u8)]) -> Vec<ItemStack> {
    wanted
        .iter()
        .filter_map(|&(id, quantity, quality)| catalog.stack(id, quantity, quality))
        .collect()
}

fn print_table(terminal: &StorageTerminal<Chest>) {
    println!(
        "{:<name$} {:>num$} {:>num$} {:>num$}",
        "Item",
        "Qty",
        "Value",
        "Total",
        name = NAME_WIDTH,
        num = NUMBER_WIDTH,
    );

    for entry in terminal.entries() {
        println!(
            "{:<name$} {:>num$} {:>num$} {:>num$}",
            entry.identity.to_string(),
            entry.quantity,
            entry.unit_value,
            entry.total_value,
            name = NAME_WIDTH,
            num = NUMBER_WIDTH,
        );
    }

    if terminal.entries().is_empty() {
        println!("(no items)");
    }
}
