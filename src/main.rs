use clap::Parser;
use std::path::Path;

use knapsack_optimizer_rs::cli::{Cli, Command};
use knapsack_optimizer_rs::error::Result;
use knapsack_optimizer_rs::interface::{
    ModeLabels, display_item_list, display_selection, prompt_add_items, prompt_capacity,
    prompt_fractional, prompt_remove_items, prompt_yes_no,
};
use knapsack_optimizer_rs::models::Item;
use knapsack_optimizer_rs::selector::select;
use knapsack_optimizer_rs::state::{
    ItemListManager, OptimizerState, load_csv_items, load_state, save_state,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Shopping => cmd_optimize(&cli.file, false),
        Command::Portfolio => cmd_optimize(&cli.file, true),
        Command::Import { csv, portfolio } => cmd_import(&cli.file, &csv, portfolio),
        Command::Reset { items, stocks } => cmd_reset(&cli.file, items, stocks),
    }
}

/// Load state, tolerating a missing file on first run.
fn load_or_default(path: &Path) -> Result<OptimizerState> {
    if path.exists() {
        load_state(path)
    } else {
        Ok(OptimizerState::default())
    }
}

/// Take one framing's list out of the state for editing.
fn take_list(state: &mut OptimizerState, portfolio: bool) -> Vec<Item> {
    if portfolio {
        std::mem::take(&mut state.stocks)
    } else {
        std::mem::take(&mut state.items)
    }
}

/// Put the edited list back and persist.
fn save_updated_list(
    path: &Path,
    mut state: OptimizerState,
    manager: ItemListManager,
    portfolio: bool,
) -> Result<()> {
    state.next_id = manager.next_id();
    if portfolio {
        state.stocks = manager.into_items();
    } else {
        state.items = manager.into_items();
    }
    save_state(path, &state)?;
    println!("State saved.");
    Ok(())
}

/// Run one interactive optimization session for a framing.
fn cmd_optimize(file_path: &str, portfolio: bool) -> Result<()> {
    let path = Path::new(file_path);
    let mut state = load_or_default(path)?;
    let labels = if portfolio {
        ModeLabels::portfolio()
    } else {
        ModeLabels::shopping()
    };

    let list = take_list(&mut state, portfolio);
    let mut manager = ItemListManager::new(list, state.next_id);

    println!("=== {} ===", labels.title);
    display_item_list(manager.items(), &labels);

    let add = prompt_yes_no(&format!("Add {}s?", labels.noun), manager.is_empty())?;
    if add {
        let added = prompt_add_items(&mut manager, &labels)?;
        if added > 0 {
            display_item_list(manager.items(), &labels);
        }
    }

    if !manager.is_empty() {
        let remove = prompt_yes_no(&format!("Remove {}s?", labels.noun), false)?;
        if remove {
            prompt_remove_items(&mut manager, &labels)?;
        }
    }

    if manager.is_empty() {
        println!("No {}s to optimize.", labels.noun);
        let save = prompt_yes_no("Save updated list?", true)?;
        if save {
            save_updated_list(path, state, manager, portfolio)?;
        }
        return Ok(());
    }

    let capacity = prompt_capacity(&labels)?;
    let fractional = if labels.always_fractional {
        true
    } else {
        prompt_fractional(&labels)?
    };

    let result = select(manager.items(), capacity, fractional);
    display_selection(&result, capacity, fractional, &labels);

    let save = prompt_yes_no("Save updated list?", true)?;
    if save {
        save_updated_list(path, state, manager, portfolio)?;
    }

    Ok(())
}

/// Bulk-add entries from a CSV file into one framing's list.
fn cmd_import(file_path: &str, csv_path: &str, portfolio: bool) -> Result<()> {
    let path = Path::new(file_path);
    let mut state = load_or_default(path)?;

    let (rows, parse_skipped) = load_csv_items(csv_path)?;

    let list = take_list(&mut state, portfolio);
    let mut manager = ItemListManager::new(list, state.next_id);

    let mut added = 0;
    let mut rejected = parse_skipped;
    for row in rows {
        match manager.add(&row.name, row.weight, row.value) {
            Ok(_) => added += 1,
            Err(_) => rejected += 1,
        }
    }

    let target = if portfolio { "portfolio" } else { "shopping" };
    println!(
        "Imported {} entries into the {} list ({} rejected).",
        added, target, rejected
    );

    save_updated_list(path, state, manager, portfolio)
}

/// Clear stored lists.
fn cmd_reset(file_path: &str, items: bool, stocks: bool) -> Result<()> {
    if !items && !stocks {
        println!("Please specify at least one reset option:");
        println!("  --items   Clear the shopping list");
        println!("  --stocks  Clear the portfolio list");
        return Ok(());
    }

    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("State file not found: {}", file_path);
        return Ok(());
    }

    let mut state = load_state(path)?;

    if items {
        state.items.clear();
        println!("Cleared the shopping list.");
    }

    if stocks {
        state.stocks.clear();
        println!("Cleared the portfolio list.");
    }

    save_state(path, &state)?;
    println!("State saved.");

    Ok(())
}
