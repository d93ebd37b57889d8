use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::interface::labels::ModeLabels;
use crate::state::ItemListManager;

/// Minimum Jaro-Winkler score for a fuzzy name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Prompt for a number, re-asking until the input parses.
///
/// NaN is rejected; "inf" is accepted and simply admits every item.
fn prompt_number(prompt: &str) -> Result<f64> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match input.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => return Ok(v),
            _ => println!("Please enter a valid number."),
        }
    }
}

/// Prompt for the capacity constraint of this framing.
pub fn prompt_capacity(labels: &ModeLabels) -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt(labels.capacity_prompt)
            .default(format!("{}", labels.capacity_default))
            .interact_text()?;
        match input.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => return Ok(v),
            _ => println!("Please enter a valid number."),
        }
    }
}

/// Prompt whether partial inclusion of the overflowing item is allowed.
pub fn prompt_fractional(labels: &ModeLabels) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("Allow fractional {}s?", labels.noun))
        .default(false)
        .interact()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Interactively append entries to the list. Empty name finishes.
pub fn prompt_add_items(manager: &mut ItemListManager, labels: &ModeLabels) -> Result<usize> {
    let mut added = 0;

    loop {
        let name: String = Input::new()
            .with_prompt(format!(
                "Enter a {} name (or press Enter to finish)",
                labels.noun
            ))
            .allow_empty(true)
            .interact_text()?;

        let name = name.trim().to_string();
        if name.is_empty() {
            break;
        }

        let weight = prompt_number(labels.weight_label)?;
        if !(weight > 0.0) || !weight.is_finite() {
            println!("{} must be a positive number.", labels.weight_label);
            continue;
        }

        let value = prompt_number(labels.value_label)?;
        if !value.is_finite() {
            println!("{} must be a finite number.", labels.value_label);
            continue;
        }

        let item = manager.add(&name, weight, value)?;
        println!("Added: {} (ratio {:.2})", item.name, item.ratio());
        added += 1;
    }

    Ok(added)
}

/// Interactively remove entries by name, with fuzzy matching.
pub fn prompt_remove_items(manager: &mut ItemListManager, labels: &ModeLabels) -> Result<usize> {
    let mut removed = 0;

    while !manager.is_empty() {
        let input: String = Input::new()
            .with_prompt(format!(
                "Enter a {} to remove (or press Enter to finish)",
                labels.noun
            ))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first (case-insensitive)
        if let Some(id) = manager.find_by_name(input).map(|i| i.id) {
            let item = manager.remove(id)?;
            println!("Removed: {}", item.name);
            removed += 1;
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(u64, String, f64)> = manager
            .items()
            .iter()
            .map(|i| {
                let score = jaro_winkler(&i.name.to_lowercase(), &input.to_lowercase());
                (i.id, i.name.clone(), score)
            })
            .filter(|(_, _, score)| *score > FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching {} found for '{}'", labels.noun, input);
            continue;
        }

        if candidates.len() == 1 {
            let (id, name, _) = candidates.remove(0);
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;

            if confirm {
                manager.remove(id)?;
                println!("Removed: {}", name);
                removed += 1;
            }
        } else {
            // Multiple matches - let user select
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(_, name, _)| name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                manager.remove(candidates[selection].0)?;
                println!("Removed: {}", options[selection]);
                removed += 1;
            }
        }
    }

    Ok(removed)
}
