use crate::interface::labels::ModeLabels;
use crate::models::{Item, SelectionResult};

/// Display the candidate list with per-entry ratios.
pub fn display_item_list(items: &[Item], labels: &ModeLabels) {
    if items.is_empty() {
        println!("No {}s added yet.", labels.noun);
        return;
    }

    println!();
    println!("=== {} list ({} entries) ===", labels.title, items.len());
    println!();

    for item in items {
        if labels.show_roi {
            println!(
                "  {} - {}, return {} (ROI: {:.1}%)",
                item.name,
                labels.fmt_weight(item.weight),
                labels.fmt_value(item.value),
                (item.ratio() - 1.0) * 100.0
            );
        } else {
            println!(
                "  {} - {}, {} (ratio: {:.2})",
                item.name,
                labels.fmt_weight(item.weight),
                labels.fmt_value(item.value),
                item.ratio()
            );
        }
    }

    println!();
}

/// Display a selection result in a formatted table.
pub fn display_selection(
    result: &SelectionResult,
    capacity: f64,
    fractional: bool,
    labels: &ModeLabels,
) {
    if result.is_empty() {
        println!(
            "No {}s selected (empty list or no remaining capacity).",
            labels.noun
        );
        return;
    }

    println!();
    println!("=== Optimization Results ===");
    println!();

    // Find max name length for alignment
    let max_name_len = result
        .selected
        .iter()
        .map(|s| s.item.name.len())
        .max()
        .unwrap_or(10);

    for (i, entry) in result.selected.iter().enumerate() {
        let fraction_tag = if fractional {
            format!("  [{:.0}%]", entry.fraction * 100.0)
        } else {
            String::new()
        };

        println!(
            "{:>3}. {:<width$} - {} taken, {}{}",
            i + 1,
            entry.item.name,
            labels.fmt_weight(entry.selected_weight),
            labels.fmt_value(entry.selected_value),
            fraction_tag,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Selected {}s: {}", labels.noun, result.selected.len());
    println!(
        "{}: {}",
        labels.total_weight_label,
        labels.fmt_weight(result.total_weight)
    );
    println!(
        "{}: {}",
        labels.total_value_label,
        labels.fmt_value(result.total_value)
    );

    if capacity > 0.0 && capacity.is_finite() {
        println!("Capacity used: {:.1}%", result.capacity_used_pct(capacity));
    }

    if labels.show_roi && result.total_weight > 0.0 {
        println!("ROI: {:.1}%", result.roi_pct());
    }

    println!();
}
