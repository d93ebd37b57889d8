use std::cmp::Ordering;

use crate::models::{Item, SelectedItem, SelectionResult};

/// Greedily fill `capacity` from `items`, highest value-per-weight first.
///
/// With `allow_fractional` the item that would overflow the capacity is
/// included partially; otherwise items are whole-or-skipped, and iteration
/// continues past a misfit so a later, lighter item can still be taken.
///
/// Degenerate inputs (empty list, non-positive capacity) yield an empty
/// result rather than an error. Every item must have positive weight; the
/// input boundaries enforce that before anything reaches this function.
pub fn select(items: &[Item], capacity: f64, allow_fractional: bool) -> SelectionResult {
    let mut ranked: Vec<&Item> = items.iter().collect();

    // Stable sort: items with equal ratio keep their input order.
    ranked.sort_by(|a, b| {
        b.ratio()
            .partial_cmp(&a.ratio())
            .unwrap_or(Ordering::Equal)
    });

    let mut selected = Vec::new();
    let mut remaining = capacity;

    for item in ranked {
        if remaining <= 0.0 {
            break;
        }

        if allow_fractional {
            let take = item.weight.min(remaining);
            selected.push(SelectedItem::partial(item.clone(), take));
            remaining -= take;
        } else if item.weight <= remaining {
            selected.push(SelectedItem::whole(item.clone()));
            remaining -= item.weight;
        }
        // A misfit in whole-item mode is skipped, not a stopping point.
    }

    let total_weight: f64 = selected.iter().map(|s| s.selected_weight).sum();
    let total_value: f64 = selected.iter().map(|s| s.selected_value).sum();

    SelectionResult {
        selected,
        total_weight,
        total_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_items() -> Vec<Item> {
        vec![
            Item::new(1, "Light".to_string(), 10.0, 60.0),
            Item::new(2, "Medium".to_string(), 20.0, 100.0),
            Item::new(3, "Heavy".to_string(), 30.0, 120.0),
        ]
    }

    #[test]
    fn test_whole_item_selection() {
        let result = select(&classic_items(), 50.0, false);

        // Ratios 6.0, 5.0, 4.0: first two fit, the third does not.
        assert_eq!(result.selected.len(), 2);
        assert!((result.total_weight - 30.0).abs() < 1e-9);
        assert!((result.total_value - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_selection() {
        let result = select(&classic_items(), 50.0, true);

        assert_eq!(result.selected.len(), 3);
        assert!((result.total_weight - 50.0).abs() < 1e-9);
        assert!((result.total_value - 240.0).abs() < 1e-9);

        let last = result.selected.last().unwrap();
        assert!((last.fraction - 2.0 / 3.0).abs() < 1e-9);
        assert!((last.selected_value - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_misfit_is_skipped_not_terminal() {
        let items = vec![
            Item::new(1, "Best".to_string(), 10.0, 100.0),
            Item::new(2, "Bulky".to_string(), 40.0, 200.0),
            Item::new(3, "Small".to_string(), 5.0, 20.0),
        ];

        let result = select(&items, 20.0, false);

        // Bulky does not fit after Best, but Small still does.
        let names: Vec<&str> = result.selected.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, vec!["Best", "Small"]);
        assert!((result.total_weight - 15.0).abs() < 1e-9);
        assert!((result.total_value - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_capacity() {
        for fractional in [false, true] {
            let result = select(&classic_items(), 0.0, fractional);
            assert!(result.is_empty());
            assert_eq!(result.total_weight, 0.0);
            assert_eq!(result.total_value, 0.0);

            let result = select(&classic_items(), -5.0, fractional);
            assert!(result.is_empty());
        }
    }

    #[test]
    fn test_infinite_capacity_admits_everything() {
        let result = select(&classic_items(), f64::INFINITY, false);
        assert_eq!(result.selected.len(), 3);
        assert!((result.total_weight - 60.0).abs() < 1e-9);
    }
}
