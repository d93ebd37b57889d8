/// Display mapping for one optimizer framing.
///
/// The selection algorithm is shared between framings; only the vocabulary,
/// the capacity default, and two behavior flags differ.
#[derive(Debug, Clone)]
pub struct ModeLabels {
    pub title: &'static str,

    /// What one entry is called ("item" or "stock").
    pub noun: &'static str,

    pub weight_label: &'static str,
    pub value_label: &'static str,
    pub total_weight_label: &'static str,
    pub total_value_label: &'static str,
    pub capacity_prompt: &'static str,
    pub capacity_default: f64,

    /// Portfolio selections are always fractional; shopping asks.
    pub always_fractional: bool,

    /// Show return-on-investment in the summary.
    pub show_roi: bool,

    weight_is_currency: bool,
}

impl ModeLabels {
    pub fn shopping() -> Self {
        Self {
            title: "Shopping Optimizer",
            noun: "item",
            weight_label: "Weight (kg)",
            value_label: "Value ($)",
            total_weight_label: "Total weight",
            total_value_label: "Total value",
            capacity_prompt: "Bag capacity (kg)",
            capacity_default: 50.0,
            always_fractional: false,
            show_roi: false,
            weight_is_currency: false,
        }
    }

    pub fn portfolio() -> Self {
        Self {
            title: "Portfolio Optimizer",
            noun: "stock",
            weight_label: "Cost per share ($)",
            value_label: "Expected return ($)",
            total_weight_label: "Total investment",
            total_value_label: "Expected return",
            capacity_prompt: "Budget ($)",
            capacity_default: 10000.0,
            always_fractional: true,
            show_roi: true,
            weight_is_currency: true,
        }
    }

    /// Format a weight/cost amount in this framing's unit.
    pub fn fmt_weight(&self, amount: f64) -> String {
        if self.weight_is_currency {
            format!("${:.2}", amount)
        } else {
            format!("{:.2} kg", amount)
        }
    }

    /// Values are dollars in both framings.
    pub fn fmt_value(&self, amount: f64) -> String {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing_defaults() {
        let shopping = ModeLabels::shopping();
        assert_eq!(shopping.capacity_default, 50.0);
        assert!(!shopping.always_fractional);
        assert!(!shopping.show_roi);

        let portfolio = ModeLabels::portfolio();
        assert_eq!(portfolio.capacity_default, 10000.0);
        assert!(portfolio.always_fractional);
        assert!(portfolio.show_roi);
    }

    #[test]
    fn test_weight_formatting() {
        assert_eq!(ModeLabels::shopping().fmt_weight(12.5), "12.50 kg");
        assert_eq!(ModeLabels::portfolio().fmt_weight(12.5), "$12.50");
    }
}
