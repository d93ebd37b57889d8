use serde::{Deserialize, Serialize};

/// A candidate entry with a capacity cost and a value.
///
/// In the shopping framing `weight` is kilograms and `value` is dollars; in
/// the portfolio framing `weight` is cost per share and `value` is the
/// expected return. The selector only sees the numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Id")]
    pub id: u64,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Weight")]
    pub weight: f64,

    #[serde(rename = "Value")]
    pub value: f64,
}

impl Item {
    pub fn new(id: u64, name: String, weight: f64, value: f64) -> Self {
        Self {
            id,
            name,
            weight,
            value,
        }
    }

    /// Value per unit of weight; the greedy sort key.
    ///
    /// Derived on demand so it can never desynchronize from weight or value.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }

    /// Basic validation: positive finite weight and finite value.
    pub fn is_valid(&self) -> bool {
        self.weight > 0.0 && self.weight.is_finite() && self.value.is_finite()
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
