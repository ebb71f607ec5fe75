//! Residential tariff table with a fixed fallback price.

/// The rate class labels the tariff table prices explicitly.
pub const KNOWN_RATE_CLASSES: &[&str] = &["R-1", "R-2", "R-3"];

/// Immutable mapping from rate class to price per kWh.
///
/// Lookup never fails: an unrecognized class resolves to
/// `fallback_price_per_kwh`. The fallback is a deliberate pricing policy,
/// not an error path.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffTable {
    /// Price per kWh for class R-1.
    pub r1_price_per_kwh: f32,
    /// Price per kWh for class R-2.
    pub r2_price_per_kwh: f32,
    /// Price per kWh for class R-3.
    pub r3_price_per_kwh: f32,
    /// Price per kWh applied to any unrecognized class.
    pub fallback_price_per_kwh: f32,
}

impl Default for TariffTable {
    fn default() -> Self {
        Self {
            r1_price_per_kwh: 1444.0,
            r2_price_per_kwh: 1699.0,
            r3_price_per_kwh: 1699.0,
            fallback_price_per_kwh: 1500.0,
        }
    }
}

impl TariffTable {
    /// Returns the price per kWh for the given rate class.
    ///
    /// Unknown classes get the fallback price rather than an error.
    pub fn price_for(&self, rate_class: &str) -> f32 {
        match rate_class {
            "R-1" => self.r1_price_per_kwh,
            "R-2" => self.r2_price_per_kwh,
            "R-3" => self.r3_price_per_kwh,
            _ => self.fallback_price_per_kwh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_classes_priced() {
        let t = TariffTable::default();
        assert_eq!(t.price_for("R-1"), 1444.0);
        assert_eq!(t.price_for("R-2"), 1699.0);
        assert_eq!(t.price_for("R-3"), 1699.0);
    }

    #[test]
    fn unknown_class_gets_fallback() {
        let t = TariffTable::default();
        assert_eq!(t.price_for("B-2"), 1500.0);
        assert_eq!(t.price_for(""), 1500.0);
        // case-sensitive lookup
        assert_eq!(t.price_for("r-1"), 1500.0);
    }

    #[test]
    fn custom_prices_respected() {
        let t = TariffTable {
            r1_price_per_kwh: 100.0,
            fallback_price_per_kwh: 999.0,
            ..TariffTable::default()
        };
        assert_eq!(t.price_for("R-1"), 100.0);
        assert_eq!(t.price_for("X"), 999.0);
    }
}
