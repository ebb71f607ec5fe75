//! Monthly cost estimation from aggregate consumption and the active tariff.

use crate::registry::ApplianceRegistry;
use crate::tariff::TariffTable;

/// Holds the currently selected rate class and prices the registry total.
///
/// Selection is not validated against the tariff table: an unknown class is
/// stored as-is and resolves to the fallback price lazily at estimate time.
#[derive(Debug, Clone)]
pub struct CostEstimator {
    active_class: String,
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self {
            active_class: "R-1".to_string(),
        }
    }
}

impl CostEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active rate class without membership validation.
    pub fn select_rate_class(&mut self, rate_class: impl Into<String>) {
        self.active_class = rate_class.into();
    }

    /// The currently selected rate class label.
    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    /// Estimated monthly cost: total monthly kWh times the active price.
    pub fn estimate_monthly_cost(
        &self,
        registry: &ApplianceRegistry,
        tariff: &TariffTable,
    ) -> f32 {
        registry.total_monthly_kwh() * tariff.price_for(&self.active_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appliance::Appliance;

    fn registry_with_tv() -> ApplianceRegistry {
        let mut reg = ApplianceRegistry::new();
        reg.add(Appliance::new("TV", 1, 68.0, "R-1", 8.0).unwrap());
        reg
    }

    #[test]
    fn default_class_is_r1() {
        assert_eq!(CostEstimator::new().active_class(), "R-1");
    }

    #[test]
    fn tv_scenario_cost_at_r1() {
        let est = CostEstimator::new();
        let cost = est.estimate_monthly_cost(&registry_with_tv(), &TariffTable::default());
        // 16.32 kWh * 1444 = 23566.08
        assert!((cost - 23566.08).abs() < 1e-2);
    }

    #[test]
    fn empty_registry_costs_nothing() {
        let est = CostEstimator::new();
        let cost = est.estimate_monthly_cost(&ApplianceRegistry::new(), &TariffTable::default());
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn unknown_class_uses_fallback_price() {
        let mut est = CostEstimator::new();
        est.select_rate_class("B-2");
        assert_eq!(est.active_class(), "B-2");
        let cost = est.estimate_monthly_cost(&registry_with_tv(), &TariffTable::default());
        assert!((cost - 16.32 * 1500.0).abs() < 1e-2);
    }

    #[test]
    fn reselecting_known_class_changes_price() {
        let mut est = CostEstimator::new();
        est.select_rate_class("R-2");
        let cost = est.estimate_monthly_cost(&registry_with_tv(), &TariffTable::default());
        assert!((cost - 16.32 * 1699.0).abs() < 1e-2);
    }
}
