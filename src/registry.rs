//! Insertion-ordered appliance inventory and consumption aggregation.

use crate::appliance::Appliance;

/// Per-appliance monthly consumption row.
///
/// Rows follow registry insertion order, which is meaningful for display
/// and report row ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceUsage {
    pub name: String,
    pub kwh: f32,
}

/// Ordered collection of appliances.
///
/// Entries are append-only; replacement would require removal plus re-add,
/// which is outside the current scope.
#[derive(Debug, Clone, Default)]
pub struct ApplianceRegistry {
    appliances: Vec<Appliance>,
}

impl ApplianceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated appliance, preserving insertion order.
    pub fn add(&mut self, appliance: Appliance) {
        self.appliances.push(appliance);
    }

    /// Read-only view of all appliances in insertion order.
    pub fn list(&self) -> &[Appliance] {
        &self.appliances
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }

    /// Total household consumption over a fixed 30-day month (kWh).
    pub fn total_monthly_kwh(&self) -> f32 {
        self.appliances.iter().map(Appliance::monthly_kwh).sum()
    }

    /// Monthly consumption per appliance, one row per entry in insertion
    /// order.
    pub fn per_appliance_monthly_kwh(&self) -> Vec<ApplianceUsage> {
        self.appliances
            .iter()
            .map(|a| ApplianceUsage {
                name: a.name.clone(),
                kwh: a.monthly_kwh(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv() -> Appliance {
        Appliance::new("TV", 1, 68.0, "R-1", 8.0).unwrap()
    }

    fn lamp() -> Appliance {
        Appliance::new("Lampu Bohlam", 3, 60.0, "R-1", 8.0).unwrap()
    }

    #[test]
    fn empty_registry_totals_zero() {
        let reg = ApplianceRegistry::new();
        assert_eq!(reg.total_monthly_kwh(), 0.0);
        assert!(reg.per_appliance_monthly_kwh().is_empty());
    }

    #[test]
    fn insertion_order_preserved() {
        let mut reg = ApplianceRegistry::new();
        reg.add(tv());
        reg.add(lamp());
        let names: Vec<&str> = reg.list().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["TV", "Lampu Bohlam"]);
    }

    #[test]
    fn total_equals_sum_of_per_appliance_rows() {
        let mut reg = ApplianceRegistry::new();
        reg.add(tv());
        reg.add(lamp());
        let rows = reg.per_appliance_monthly_kwh();
        let sum: f32 = rows.iter().map(|r| r.kwh).sum();
        assert!((reg.total_monthly_kwh() - sum).abs() < 1e-4);
    }

    #[test]
    fn tv_scenario_monthly_kwh() {
        let mut reg = ApplianceRegistry::new();
        reg.add(tv());
        assert!((reg.total_monthly_kwh() - 16.32).abs() < 1e-4);
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let mut reg = ApplianceRegistry::new();
        reg.add(tv());
        reg.add(lamp());
        let first = reg.total_monthly_kwh();
        let rows_first = reg.per_appliance_monthly_kwh();
        assert_eq!(first, reg.total_monthly_kwh());
        assert_eq!(rows_first, reg.per_appliance_monthly_kwh());
    }
}
