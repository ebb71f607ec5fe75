//! Monitor facade tying the registry, usage series, tariff, and policy
//! together behind the interface the dashboard consumes.
//!
//! One monitor instance corresponds to one UI session. The instance is
//! owned and passed explicitly by the calling layer; single-writer,
//! single-reader-at-a-time usage is assumed.

use crate::appliance::{Appliance, ApplianceError};
use crate::config::MonitorConfig;
use crate::cost::CostEstimator;
use crate::recommend::{RecommendationPolicy, RecommendationReport};
use crate::registry::{ApplianceRegistry, ApplianceUsage};
use crate::tariff::TariffTable;
use crate::usage::{DailyUsageSeries, UsagePoint};

/// The household appliance set a fresh dashboard session is seeded with:
/// `(name, unit_count, watt_per_unit, rate_class, hours_per_day)`.
pub const DEFAULT_APPLIANCES: &[(&str, u32, f32, &str, f32)] = &[
    ("TV 21 inci", 1, 68.0, "R-1", 8.0),
    ("Audio", 1, 50.0, "R-1", 14.0),
    ("AC", 1, 430.0, "R-1", 8.0),
    ("Komputer", 1, 140.0, "R-1", 5.0),
    ("Game Player", 1, 20.0, "R-1", 5.0),
    ("Lampu Bohlam", 3, 60.0, "R-1", 8.0),
    ("Lampu Hemat Listrik", 5, 12.0, "R-1", 8.0),
    ("Kipas Angin", 1, 103.0, "R-1", 8.0),
    ("Microwave", 1, 1270.0, "R-1", 1.0),
    ("Blender", 1, 130.0, "R-1", 1.2),
    ("Kompor Listrik", 1, 380.0, "R-1", 4.0),
    ("Magic jar", 1, 465.0, "R-1", 9.0),
    ("Kulkas 120 Liter", 1, 62.0, "R-1", 24.0),
    ("Setrika", 1, 300.0, "R-1", 1.0),
    ("Dispenser", 1, 256.0, "R-1", 24.0),
    ("Pemanggang Roti", 1, 380.0, "R-1", 1.0),
    ("Mesin Cuci", 1, 550.0, "R-1", 4.0),
    ("Pemanas Air", 1, 400.0, "R-1", 2.0),
    ("Pompa Air", 1, 650.0, "R-1", 3.0),
];

/// In-memory household energy monitor.
#[derive(Debug, Clone)]
pub struct EnergyMonitor {
    registry: ApplianceRegistry,
    series: DailyUsageSeries,
    tariff: TariffTable,
    estimator: CostEstimator,
    policy: RecommendationPolicy,
    seed: u64,
}

impl Default for EnergyMonitor {
    fn default() -> Self {
        Self::new(&MonitorConfig::baseline())
    }
}

impl EnergyMonitor {
    /// Creates an empty monitor from a configuration.
    pub fn new(config: &MonitorConfig) -> Self {
        let mut estimator = CostEstimator::new();
        estimator.select_rate_class(config.monitor.default_rate_class.clone());
        Self {
            registry: ApplianceRegistry::new(),
            series: config.usage_series(),
            tariff: config.tariff_table(),
            estimator,
            policy: config.recommendation_policy(),
            seed: config.usage_series.seed,
        }
    }

    /// Creates a monitor seeded with [`DEFAULT_APPLIANCES`].
    ///
    /// # Errors
    ///
    /// Returns an [`ApplianceError`] if any default entry fails validation.
    pub fn with_defaults(config: &MonitorConfig) -> Result<Self, ApplianceError> {
        let mut monitor = Self::new(config);
        monitor.seed_default_appliances()?;
        Ok(monitor)
    }

    /// Adds every entry of [`DEFAULT_APPLIANCES`] through the normal
    /// insertion path, extending the usage series per entry.
    pub fn seed_default_appliances(&mut self) -> Result<(), ApplianceError> {
        for &(name, units, watt, class, hours) in DEFAULT_APPLIANCES {
            self.add_appliance(name, units, watt, class, hours)?;
        }
        Ok(())
    }

    /// Validates and appends one appliance.
    ///
    /// On success the usage series is extended: a bulk seeded sample if the
    /// series was empty, one fresh unseeded point otherwise. A rejected
    /// appliance leaves both the registry and the series untouched.
    ///
    /// # Errors
    ///
    /// Returns an [`ApplianceError`] for an empty name, zero units,
    /// non-positive wattage, or hours outside `(0, 24]`.
    pub fn add_appliance(
        &mut self,
        name: impl Into<String>,
        unit_count: u32,
        watt_per_unit: f32,
        rate_class: impl Into<String>,
        hours_per_day: f32,
    ) -> Result<(), ApplianceError> {
        let appliance = Appliance::new(name, unit_count, watt_per_unit, rate_class, hours_per_day)?;
        self.registry.add(appliance);
        self.series.record_appliance_added(self.seed);
        Ok(())
    }

    /// Sets the active rate class for cost estimation.
    ///
    /// An unknown class is stored as-is and priced at the fallback.
    pub fn select_rate_class(&mut self, rate_class: impl Into<String>) {
        self.estimator.select_rate_class(rate_class);
    }

    /// The currently selected rate class label.
    pub fn active_rate_class(&self) -> &str {
        self.estimator.active_class()
    }

    /// Price per kWh for the active rate class (fallback if unknown).
    pub fn active_price_per_kwh(&self) -> f32 {
        self.tariff.price_for(self.estimator.active_class())
    }

    /// Appliances in insertion order.
    pub fn appliances(&self) -> &[Appliance] {
        self.registry.list()
    }

    /// Total household consumption over a fixed 30-day month (kWh).
    pub fn total_monthly_kwh(&self) -> f32 {
        self.registry.total_monthly_kwh()
    }

    /// Monthly consumption per appliance in insertion order.
    pub fn per_appliance_monthly_kwh(&self) -> Vec<ApplianceUsage> {
        self.registry.per_appliance_monthly_kwh()
    }

    /// Estimated monthly cost at the active tariff.
    pub fn estimate_monthly_cost(&self) -> f32 {
        self.estimator.estimate_monthly_cost(&self.registry, &self.tariff)
    }

    /// The synthetic daily-usage sample series, day 1 first.
    pub fn daily_usage_series(&self) -> &[UsagePoint] {
        self.series.points()
    }

    /// Capped-usage alternative schedule and savings at the active tariff.
    pub fn recommendations(&self) -> RecommendationReport {
        self.policy
            .evaluate(&self.registry, self.active_price_per_kwh())
    }

    /// The tariff table in effect.
    pub fn tariff(&self) -> &TariffTable {
        &self.tariff
    }
}
