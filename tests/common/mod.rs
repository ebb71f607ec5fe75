//! Shared test fixtures for integration tests.

use home_energy_monitor::config::MonitorConfig;
use home_energy_monitor::monitor::EnergyMonitor;

/// Baseline configuration (default tariff, seed 42, 30-day sample).
pub fn baseline_config() -> MonitorConfig {
    MonitorConfig::baseline()
}

/// Monitor seeded with the default appliance set.
pub fn default_monitor() -> EnergyMonitor {
    EnergyMonitor::with_defaults(&baseline_config()).expect("default appliances must validate")
}

/// Empty monitor holding a single TV entry (68 W, 8 h/day, R-1).
pub fn monitor_with_tv() -> EnergyMonitor {
    let mut m = EnergyMonitor::new(&baseline_config());
    m.add_appliance("TV", 1, 68.0, "R-1", 8.0)
        .expect("TV entry must validate");
    m
}
