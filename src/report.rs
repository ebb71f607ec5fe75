//! Human-readable monthly summary for the dashboard's headline metrics.

use std::fmt;

use crate::appliance::DAYS_PER_MONTH;
use crate::monitor::EnergyMonitor;

/// Headline figures derived from a monitor snapshot.
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    /// Number of registered appliances.
    pub appliance_count: usize,
    /// Total consumption over the fixed 30-day month (kWh).
    pub total_kwh: f32,
    /// Average daily consumption (total / 30, kWh).
    pub avg_daily_kwh: f32,
    /// Estimated monthly cost at the active tariff.
    pub estimated_cost: f32,
    /// Active rate class label.
    pub rate_class: String,
}

impl MonthlySummary {
    /// Computes the summary from the monitor's current state.
    pub fn from_monitor(monitor: &EnergyMonitor) -> Self {
        let total_kwh = monitor.total_monthly_kwh();
        Self {
            appliance_count: monitor.appliances().len(),
            total_kwh,
            avg_daily_kwh: total_kwh / DAYS_PER_MONTH,
            estimated_cost: monitor.estimate_monthly_cost(),
            rate_class: monitor.active_rate_class().to_string(),
        }
    }
}

impl fmt::Display for MonthlySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Monthly Summary ---")?;
        writeln!(f, "Appliances:       {}", self.appliance_count)?;
        writeln!(f, "Total usage:      {:.2} kWh/month", self.total_kwh)?;
        writeln!(f, "Average per day:  {:.2} kWh", self.avg_daily_kwh)?;
        write!(
            f,
            "Estimated cost:   {:.2} ({})",
            self.estimated_cost, self.rate_class
        )
    }
}
