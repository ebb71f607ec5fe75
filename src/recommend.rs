//! Usage-reduction recommendations: capped-hours alternative schedule and
//! the resulting savings.

use std::fmt;

use crate::appliance::{Appliance, DAYS_PER_MONTH};
use crate::registry::ApplianceRegistry;

/// Suggested schedule for one appliance alongside its current one.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationEntry {
    pub name: String,
    pub current_hours: f32,
    pub suggested_hours: f32,
    pub current_kwh: f32,
    pub suggested_kwh: f32,
}

/// Per-appliance entries plus aggregate savings figures.
///
/// Entry order matches registry insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationReport {
    pub entries: Vec<RecommendationEntry>,
    pub total_current_kwh: f32,
    pub total_suggested_kwh: f32,
    pub savings_kwh: f32,
    pub savings_cost: f32,
}

impl fmt::Display for RecommendationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Usage Recommendations ---")?;
        writeln!(f, "Current usage:    {:.2} kWh/month", self.total_current_kwh)?;
        writeln!(
            f,
            "Suggested usage:  {:.2} kWh/month",
            self.total_suggested_kwh
        )?;
        write!(
            f,
            "Potential saving: {:.2} kWh/month ({:.2})",
            self.savings_kwh, self.savings_cost
        )
    }
}

/// Usage cap policy: non-exempt appliances may run at most
/// `cap_hours_per_day` under the suggested schedule.
#[derive(Debug, Clone)]
pub struct RecommendationPolicy {
    /// Daily hour cap applied to non-exempt appliances.
    pub cap_hours_per_day: f32,
    /// Appliance names exempt from the cap (always-on devices).
    ///
    /// Matching is by exact name: "Kulkas 120 Liter" does not match
    /// "Kulkas" and is therefore capped.
    always_on: Vec<String>,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            cap_hours_per_day: 4.0,
            always_on: vec!["Kulkas".to_string(), "Kamera Pengawas".to_string()],
        }
    }
}

impl RecommendationPolicy {
    pub fn new(cap_hours_per_day: f32, always_on: Vec<String>) -> Self {
        Self {
            cap_hours_per_day,
            always_on,
        }
    }

    /// Names exempt from the hour cap.
    pub fn always_on(&self) -> &[String] {
        &self.always_on
    }

    /// Suggested daily hours for one appliance under the cap policy.
    pub fn suggested_hours(&self, appliance: &Appliance) -> f32 {
        if self.always_on.iter().any(|n| n == &appliance.name) {
            appliance.hours_per_day
        } else {
            appliance.hours_per_day.min(self.cap_hours_per_day)
        }
    }

    /// Evaluates the alternative schedule for every registered appliance.
    ///
    /// `price_per_kwh` converts the kWh saving into a monetary saving; it is
    /// normally the tariff price of the active rate class.
    pub fn evaluate(
        &self,
        registry: &ApplianceRegistry,
        price_per_kwh: f32,
    ) -> RecommendationReport {
        let mut entries = Vec::with_capacity(registry.len());
        let mut total_current = 0.0_f32;
        let mut total_suggested = 0.0_f32;

        for a in registry.list() {
            let current_kwh = a.monthly_kwh();
            let suggested_hours = self.suggested_hours(a);
            let suggested_kwh = (a.total_watt / 1000.0) * suggested_hours * DAYS_PER_MONTH;

            total_current += current_kwh;
            total_suggested += suggested_kwh;

            entries.push(RecommendationEntry {
                name: a.name.clone(),
                current_hours: a.hours_per_day,
                suggested_hours,
                current_kwh,
                suggested_kwh,
            });
        }

        let savings_kwh = total_current - total_suggested;
        RecommendationReport {
            entries,
            total_current_kwh: total_current,
            total_suggested_kwh: total_suggested,
            savings_kwh,
            savings_cost: savings_kwh * price_per_kwh,
        }
    }
}
