//! Household appliance energy monitor: inventory, monthly consumption,
//! cost estimation, and usage-reduction recommendations.

pub mod appliance;
pub mod config;
pub mod cost;
/// CSV export modules.
pub mod io;
pub mod monitor;
pub mod recommend;
pub mod registry;
pub mod report;
pub mod tariff;
pub mod usage;
