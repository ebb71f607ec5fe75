//! TOML-based monitor configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::recommend::RecommendationPolicy;
use crate::tariff::TariffTable;
use crate::usage::DailyUsageSeries;

/// Top-level monitor configuration parsed from TOML.
///
/// All fields default to the baseline household scenario. Load from TOML
/// with [`MonitorConfig::from_toml_file`] or use [`MonitorConfig::baseline`]
/// for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Per-class tariff prices and the fallback price.
    pub tariff: TariffConfig,
    /// Daily-usage sample series generation parameters.
    pub usage_series: UsageSeriesConfig,
    /// Usage cap policy parameters.
    pub recommendation: RecommendationConfig,
    /// Monitor-wide settings.
    pub monitor: MonitorSection,
}

/// Per-class tariff prices (currency units per kWh).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    pub r1_price_per_kwh: f32,
    pub r2_price_per_kwh: f32,
    pub r3_price_per_kwh: f32,
    /// Applied to any rate class not in the table.
    pub fallback_price_per_kwh: f32,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            r1_price_per_kwh: 1444.0,
            r2_price_per_kwh: 1699.0,
            r3_price_per_kwh: 1699.0,
            fallback_price_per_kwh: 1500.0,
        }
    }
}

/// Daily-usage sample series generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsageSeriesConfig {
    /// Seed for the bulk sample draw.
    pub seed: u64,
    /// Number of days in the bulk sample.
    pub sample_days: u32,
    /// Bulk draw lower bound (inclusive, kWh).
    pub init_min_kwh: f32,
    /// Bulk draw upper bound (exclusive, kWh).
    pub init_max_kwh: f32,
    /// Append draw lower bound (inclusive, kWh).
    pub append_min_kwh: f32,
    /// Append draw upper bound (exclusive, kWh).
    pub append_max_kwh: f32,
}

impl Default for UsageSeriesConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sample_days: 30,
            init_min_kwh: 5.0,
            init_max_kwh: 15.0,
            append_min_kwh: 1.0,
            append_max_kwh: 5.0,
        }
    }
}

/// Usage cap policy parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecommendationConfig {
    /// Daily hour cap for non-exempt appliances.
    pub cap_hours_per_day: f32,
    /// Appliance names exempt from the cap (exact match).
    pub always_on: Vec<String>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            cap_hours_per_day: 4.0,
            always_on: vec!["Kulkas".to_string(), "Kamera Pengawas".to_string()],
        }
    }
}

/// Monitor-wide settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorSection {
    /// Initially selected rate class.
    ///
    /// Not validated against the tariff table: an unknown label resolves to
    /// the fallback price at estimate time.
    pub default_rate_class: String,
}

impl Default for MonitorSection {
    fn default() -> Self {
        Self {
            default_rate_class: "R-1".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"usage_series.sample_days"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl MonitorConfig {
    /// Returns the baseline configuration: default tariff, sample, and cap
    /// parameters.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let t = &self.tariff;
        for (field, price) in [
            ("tariff.r1_price_per_kwh", t.r1_price_per_kwh),
            ("tariff.r2_price_per_kwh", t.r2_price_per_kwh),
            ("tariff.r3_price_per_kwh", t.r3_price_per_kwh),
            ("tariff.fallback_price_per_kwh", t.fallback_price_per_kwh),
        ] {
            if price <= 0.0 {
                errors.push(ConfigError {
                    field: field.into(),
                    message: "must be > 0".into(),
                });
            }
        }

        let u = &self.usage_series;
        if u.sample_days == 0 {
            errors.push(ConfigError {
                field: "usage_series.sample_days".into(),
                message: "must be > 0".into(),
            });
        }
        if u.init_min_kwh >= u.init_max_kwh {
            errors.push(ConfigError {
                field: "usage_series.init_min_kwh".into(),
                message: "must be < usage_series.init_max_kwh".into(),
            });
        }
        if u.append_min_kwh >= u.append_max_kwh {
            errors.push(ConfigError {
                field: "usage_series.append_min_kwh".into(),
                message: "must be < usage_series.append_max_kwh".into(),
            });
        }

        if self.recommendation.cap_hours_per_day <= 0.0 {
            errors.push(ConfigError {
                field: "recommendation.cap_hours_per_day".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }

    /// Builds the tariff table from the `[tariff]` section.
    pub fn tariff_table(&self) -> TariffTable {
        TariffTable {
            r1_price_per_kwh: self.tariff.r1_price_per_kwh,
            r2_price_per_kwh: self.tariff.r2_price_per_kwh,
            r3_price_per_kwh: self.tariff.r3_price_per_kwh,
            fallback_price_per_kwh: self.tariff.fallback_price_per_kwh,
        }
    }

    /// Builds an empty usage series from the `[usage_series]` section.
    pub fn usage_series(&self) -> DailyUsageSeries {
        let u = &self.usage_series;
        DailyUsageSeries::new(
            u.sample_days,
            (u.init_min_kwh, u.init_max_kwh),
            (u.append_min_kwh, u.append_max_kwh),
        )
    }

    /// Builds the cap policy from the `[recommendation]` section.
    pub fn recommendation_policy(&self) -> RecommendationPolicy {
        RecommendationPolicy::new(
            self.recommendation.cap_hours_per_day,
            self.recommendation.always_on.clone(),
        )
    }
}
