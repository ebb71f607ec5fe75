//! Appliance value type and validation.

use std::fmt;

/// Fixed billing month length in days. No calendar awareness.
pub const DAYS_PER_MONTH: f32 = 30.0;

/// Validation failure for an appliance entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplianceError {
    /// Name must be non-empty.
    EmptyName,
    /// `unit_count` must be >= 1.
    ZeroUnits,
    /// `watt_per_unit` must be > 0.
    NonPositiveWatt(f32),
    /// `hours_per_day` must be > 0 and <= 24.
    HoursOutOfRange(f32),
}

impl fmt::Display for ApplianceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "appliance name must not be empty"),
            Self::ZeroUnits => write!(f, "unit_count must be at least 1"),
            Self::NonPositiveWatt(w) => {
                write!(f, "watt_per_unit must be > 0, got {w}")
            }
            Self::HoursOutOfRange(h) => {
                write!(f, "hours_per_day must be in (0, 24], got {h}")
            }
        }
    }
}

impl std::error::Error for ApplianceError {}

/// One appliance entry in the household inventory.
///
/// Immutable once created; the registry is append-only. `total_watt` is
/// computed at construction time and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    /// Display name (e.g., `"TV 21 inci"`).
    pub name: String,
    /// Number of identical units.
    pub unit_count: u32,
    /// Rated power per unit (W).
    pub watt_per_unit: f32,
    /// Tariff rate class label (normally `"R-1"`, `"R-2"`, or `"R-3"`).
    ///
    /// Stored as entered; an unrecognized label resolves to the tariff
    /// table's fallback price at estimate time.
    pub rate_class: String,
    /// Daily usage duration (h).
    pub hours_per_day: f32,
    /// Combined rated power across units (W).
    pub total_watt: f32,
}

impl Appliance {
    /// Creates a validated appliance entry.
    ///
    /// # Errors
    ///
    /// Returns an [`ApplianceError`] if the name is empty, `unit_count` is
    /// zero, `watt_per_unit` is not positive, or `hours_per_day` is outside
    /// `(0, 24]`.
    pub fn new(
        name: impl Into<String>,
        unit_count: u32,
        watt_per_unit: f32,
        rate_class: impl Into<String>,
        hours_per_day: f32,
    ) -> Result<Self, ApplianceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ApplianceError::EmptyName);
        }
        if unit_count == 0 {
            return Err(ApplianceError::ZeroUnits);
        }
        if !(watt_per_unit > 0.0) {
            return Err(ApplianceError::NonPositiveWatt(watt_per_unit));
        }
        if !(hours_per_day > 0.0 && hours_per_day <= 24.0) {
            return Err(ApplianceError::HoursOutOfRange(hours_per_day));
        }

        let total_watt = watt_per_unit * unit_count as f32;
        Ok(Self {
            name,
            unit_count,
            watt_per_unit,
            rate_class: rate_class.into(),
            hours_per_day,
            total_watt,
        })
    }

    /// Monthly energy consumption in kWh over a fixed 30-day month.
    pub fn monthly_kwh(&self) -> f32 {
        (self.total_watt / 1000.0) * self.hours_per_day * DAYS_PER_MONTH
    }
}
