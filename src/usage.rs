//! Synthetic daily-usage sample series.
//!
//! The series is illustrative sample data for the dashboard's daily chart.
//! It is independent of the appliance inventory and is not derived from
//! registry consumption.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// One sampled day. Day numbering is 1-based and contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct UsagePoint {
    pub day: u32,
    pub kwh: f32,
}

/// Ordered daily-usage sample series with a one-shot initialization policy.
///
/// The first appliance addition triggers a bulk generation of `sample_days`
/// points from a seeded generator, so fresh initializations are reproducible.
/// Every later addition appends exactly one point from an unseeded draw,
/// representing a fresh "today" reading. Once any data exists the bulk
/// sample is never regenerated.
///
/// Both generation operations take any [`Rng`], so tests can substitute a
/// deterministic source; [`DailyUsageSeries::bulk_seeded_init`] and
/// [`DailyUsageSeries::append_unseeded`] are the production entry points.
#[derive(Debug, Clone)]
pub struct DailyUsageSeries {
    points: Vec<UsagePoint>,
    /// Number of points generated by the seeded bulk init.
    pub sample_days: u32,
    /// Half-open kWh range for the seeded bulk draw.
    pub init_range_kwh: (f32, f32),
    /// Half-open kWh range for the unseeded append draw.
    pub append_range_kwh: (f32, f32),
}

impl Default for DailyUsageSeries {
    fn default() -> Self {
        Self::new(30, (5.0, 15.0), (1.0, 5.0))
    }
}

impl DailyUsageSeries {
    /// Creates an empty series with the given generation parameters.
    pub fn new(sample_days: u32, init_range_kwh: (f32, f32), append_range_kwh: (f32, f32)) -> Self {
        Self {
            points: Vec::new(),
            sample_days,
            init_range_kwh,
            append_range_kwh,
        }
    }

    /// Points in day order (day 1 first).
    pub fn points(&self) -> &[UsagePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bulk-generates the initial sample using the supplied generator.
    ///
    /// No-op if the series already holds data.
    pub fn bulk_init_with(&mut self, rng: &mut impl Rng) {
        if !self.points.is_empty() {
            return;
        }
        let (lo, hi) = self.init_range_kwh;
        for day in 1..=self.sample_days {
            self.points.push(UsagePoint {
                day,
                kwh: rng.random_range(lo..hi),
            });
        }
    }

    /// Bulk-generates the initial sample from a fixed seed.
    ///
    /// Deterministic across runs for the same seed and parameters.
    pub fn bulk_seeded_init(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.bulk_init_with(&mut rng);
    }

    /// Appends one point for the next day using the supplied generator.
    ///
    /// No-op while the series is still empty; the bulk init must run first.
    pub fn append_with(&mut self, rng: &mut impl Rng) {
        if self.points.is_empty() {
            return;
        }
        let (lo, hi) = self.append_range_kwh;
        let day = self.points.len() as u32 + 1;
        self.points.push(UsagePoint {
            day,
            kwh: rng.random_range(lo..hi),
        });
    }

    /// Appends one point drawn from process-wide random state (no reseed).
    pub fn append_unseeded(&mut self) {
        let mut rng = rand::rng();
        self.append_with(&mut rng);
    }

    /// Extension hook invoked after each successful appliance addition:
    /// empty series → seeded bulk init, otherwise one unseeded append.
    pub fn record_appliance_added(&mut self, seed: u64) {
        if self.points.is_empty() {
            self.bulk_seeded_init(seed);
        } else {
            self.append_unseeded();
        }
    }
}
