// Synthetic hours data, one generation policy per range
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use shared::{DataPoint, Range};
use std::ops::RangeInclusive;

/// How a range is turned into points: how many, how they are labelled, which values they take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub count: usize,
    pub label_prefix: &'static str,
    pub hours: RangeInclusive<u32>,
}

impl GenerationPolicy {
    pub fn for_range(range: Range) -> Self {
        match range {
            Range::FifteenDays => Self {
                count: 15,
                label_prefix: "Day",
                hours: 1..=8,
            },
            Range::OneMonth => Self {
                count: 30,
                label_prefix: "Day",
                hours: 1..=8,
            },
            Range::SixMonths => Self {
                count: 6,
                label_prefix: "Mon",
                hours: 20..=69,
            },
            Range::OneYear => Self {
                count: 12,
                label_prefix: "Mon",
                hours: 50..=149,
            },
        }
    }

    pub fn label(&self, index: usize) -> String {
        format!("{} {}", self.label_prefix, index + 1)
    }
}

/// Produces the dataset shown for a range. Real data acquisition plugs in here.
pub trait DataSource {
    fn name(&self) -> &str;
    fn generate(&mut self, range: Range) -> Vec<DataPoint>;
}

pub fn generate_data<R: Rng>(range: Range, rng: &mut R) -> Vec<DataPoint> {
    let policy = GenerationPolicy::for_range(range);
    (0..policy.count)
        .map(|index| DataPoint::new(policy.label(index), rng.gen_range(policy.hours.clone())))
        .collect()
}

pub struct SyntheticSource<R: Rng> {
    rng: R,
}

impl SyntheticSource<ThreadRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl SyntheticSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> DataSource for SyntheticSource<R> {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn generate(&mut self, range: Range) -> Vec<DataPoint> {
        generate_data(range, &mut self.rng)
    }
}
