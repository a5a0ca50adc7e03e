//! Seeded generator for small random instances.
//!
//! Used by the property tests of the search crates, where instances must stay
//! small enough for exhaustive enumeration.  The same seed always yields the
//! same `Domain`.

use asar_core::{ClockTime, Profit};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Domain, DomainBuilder, ModelResult};

/// Upper bounds on instance size.  Every count is drawn uniformly from
/// `1..=max` (locations from `2..=max`).
#[derive(Clone, Debug)]
pub struct InstanceGenConfig {
    pub seed:          u64,
    pub max_locations: usize,
    pub max_classes:   usize,
    pub max_vehicles:  usize,
    pub max_legs:      usize,
    /// Probability that a leg is the reverse of the previous one, which
    /// makes closed round trips, and so feasible instances, more likely.
    pub return_bias:   f64,
}

impl Default for InstanceGenConfig {
    fn default() -> Self {
        Self {
            seed:          0,
            max_locations: 3,
            max_classes:   2,
            max_vehicles:  2,
            max_legs:      5,
            return_bias:   0.5,
        }
    }
}

pub struct InstanceGenerator {
    config: InstanceGenConfig,
    rng:    SmallRng,
}

impl From<InstanceGenConfig> for InstanceGenerator {
    fn from(config: InstanceGenConfig) -> Self {
        Self::new(config)
    }
}

impl InstanceGenerator {
    pub fn new(config: InstanceGenConfig) -> Self {
        let rng = SmallRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Draw the next instance.
    pub fn generate(&mut self) -> ModelResult<Domain> {
        let n_locations = self.rng.gen_range(2..=self.config.max_locations.max(2));
        let n_classes = self.rng.gen_range(1..=self.config.max_classes.max(1));
        let n_vehicles = self.rng.gen_range(1..=self.config.max_vehicles.max(1));
        let n_legs = self.rng.gen_range(1..=self.config.max_legs.max(1));

        let mut builder = DomainBuilder::new();

        for i in 0..n_locations {
            let opening = self.clock(5..=9);
            let closing = self.clock(15..=23);
            builder.add_location(&location_code(i), opening, closing);
        }
        for c in 0..n_classes {
            let turnaround = ClockTime::from_minutes(15 * self.rng.gen_range(0..=4));
            builder.add_class(&class_name(c), turnaround);
        }
        for v in 0..n_vehicles {
            let class = self.rng.gen_range(0..n_classes);
            builder.add_vehicle(&format!("V{v}"), &class_name(class));
        }

        let mut previous: Option<(usize, usize)> = None;
        for _ in 0..n_legs {
            let (dep, arr) = match previous {
                Some((d, a)) if self.rng.gen_bool(self.config.return_bias) => (a, d),
                _ => {
                    let dep = self.rng.gen_range(0..n_locations);
                    let arr = (dep + self.rng.gen_range(1..n_locations)) % n_locations;
                    (dep, arr)
                }
            };
            previous = Some((dep, arr));

            let duration = ClockTime::from_minutes(15 * self.rng.gen_range(2..=12));
            let mut profits = Vec::with_capacity(n_classes);
            let forced = self.rng.gen_range(0..n_classes);
            for c in 0..n_classes {
                if c == forced || self.rng.gen_bool(0.8) {
                    profits.push((class_name(c), Profit::whole(self.rng.gen_range(10..=200))));
                }
            }
            builder.add_leg(&location_code(dep), &location_code(arr), duration, profits);
        }

        builder.build()
    }

    /// A time on the hour or half hour within `hours`.
    fn clock(&mut self, hours: std::ops::RangeInclusive<u32>) -> ClockTime {
        let h = self.rng.gen_range(hours);
        let m = if self.rng.gen_bool(0.5) { 30 } else { 0 };
        ClockTime::from_minutes(h * 60 + m)
    }
}

fn location_code(i: usize) -> String {
    format!("L{i}")
}

fn class_name(i: usize) -> String {
    format!("c{i}")
}
