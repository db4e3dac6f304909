//! Monte-Carlo estimation of how often a state accepts a random integer.
//!
//! A [`Trial`] draws `count` integers uniformly from `[min, max]` and reports
//! the fraction accepted by a state. Every run re-seeds its own generator
//! from the configured seed, so:
//!
//! - repeated runs of the same trial return bit-identical frequencies;
//! - every state tested by the same trial sees the same draw sequence, which
//!   makes frequencies of different states directly comparable.
//!
//! The estimate converges toward [`exact_frequency`] as `count` grows. It is
//! a sampling estimator only: it never decides emptiness or equivalence.
//!
//! ```
//! use states_rs::prelude::*;
//!
//! let config = TrialConfig::default().with_range(0, 99).with_count(1000);
//! let half = Segment::new(0, 49);
//! let freq = evaluate(&half, &config).unwrap();
//! assert!((freq - 0.5).abs() < 0.05);
//! ```

use log::debug;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::interval;
use crate::state::State;

/// Parameters of a [`Trial`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TrialConfig {
    /// Seed of the pseudo-random generator
    pub seed: u64,
    /// Lower sampling bound (inclusive)
    pub min: i64,
    /// Upper sampling bound (inclusive)
    pub max: i64,
    /// Number of samples, must be positive
    pub count: u64,
}

impl TrialConfig {
    pub fn new(seed: u64, min: i64, max: i64, count: u64) -> Self {
        Self { seed, min, max, count }
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the inclusive sampling range.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the number of samples.
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    /// Checks that `count > 0` and `min <= max`.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::ZeroCount);
        }
        if self.min > self.max {
            return Err(Error::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::new(2021, 0, 100, 1000)
    }
}

/// A validated, immutable sampling experiment.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Trial {
    config: TrialConfig,
}

impl Trial {
    pub fn new(config: TrialConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// The draw sequence of this trial, identical for every call.
    pub fn samples(&self) -> impl Iterator<Item = i64> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let distribution = Uniform::new_inclusive(self.config.min, self.config.max);
        (0..self.config.count).map(move |_| distribution.sample(&mut rng))
    }

    /// Number of samples accepted by `state`.
    pub fn accepted<S>(&self, state: &S) -> u64
    where
        S: State + ?Sized,
    {
        self.samples().filter(|&x| state.contains(x)).count() as u64
    }

    /// Fraction of samples accepted by `state`, in `[0, 1]`.
    pub fn run<S>(&self, state: &S) -> f64
    where
        S: State + ?Sized,
    {
        let TrialConfig { seed, min, max, count } = self.config;
        debug!("trial(seed = {}, range = [{}, {}], count = {})", seed, min, max, count);

        let good = self.accepted(state);
        let freq = good as f64 / count as f64;
        debug!("trial: {} / {} accepted, freq = {}", good, count, freq);
        freq
    }
}

/// Validates `config` and runs a single trial against `state`.
pub fn evaluate<S>(state: &S, config: &TrialConfig) -> Result<f64>
where
    S: State + ?Sized,
{
    Ok(Trial::new(*config)?.run(state))
}

/// Runs one fresh trial per sample count, keeping the seed and range of `base`.
///
/// Every trial starts from the same seed, so the series shows how the
/// estimate for one draw sequence settles as more of it is consumed.
pub fn sweep<S, I>(state: &S, base: &TrialConfig, counts: I) -> Result<Vec<f64>>
where
    S: State + ?Sized,
    I: IntoIterator<Item = u64>,
{
    counts
        .into_iter()
        .map(|count| evaluate(state, &base.with_count(count)))
        .collect()
}

/// Widest window [`exact_frequency`] checks one integer at a time.
pub const SCAN_LIMIT: u64 = 1 << 24;

/// Exact fraction of integers in `[min, max]` accepted by `state`.
///
/// States answering [`State::segments_in`] (every state of this crate) are
/// counted in closed form over any window, including the whole `i64` range.
/// Other states are scanned, and windows of more than [`SCAN_LIMIT`]
/// integers are rejected with [`Error::WindowTooWide`].
pub fn exact_frequency<S>(state: &S, min: i64, max: i64) -> Result<f64>
where
    S: State + ?Sized,
{
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }
    let width = max.abs_diff(min);
    let good = match state.segments_in(min, max) {
        Some(runs) => interval::count(&runs),
        None if width < SCAN_LIMIT => state.count_in(min, max),
        None => {
            return Err(Error::WindowTooWide {
                min,
                max,
                limit: SCAN_LIMIT,
            })
        }
    };
    debug!("exact_frequency([{}, {}]): {} accepted", min, max, good);
    Ok(good as f64 / (width as f64 + 1.0))
}
