// SPDX-License-Identifier: MPL-2.0
//! Synthetic notification source.
//!
//! Stands in for a live alert backend: on each tick it decides, with a
//! configured probability, whether to emit one alert drawn uniformly from
//! a candidate list.

use super::notification::{Category, Priority};
use crate::domain::feed::Probability;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One alert the generator may emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub message: String,
    pub category: Category,
    pub priority: Priority,
}

impl Candidate {
    pub fn new(message: impl Into<String>, category: Category, priority: Priority) -> Self {
        Self {
            message: message.into(),
            category,
            priority,
        }
    }
}

/// The portal's stock list of simulated alerts.
#[must_use]
pub fn default_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(
            "Queue surge detected at Ambaji Temple",
            Category::Queue,
            Priority::Medium,
        ),
        Candidate::new(
            "Traffic cleared on Highway 51",
            Category::Traffic,
            Priority::Low,
        ),
        Candidate::new(
            "New shuttle service available",
            Category::General,
            Priority::Low,
        ),
        Candidate::new(
            "Weather alert: Light rain expected",
            Category::General,
            Priority::Medium,
        ),
    ]
}

/// Randomness consumed by the generator.
pub trait RandomSource: Send + fmt::Debug {
    /// Uniform sample in `[0, 1)`.
    fn sample(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

/// `RandomSource` backed by a `StdRng`.
#[derive(Debug)]
pub struct StdRandom(StdRng);

impl StdRandom {
    /// Seeds from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible sequence for tests and demos.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRandom {
    fn sample(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Decides per tick whether and what to emit.
#[derive(Debug)]
pub struct SyntheticSource {
    probability: Probability,
    candidates: Vec<Candidate>,
    random: Box<dyn RandomSource>,
}

impl SyntheticSource {
    pub fn new(
        probability: Probability,
        candidates: Vec<Candidate>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            probability,
            candidates,
            random,
        }
    }

    #[must_use]
    pub fn probability(&self) -> Probability {
        self.probability
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Runs one tick. Returns the candidate to add, if the tick fires.
    ///
    /// An empty candidate list never fires.
    pub fn tick(&mut self) -> Option<&Candidate> {
        if self.candidates.is_empty() || !self.probability.admits(self.random.sample()) {
            return None;
        }
        let index = self.random.index(self.candidates.len());
        self.candidates.get(index)
    }
}
