mod tracking;
mod types;
mod util;

pub use tracking::SkipTracker;
pub use types::{day_count, RoutineConfig, RoutineError};

use crate::model::{Schedule, Selection};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Générateur de routine : possède l'univers, le suivi des sauts et la source aléatoire.
#[derive(Debug)]
pub struct RoutineGenerator<R = StdRng> {
    config: RoutineConfig,
    universe: Vec<usize>,
    tracker: SkipTracker,
    rng: R,
}

impl RoutineGenerator<StdRng> {
    /// Générateur reproductible à partir d'une graine.
    pub fn seeded(config: RoutineConfig, seed: u64) -> Result<Self, RoutineError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: RoutineConfig) -> Result<Self, RoutineError> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> RoutineGenerator<R> {
    pub fn new(config: RoutineConfig, rng: R) -> Result<Self, RoutineError> {
        config.validate()?;
        Ok(Self {
            config,
            universe: (0..config.total_choices).collect(),
            tracker: SkipTracker::new(config.skip_threshold),
            rng,
        })
    }

    pub fn config(&self) -> &RoutineConfig {
        &self.config
    }

    pub fn universe(&self) -> &[usize] {
        &self.universe
    }

    pub fn prioritized(&self) -> &[usize] {
        self.tracker.prioritized()
    }

    pub fn skip_count(&self, index: usize) -> u32 {
        self.tracker.skip_count(index)
    }

    /// Oublie les sauts accumulés ; la source aléatoire n'est pas réinitialisée.
    pub fn reset(&mut self) {
        self.tracker.clear();
    }

    /// Génère `num_days` journées à partir d'un suivi vierge.
    pub fn generate(&mut self, num_days: usize) -> Schedule {
        self.reset();
        let mut schedule = Schedule::new(Vec::with_capacity(num_days));
        for _ in 0..num_days {
            let selection = self.next_day();
            schedule.push(selection);
        }
        schedule
    }

    /// Calcule la sélection d'une journée puis met à jour le suivi.
    pub fn next_day(&mut self) -> Selection {
        let per_day = self.config.selection_size();
        let prioritized = self.tracker.take_prioritized();

        let mut todays = util::random_subset(&prioritized, prioritized.len(), &mut self.rng);

        if todays.len() < per_day {
            let remaining = util::set_difference(&self.universe, &todays);
            let drawn = util::random_subset(&remaining, per_day - todays.len(), &mut self.rng);
            todays.extend(drawn);
        }
        todays.sort_unstable();

        self.tracker.record_day(&self.universe, &todays);

        #[cfg(feature = "logging")]
        tracing::debug!(
            selected = ?todays,
            forced = ?prioritized,
            next_prioritized = ?self.tracker.prioritized(),
            "day generated"
        );

        Selection::new(todays)
    }
}
