use thiserror::Error;

/// Paramètres de rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineConfig {
    /// Taille de l'univers (indices `0..total_choices`).
    pub total_choices: usize,
    pub choices_per_day: usize,
    /// Nombre de jours sautés d'affilée qui déclenche la priorité.
    pub skip_threshold: u32,
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            total_choices: 7,
            choices_per_day: 4,
            skip_threshold: 2,
        }
    }
}

impl RoutineConfig {
    /// Nombre d'indices retenus chaque jour : `min(M, K)`.
    pub fn selection_size(&self) -> usize {
        self.choices_per_day.min(self.total_choices)
    }

    /// Rejette les configurations incohérentes avant toute génération.
    ///
    /// Au plus `K - min(M, K)` indices sont sautés un jour donné ; ce sont
    /// les seuls qui peuvent devenir prioritaires le lendemain. Avec
    /// `K <= 2·M` l'ensemble prioritaire tient donc toujours dans une journée.
    pub fn validate(&self) -> Result<(), RoutineError> {
        if self.total_choices == 0 {
            return Err(RoutineError::InvalidConfig("total_choices must be > 0"));
        }
        if self.choices_per_day == 0 {
            return Err(RoutineError::InvalidConfig("choices_per_day must be > 0"));
        }
        if self.skip_threshold == 0 {
            return Err(RoutineError::InvalidConfig("skip_threshold must be > 0"));
        }
        let per_day = self.selection_size();
        if self.total_choices - per_day > per_day {
            return Err(RoutineError::PriorityOverflow {
                total: self.total_choices,
                per_day,
            });
        }
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RoutineError {
    #[error("invalid routine config: {0}")]
    InvalidConfig(&'static str),
    #[error("{total} choices cannot rotate through {per_day} slots per day without overflowing the priority set")]
    PriorityOverflow { total: usize, per_day: usize },
    #[error("invalid day count: {0} (must be >= 0)")]
    InvalidDayCount(i64),
}

/// Convertit un nombre de jours saisi par l'utilisateur.
pub fn day_count(n: i64) -> Result<usize, RoutineError> {
    usize::try_from(n).map_err(|_| RoutineError::InvalidDayCount(n))
}
