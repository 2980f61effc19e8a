use super::util;
use std::collections::BTreeMap;

/// Suivi des indices sautés d'un jour sur l'autre.
///
/// Un indice retenu est purgé du compteur ; un indice sauté voit son
/// compteur incrémenté. Quand le compteur atteint exactement le seuil,
/// l'indice passe dans l'ensemble prioritaire du lendemain et repart de zéro.
#[derive(Debug, Clone)]
pub struct SkipTracker {
    threshold: u32,
    skip_counts: BTreeMap<usize, u32>,
    prioritized: Vec<usize>,
}

impl SkipTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            skip_counts: BTreeMap::new(),
            prioritized: Vec::new(),
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Indices imposés pour le prochain jour (ordre croissant).
    pub fn prioritized(&self) -> &[usize] {
        &self.prioritized
    }

    pub fn skip_count(&self, index: usize) -> u32 {
        self.skip_counts.get(&index).copied().unwrap_or(0)
    }

    /// Vide l'ensemble prioritaire et le rend à l'appelant.
    pub fn take_prioritized(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.prioritized)
    }

    /// Enregistre la sélection du jour et prépare la journée suivante.
    pub fn record_day(&mut self, universe: &[usize], selected: &[usize]) {
        for index in selected {
            self.skip_counts.remove(index);
        }
        for index in util::set_difference(universe, selected) {
            *self.skip_counts.entry(index).or_insert(0) += 1;
        }

        self.prioritized.clear();
        for &index in universe {
            let count = self.skip_count(index);
            debug_assert!(count <= self.threshold, "skip count overshot threshold");
            if count == self.threshold {
                self.prioritized.push(index);
                self.skip_counts.remove(&index);
            }
        }
    }

    pub fn clear(&mut self) {
        self.skip_counts.clear();
        self.prioritized.clear();
    }
}
