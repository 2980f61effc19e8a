#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sélection d'une journée : indices distincts, triés par ordre croissant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Selection(Vec<usize>);

impl Selection {
    /// Trie et dédoublonne les indices fournis.
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

/// Planning complet, une sélection par jour dans l'ordre des jours.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    days: Vec<Selection>,
}

impl Schedule {
    pub fn new(days: Vec<Selection>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[Selection] {
        &self.days
    }

    pub fn day(&self, day: usize) -> Option<&Selection> {
        self.days.get(day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn push(&mut self, selection: Selection) {
        self.days.push(selection);
    }

    /// Nombre de jours où chaque indice de l'univers a été retenu.
    pub fn selection_counts(&self, universe: &[usize]) -> SelectionCounts {
        let mut counts: BTreeMap<usize, usize> = universe.iter().map(|&i| (i, 0)).collect();
        for selection in &self.days {
            for index in selection.iter() {
                *counts.entry(index).or_insert(0) += 1;
            }
        }
        SelectionCounts(counts)
    }
}

/// Compteurs de sélection par indice (ordre croissant des indices).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SelectionCounts(BTreeMap<usize, usize>);

impl SelectionCounts {
    pub fn get(&self, index: usize) -> usize {
        self.0.get(&index).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&i, &c)| (i, c))
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}
