//! The 14-slot token field: run detection, collapse, refill, swaps.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::constants::{FIELD_SIZE, MIN_RUN_LENGTH};
use super::element::Element;

/// A maximal sequence of equal adjacent gems that qualifies for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub start: usize,
    pub length: usize,
}

/// Ordered row of exactly [`FIELD_SIZE`] elements.
///
/// Outside of the middle of a resolution step the field holds no `Empty`
/// slots: collapse punches holes, refill closes them before control returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    slots: [Element; FIELD_SIZE],
}

impl Field {
    /// Roll a fresh field of 14 uniformly random gems (never `Empty`).
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut slots = [Element::Empty; FIELD_SIZE];
        for slot in slots.iter_mut() {
            *slot = Element::GEMS[rng.gen_range(0..Element::GEMS.len())];
        }
        Self { slots }
    }

    /// Build a field from explicit slots (snapshot restore, tests).
    pub fn from_slots(slots: [Element; FIELD_SIZE]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Element; FIELD_SIZE] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<Element> {
        self.slots.get(index).copied()
    }

    /// True when no slot holds `Empty`.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|e| e.is_gem())
    }

    /// Exchange two slots. Callers validate indices; the engine only issues
    /// adjacent exchanges.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// Find the lowest-index qualifying run: a maximal sequence of equal
    /// adjacent elements with length >= 3 whose element is a matchable gem.
    ///
    /// Non-qualifying maximal runs (too short, or a stretch of `Empty`) are
    /// skipped over, so a qualifying run further right is still found.
    pub fn leftmost_run(&self) -> Option<Run> {
        let mut i = 0;
        while i < FIELD_SIZE {
            let mut j = i + 1;
            while j < FIELD_SIZE && self.slots[j] == self.slots[i] {
                j += 1;
            }
            let length = j - i;
            if length >= MIN_RUN_LENGTH && self.slots[i].is_gem() {
                return Some(Run { start: i, length });
            }
            i = j;
        }
        None
    }

    /// Remove `length` slots starting at `start`: the resolved gems vanish,
    /// everything to their right shifts left, and `length` `Empty` slots
    /// appear at the far right.
    pub fn collapse_left(&mut self, start: usize, length: usize) {
        let end = (start + length).min(FIELD_SIZE);
        for k in start..end {
            self.slots[k] = Element::Empty;
        }
        let mut compacted = [Element::Empty; FIELD_SIZE];
        let mut write = 0;
        for &e in self.slots.iter() {
            if e.is_gem() {
                compacted[write] = e;
                write += 1;
            }
        }
        self.slots = compacted;
    }

    /// Replace every `Empty` slot with an independently drawn random gem.
    pub fn fill_random(&mut self, rng: &mut impl Rng) {
        for slot in self.slots.iter_mut() {
            if !slot.is_gem() {
                *slot = Element::GEMS[rng.gen_range(0..Element::GEMS.len())];
            }
        }
    }
}
