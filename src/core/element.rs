//! Element model: gem kinds, the advantage cycle, and display metadata.

use serde::{Deserialize, Serialize};

use super::constants::{ADVANTAGE_COEFF, DISADVANTAGE_COEFF, NEUTRAL_COEFF};

/// A gem element. `Empty` marks a hole in the field and never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Wind,
    Earth,
    Life,
    Empty,
}

impl Element {
    /// The five matchable gems, in the order they are drawn for random fills.
    pub const GEMS: [Element; 5] = [
        Element::Fire,
        Element::Water,
        Element::Wind,
        Element::Earth,
        Element::Life,
    ];

    /// Whether this element can form a run.
    pub fn is_gem(self) -> bool {
        self != Element::Empty
    }

    /// The element this one is strong against, if it sits on the cycle.
    /// Fire -> Wind -> Earth -> Water -> Fire. Life and Empty are off-cycle.
    pub fn prey(self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Wind),
            Element::Wind => Some(Element::Earth),
            Element::Earth => Some(Element::Water),
            Element::Water => Some(Element::Fire),
            Element::Life | Element::Empty => None,
        }
    }

    /// ASCII symbol used by the presentation layer.
    pub fn symbol(self) -> char {
        match self {
            Element::Fire => '$',
            Element::Water => '~',
            Element::Wind => '@',
            Element::Earth => '#',
            Element::Life => '&',
            Element::Empty => ' ',
        }
    }

    /// Display color for the presentation layer.
    pub fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Element::Fire => (230, 70, 70),
            Element::Water => (70, 150, 230),
            Element::Wind => (90, 200, 120),
            Element::Earth => (200, 150, 80),
            Element::Life => (220, 90, 200),
            Element::Empty => (160, 160, 160),
        }
    }
}

/// Elemental damage coefficient for `attacker` hitting `defender`.
///
/// Returns 2.0 when the attacker beats the defender on the cycle, 0.5 when
/// the defender beats the attacker, and 1.0 otherwise. Life and Empty sit
/// off the cycle and always yield 1.0.
pub fn advantage_multiplier(attacker: Element, defender: Element) -> f64 {
    if attacker.prey() == Some(defender) {
        ADVANTAGE_COEFF
    } else if defender.prey() == Some(attacker) {
        DISADVANTAGE_COEFF
    } else {
        NEUTRAL_COEFF
    }
}
