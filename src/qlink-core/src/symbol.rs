// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! QPSK symbol mapping and hard-decision tables.

use std::cmp::Ordering;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// A single bit, always 0 or 1 once past the inbound boundary.
pub type Bit = u8;

/// Carrier phase per bit pair, indexed by [`BitPair::index`].
pub const PHASE_TABLE: [f64; 4] = [
    PI / 4.0,       // 00 -> 45°
    3.0 * PI / 4.0, // 01 -> 135°
    5.0 * PI / 4.0, // 10 -> 225°
    7.0 * PI / 4.0, // 11 -> 315°
];

/// The two bits carried by one symbol, first bit most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPair(Bit, Bit);

impl BitPair {
    pub const ALL: [BitPair; 4] = [
        BitPair(0, 0),
        BitPair(0, 1),
        BitPair(1, 0),
        BitPair(1, 1),
    ];

    /// Returns `None` unless both values are 0 or 1.
    pub fn new(first: Bit, second: Bit) -> Option<Self> {
        (first <= 1 && second <= 1).then_some(Self(first, second))
    }

    pub fn bits(self) -> [Bit; 2] {
        [self.0, self.1]
    }

    pub fn index(self) -> usize {
        (usize::from(self.0) << 1) | usize::from(self.1)
    }

    pub fn phase(self) -> f64 {
        PHASE_TABLE[self.index()]
    }
}

/// Quadrant of an (I, Q) correlation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// Strict sign classification. Any zero (or NaN) component is a
    /// boundary case and yields `None`.
    pub fn classify(i: f64, q: f64) -> Option<Self> {
        use Ordering::{Greater, Less};
        match (i.partial_cmp(&0.0)?, q.partial_cmp(&0.0)?) {
            (Greater, Greater) => Some(Quadrant::First),
            (Less, Greater) => Some(Quadrant::Second),
            (Less, Less) => Some(Quadrant::Third),
            (Greater, Less) => Some(Quadrant::Fourth),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        match self {
            Quadrant::First => 0,
            Quadrant::Second => 1,
            Quadrant::Third => 2,
            Quadrant::Fourth => 3,
        }
    }
}

/// Hard-decision lookup: quadrant -> bit pair, plus one outcome shared by
/// every boundary case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionTable {
    quadrants: [BitPair; 4],
    boundary: BitPair,
}

impl DecisionTable {
    /// Exact inverse of [`PHASE_TABLE`]. Boundary cases collapse into the
    /// fourth-quadrant outcome.
    pub const INVERSE: DecisionTable = DecisionTable {
        quadrants: [BitPair(0, 0), BitPair(0, 1), BitPair(1, 0), BitPair(1, 1)],
        boundary: BitPair(1, 1),
    };

    /// The historical table: third quadrant -> 11, fourth quadrant and all
    /// boundary cases -> 10. Swaps 10 and 11 against [`PHASE_TABLE`].
    pub const LEGACY: DecisionTable = DecisionTable {
        quadrants: [BitPair(0, 0), BitPair(0, 1), BitPair(1, 1), BitPair(1, 0)],
        boundary: BitPair(1, 0),
    };

    pub fn decide(&self, i: f64, q: f64) -> BitPair {
        match Quadrant::classify(i, q) {
            Some(quadrant) => self.quadrants[quadrant.slot()],
            None => self.boundary,
        }
    }

    /// True when every bit pair, placed at its table phase, decides back to
    /// itself.
    pub fn inverts_phase_table(&self) -> bool {
        BitPair::ALL.iter().all(|&pair| {
            let phase = pair.phase();
            self.decide(phase.cos(), phase.sin()) == pair
        })
    }
}

/// Configurable selection of the decision table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionRule {
    #[default]
    Inverse,
    Legacy,
}

impl DecisionRule {
    pub fn table(self) -> DecisionTable {
        match self {
            DecisionRule::Inverse => DecisionTable::INVERSE,
            DecisionRule::Legacy => DecisionTable::LEGACY,
        }
    }
}
