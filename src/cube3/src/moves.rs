//! The 18 face-turn generators and move sequences.
//!
//! Each generator is stored as one `(source, delta)` pair per position: after
//! the turn, position `i` holds the piece previously at `source` with `delta`
//! added to its orientation. Only the six clockwise quarter turns are written
//! out; the other twelve are composed from them at compile time.

use crate::{
    state::{CubieState, Orbit},
    tables::Face,
};
use itertools::Itertools;
use std::{fmt, ops::Deref, str::FromStr};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise = 0,
    CounterClockwise = 1,
    Half = 2,
}

impl Turn {
    pub const ALL: [Self; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Half];

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }

    #[must_use]
    pub const fn modifier(self) -> char {
        match self {
            Turn::Clockwise => '_',
            Turn::CounterClockwise => '\'',
            Turn::Half => '2',
        }
    }

    #[must_use]
    pub const fn from_modifier(modifier: char) -> Option<Self> {
        match modifier {
            '_' => Some(Turn::Clockwise),
            '\'' => Some(Turn::CounterClockwise),
            '2' => Some(Turn::Half),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    /// Every generator in enumeration order: faces U D F B R L, each as
    /// clockwise, counterclockwise, then half turn.
    pub const ALL: [Self; 18] = {
        let mut v = [Move::new(Face::U, Turn::Clockwise); 18];

        let mut i = 0;
        while i < v.len() {
            v[i] = Move::new(Face::ALL[i / 3], Turn::ALL[i % 3]);
            assert!(v[i].index() == i);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }

    const fn index(self) -> usize {
        self.face.index() * 3 + self.turn as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.modifier())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Invalid face `{found}` at offset {offset}, expected one of U D F B R L")]
    InvalidFace { offset: usize, found: char },
    #[error("Invalid turn `{found}` at offset {offset}, expected one of _ ' 2")]
    InvalidTurn { offset: usize, found: char },
    #[error("The move on face {face} at offset {offset} is missing its turn")]
    MissingTurn { offset: usize, face: Face },
}

/// An ordered list of moves, applied left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, move_: Move) {
        self.0.push(move_);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }

    /// The sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().map(|move_| move_.inverse()).collect())
    }
}

impl Deref for MoveSequence {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(""))
    }
}

impl FromStr for MoveSequence {
    type Err = MoveParseError;

    /// Parse concatenated two character moves such as `"R_U'F2"`. Whitespace
    /// anywhere is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.char_indices().filter(|(_, c)| !c.is_whitespace());
        let mut moves = vec![];

        while let Some((offset, letter)) = chars.next() {
            let face = Face::from_letter(letter).ok_or(MoveParseError::InvalidFace {
                offset,
                found: letter,
            })?;
            let Some((offset, modifier)) = chars.next() else {
                return Err(MoveParseError::MissingTurn { offset, face });
            };
            let turn = Turn::from_modifier(modifier).ok_or(MoveParseError::InvalidTurn {
                offset,
                found: modifier,
            })?;
            moves.push(Move::new(face, turn));
        }

        Ok(Self(moves))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Transformation {
    corners: [(u8, u8); 8],
    edges: [(u8, u8); 12],
}

impl Transformation {
    /// `self` followed by `then`.
    const fn then(&self, then: &Self) -> Self {
        Self {
            corners: compose(
                &self.corners,
                &then.corners,
                Orbit::Corners.orientation_count(),
            ),
            edges: compose(&self.edges, &then.edges, Orbit::Edges.orientation_count()),
        }
    }
}

const fn compose<const N: usize>(
    first: &[(u8, u8); N],
    second: &[(u8, u8); N],
    orientation_count: u8,
) -> [(u8, u8); N] {
    let mut result = [(0, 0); N];
    let mut i = 0;
    while i < N {
        let (via, second_delta) = second[i];
        let (source, first_delta) = first[via as usize];
        result[i] = (source, (first_delta + second_delta) % orientation_count);
        i += 1;
    }
    result
}

#[allow(clippy::cast_possible_truncation)]
const fn cycle_quarter<const N: usize>(cycle: [usize; 4], deltas: [u8; 4]) -> [(u8, u8); N] {
    let mut result = [(0, 0); N];
    let mut i = 0;
    while i < N {
        result[i] = (i as u8, 0);
        i += 1;
    }
    // Each position in the cycle receives the piece from the one before it
    let mut k = 0;
    while k < 4 {
        result[cycle[k]] = (cycle[(k + 3) % 4] as u8, deltas[k]);
        k += 1;
    }
    result
}

/// Clockwise quarter turns in face order U D F B R L.
const QUARTER_TURNS: [Transformation; 6] = [
    // U: UBL <- UFL <- UFR <- UBR, edges UB <- UL <- UF <- UR
    Transformation {
        corners: cycle_quarter([0, 1, 2, 3], [0; 4]),
        edges: cycle_quarter([0, 1, 2, 3], [0; 4]),
    },
    // D
    Transformation {
        corners: cycle_quarter([4, 7, 6, 5], [0; 4]),
        edges: cycle_quarter([4, 7, 6, 5], [0; 4]),
    },
    // F
    Transformation {
        corners: cycle_quarter([2, 6, 7, 3], [1, 2, 1, 2]),
        edges: cycle_quarter([2, 10, 6, 11], [1; 4]),
    },
    // B
    Transformation {
        corners: cycle_quarter([0, 4, 5, 1], [1, 2, 1, 2]),
        edges: cycle_quarter([0, 8, 4, 9], [1; 4]),
    },
    // R
    Transformation {
        corners: cycle_quarter([1, 5, 6, 2], [1, 2, 1, 2]),
        edges: cycle_quarter([1, 9, 5, 10], [0; 4]),
    },
    // L
    Transformation {
        corners: cycle_quarter([0, 3, 7, 4], [2, 1, 2, 1]),
        edges: cycle_quarter([3, 11, 7, 8], [0; 4]),
    },
];

static TRANSFORMATIONS: [Transformation; 18] = {
    let mut v = [QUARTER_TURNS[0]; 18];

    let mut face = 0;
    while face < 6 {
        let quarter = &QUARTER_TURNS[face];
        let half = quarter.then(quarter);
        v[face * 3 + Turn::Clockwise as usize] = *quarter;
        v[face * 3 + Turn::CounterClockwise as usize] = half.then(quarter);
        v[face * 3 + Turn::Half as usize] = half;
        face += 1;
    }

    v
};

impl CubieState {
    pub fn apply_move(&mut self, move_: Move) {
        let transformation = &TRANSFORMATIONS[move_.index()];
        permute(
            &mut self.corner_permutation,
            &mut self.corner_orientation,
            &transformation.corners,
            Orbit::Corners.orientation_count(),
        );
        permute(
            &mut self.edge_permutation,
            &mut self.edge_orientation,
            &transformation.edges,
            Orbit::Edges.orientation_count(),
        );
    }

    pub fn apply_sequence(&mut self, sequence: &[Move]) {
        for &move_ in sequence {
            self.apply_move(move_);
        }
    }
}

fn permute<const N: usize>(
    permutation: &mut [u8; N],
    orientation: &mut [u8; N],
    transformation: &[(u8, u8); N],
    orientation_count: u8,
) {
    let previous_permutation = *permutation;
    let previous_orientation = *orientation;
    for (i, &(source, delta)) in transformation.iter().enumerate() {
        permutation[i] = previous_permutation[source as usize];
        orientation[i] = (previous_orientation[source as usize] + delta) % orientation_count;
    }
}
