use crate::{
    invariants::is_permutation,
    moves::{MoveParseError, MoveSequence},
    notation::{self, ConversionError},
    solver::Solver,
    tables::{COLOR_COUNT, Face, Facelet},
};
use itertools::Itertools;
use log::{debug, trace};
use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};
use thiserror::Error;

/// An orbit of pieces that can only ever be permuted among themselves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orbit {
    /// The eight corner pieces, three orientations each.
    Corners,
    /// The twelve edge pieces, two orientations each.
    Edges,
}

impl Orbit {
    #[must_use]
    pub const fn orientation_count(self) -> u8 {
        match self {
            Orbit::Corners => 3,
            Orbit::Edges => 2,
        }
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orbit::Corners => write!(f, "corner"),
            Orbit::Edges => write!(f, "edge"),
        }
    }
}

/// The canonical representation of a cube: which piece sits in every
/// position, and how it is twisted or flipped there.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubieState {
    pub(crate) corner_permutation: [u8; 8],
    pub(crate) corner_orientation: [u8; 8],
    pub(crate) edge_permutation: [u8; 12],
    pub(crate) edge_orientation: [u8; 12],
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CubieStateError {
    #[error("The {orbit} permutation is not a bijection on its positions")]
    NotAPermutation { orbit: Orbit },
    #[error(
        "The {orbit} at position {position} has orientation {value}, expected a value below {}",
        .orbit.orientation_count()
    )]
    OrientationOutOfRange {
        orbit: Orbit,
        position: usize,
        value: u8,
    },
}

impl CubieState {
    pub const SOLVED: Self = Self {
        corner_permutation: [0, 1, 2, 3, 4, 5, 6, 7],
        corner_orientation: [0; 8],
        edge_permutation: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        edge_orientation: [0; 12],
    };

    /// Create a cubie state from its four component vectors.
    ///
    /// # Errors
    ///
    /// If either permutation is not a bijection or an orientation value is
    /// out of range for its orbit. Reachability is not checked; see
    /// [`CubieState::is_reachable`].
    pub fn new(
        corner_permutation: [u8; 8],
        corner_orientation: [u8; 8],
        edge_permutation: [u8; 12],
        edge_orientation: [u8; 12],
    ) -> Result<Self, CubieStateError> {
        for (orbit, permutation, orientation) in [
            (
                Orbit::Corners,
                corner_permutation.as_slice(),
                corner_orientation.as_slice(),
            ),
            (
                Orbit::Edges,
                edge_permutation.as_slice(),
                edge_orientation.as_slice(),
            ),
        ] {
            if !is_permutation(permutation) {
                return Err(CubieStateError::NotAPermutation { orbit });
            }
            if let Some((position, &value)) = orientation
                .iter()
                .find_position(|&&value| value >= orbit.orientation_count())
            {
                return Err(CubieStateError::OrientationOutOfRange {
                    orbit,
                    position,
                    value,
                });
            }
        }

        Ok(Self {
            corner_permutation,
            corner_orientation,
            edge_permutation,
            edge_orientation,
        })
    }

    /// Draw uniformly random permutations and orientations until the result is
    /// reachable from the solved state. About one in twelve draws passes.
    #[must_use]
    pub fn random_reachable() -> Self {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let mut candidate = Self::SOLVED;
            fastrand::shuffle(&mut candidate.corner_permutation);
            fastrand::shuffle(&mut candidate.edge_permutation);
            candidate
                .corner_orientation
                .fill_with(|| fastrand::u8(..Orbit::Corners.orientation_count()));
            candidate
                .edge_orientation
                .fill_with(|| fastrand::u8(..Orbit::Edges.orientation_count()));

            if candidate.is_reachable() {
                debug!("Drew a reachable cube state after {attempts} attempts");
                return candidate;
            }
        }
    }

    #[must_use]
    pub fn corner_permutation(&self) -> &[u8; 8] {
        &self.corner_permutation
    }

    #[must_use]
    pub fn corner_orientation(&self) -> &[u8; 8] {
        &self.corner_orientation
    }

    #[must_use]
    pub fn edge_permutation(&self) -> &[u8; 12] {
        &self.edge_permutation
    }

    #[must_use]
    pub fn edge_orientation(&self) -> &[u8; 12] {
        &self.edge_orientation
    }
}

impl Default for CubieState {
    fn default() -> Self {
        Self::SOLVED
    }
}

/// The sticker representation: six faces of 3x3 cells, each holding the
/// color of the face whose center carries it when solved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceletState([[[Face; 3]; 3]; COLOR_COUNT]);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FaceletParseError {
    #[error("Expected 54 stickers but got {0}")]
    InvalidLength(usize),
    #[error("Invalid sticker color `{found}` at index {index}, expected one of U D F B R L")]
    InvalidColor { index: usize, found: char },
    #[error("The center of face {face} must be {face} but got {found}")]
    MisplacedCenter { face: Face, found: Face },
}

impl FaceletState {
    #[must_use]
    pub fn solved() -> Self {
        Self(Face::ALL.map(|face| [[face; 3]; 3]))
    }

    /// The 3x3 grid of one face, indexed `[row][col]`.
    #[must_use]
    pub fn face(&self, face: Face) -> &[[Face; 3]; 3] {
        &self.0[face.index()]
    }

    /// Iterate over all 54 cells in face order U D F B R L, row major.
    pub fn stickers(&self) -> impl Iterator<Item = Face> + '_ {
        self.0.iter().flatten().flatten().copied()
    }
}

impl Index<Facelet> for FaceletState {
    type Output = Face;

    fn index(&self, facelet: Facelet) -> &Self::Output {
        &self.0[facelet.face.index()][facelet.row as usize][facelet.col as usize]
    }
}

impl IndexMut<Facelet> for FaceletState {
    fn index_mut(&mut self, facelet: Facelet) -> &mut Self::Output {
        &mut self.0[facelet.face.index()][facelet.row as usize][facelet.col as usize]
    }
}

impl fmt::Display for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Face::ALL.iter().join("   "))?;
        for row in 0..3 {
            let line = Face::ALL
                .iter()
                .map(|&face| self.face(face)[row].iter().join(""))
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for FaceletState {
    type Err = FaceletParseError;

    /// Parse 54 color letters in face order U D F B R L, row major. Whitespace
    /// is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s.chars().filter(|c| !c.is_whitespace()).collect_vec();
        if letters.len() != COLOR_COUNT * 9 {
            return Err(FaceletParseError::InvalidLength(letters.len()));
        }

        let mut state = Self::solved();
        for (index, (&letter, cell)) in letters
            .iter()
            .zip(state.0.iter_mut().flatten().flatten())
            .enumerate()
        {
            *cell = Face::from_letter(letter).ok_or(FaceletParseError::InvalidColor {
                index,
                found: letter,
            })?;
        }

        for face in Face::ALL {
            let found = state.face(face)[1][1];
            if found != face {
                return Err(FaceletParseError::MisplacedCenter { face, found });
            }
        }

        Ok(state)
    }
}

/// Exactly one encoding of a cube is materialized at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    Cubie(CubieState),
    Facelet(FaceletState),
}

#[derive(Error, Debug)]
pub enum CubeError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Parse(#[from] MoveParseError),
}

/// A cube that converts between its two encodings on demand.
///
/// Queries for the encoding that is not currently active convert and swap
/// the stored representation; nothing is cached across the swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    representation: Representation,
}

impl Cube {
    #[must_use]
    pub fn new_solved() -> Self {
        Self::new_from_cubie(CubieState::SOLVED)
    }

    #[must_use]
    pub fn new_from_cubie(cubie_state: CubieState) -> Self {
        Self {
            representation: Representation::Cubie(cubie_state),
        }
    }

    /// A cube in a uniformly random reachable state.
    #[must_use]
    pub fn new_scrambled_random() -> Self {
        Self::new_from_cubie(CubieState::random_reachable())
    }

    /// A cube read off its stickers. The stickers are only checked when the
    /// cubie encoding is first needed.
    #[must_use]
    pub fn from_facelets(facelet_state: FaceletState) -> Self {
        Self {
            representation: Representation::Facelet(facelet_state),
        }
    }

    #[must_use]
    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    /// The cubie encoding, converting from stickers first if needed.
    ///
    /// # Errors
    ///
    /// If the stickers do not describe physical pieces. The facelet
    /// representation is kept in that case.
    pub fn cubie_state(&mut self) -> Result<&CubieState, ConversionError> {
        self.cubie_state_mut().map(|cubie_state| &*cubie_state)
    }

    fn cubie_state_mut(&mut self) -> Result<&mut CubieState, ConversionError> {
        if let Representation::Facelet(facelet_state) = &self.representation {
            trace!("Converting facelets to cubies");
            self.representation = Representation::Cubie(notation::to_cubie(facelet_state)?);
        }
        let Representation::Cubie(cubie_state) = &mut self.representation else {
            unreachable!("the cubie representation was just materialized");
        };
        Ok(cubie_state)
    }

    /// The facelet encoding, converting from cubies first if needed.
    pub fn facelet_state(&mut self) -> &FaceletState {
        if let Representation::Cubie(cubie_state) = &self.representation {
            trace!("Converting cubies to facelets");
            self.representation = Representation::Facelet(notation::to_facelet(cubie_state));
        }
        let Representation::Facelet(facelet_state) = &self.representation else {
            unreachable!("the facelet representation was just materialized");
        };
        facelet_state
    }

    /// Apply every move of the sequence, left to right.
    ///
    /// # Errors
    ///
    /// If the active facelet representation cannot be converted to cubies.
    pub fn apply_sequence(&mut self, sequence: &MoveSequence) -> Result<(), ConversionError> {
        let cubie_state = self.cubie_state_mut()?;
        for &move_ in sequence.iter() {
            cubie_state.apply_move(move_);
        }
        Ok(())
    }

    /// Parse and apply a move sequence such as `"R_U'F2"`.
    ///
    /// # Errors
    ///
    /// If the sequence does not parse, or the cube cannot be converted to
    /// cubies.
    pub fn apply_str(&mut self, sequence: &str) -> Result<(), CubeError> {
        let sequence = sequence.parse::<MoveSequence>()?;
        self.apply_sequence(&sequence)?;
        Ok(())
    }

    /// Answered from whichever representation is active.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        match &self.representation {
            Representation::Cubie(cubie_state) => cubie_state.is_solved(),
            Representation::Facelet(facelet_state) => *facelet_state == FaceletState::solved(),
        }
    }

    /// Stickers that do not form physical pieces are never reachable.
    pub fn is_reachable(&mut self) -> bool {
        self.cubie_state()
            .is_ok_and(|cubie_state| cubie_state.is_reachable())
    }

    /// # Errors
    ///
    /// If the active facelet representation cannot be converted to cubies.
    pub fn is_oriented(&mut self) -> Result<bool, ConversionError> {
        Ok(self.cubie_state()?.is_oriented())
    }

    /// Search for the shortest solution within `max_depth` moves. `Ok(None)`
    /// means there is none; an already solved cube yields an empty sequence.
    ///
    /// # Errors
    ///
    /// If the active facelet representation cannot be converted to cubies.
    pub fn solve(&mut self, max_depth: u8) -> Result<Option<MoveSequence>, ConversionError> {
        let cubie_state = self.cubie_state_mut()?;
        Ok(Solver::new(max_depth).solve(cubie_state))
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new_solved()
    }
}
