//! Fixed reference tables relating the cubie encoding to the facelet
//! encoding.
//!
//! Corner positions, in order: UBL UBR UFR UFL DBL DRB DFR DLF.
//! Edge positions, in order: UB UR UF UL DB DR DF DL BL BR FR FL.
//!
//! Every face grid is indexed `[row][col]` as seen from outside the cube.

use std::{fmt, str::FromStr};

/// The number of sticker colors. Each color is named by the face whose
/// center carries it in the solved state.
pub const COLOR_COUNT: usize = 6;

/// The six faces of the cube. The discriminant is the face index used by the
/// facelet encoding and doubles as the color index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U = 0,
    D = 1,
    F = 2,
    B = 3,
    R = 4,
    L = 5,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: u8,
    pub col: u8,
}

impl Face {
    /// All faces in generator enumeration order.
    pub const ALL: [Self; COLOR_COUNT] = {
        use Face::*;
        let v = [U, D, F, B, R, L];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
            Face::R => Face::L,
            Face::L => Face::R,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::R => 'R',
            Face::L => 'L',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            'R' => Some(Face::R),
            'L' => Some(Face::L),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Face::from_letter(letter).ok_or(()),
            _ => Err(()),
        }
    }
}

const fn facelet(face: Face, row: u8, col: u8) -> Facelet {
    Facelet { face, row, col }
}

/// The reference color triple of every corner piece, listed in the cyclic
/// order of `CORNER_FACELETS` for that piece's home position.
pub static CORNER_COLORS: [[Face; 3]; 8] = {
    use Face::*;
    [
        [U, L, B],
        [U, B, R],
        [U, R, F],
        [U, F, L],
        [D, B, L],
        [D, R, B],
        [D, F, R],
        [D, L, F],
    ]
};

/// The reference color pair of every edge piece.
pub static EDGE_COLORS: [[Face; 2]; 12] = {
    use Face::*;
    [
        [U, B],
        [U, R],
        [U, F],
        [U, L],
        [D, B],
        [D, R],
        [D, F],
        [D, L],
        [B, L],
        [B, R],
        [F, R],
        [F, L],
    ]
};

/// The three cells making up each corner position. The first cell always
/// lies on the U or D face.
pub static CORNER_FACELETS: [[Facelet; 3]; 8] = {
    use Face::*;
    [
        [facelet(U, 0, 0), facelet(L, 0, 2), facelet(B, 0, 2)],
        [facelet(U, 0, 2), facelet(B, 0, 0), facelet(R, 0, 0)],
        [facelet(U, 2, 2), facelet(R, 2, 0), facelet(F, 0, 2)],
        [facelet(U, 2, 0), facelet(F, 0, 0), facelet(L, 2, 2)],
        [facelet(D, 0, 2), facelet(B, 2, 2), facelet(L, 0, 0)],
        [facelet(D, 0, 0), facelet(R, 0, 2), facelet(B, 2, 0)],
        [facelet(D, 2, 0), facelet(F, 2, 2), facelet(R, 2, 2)],
        [facelet(D, 2, 2), facelet(L, 2, 0), facelet(F, 2, 0)],
    ]
};

/// The two cells making up each edge position.
pub static EDGE_FACELETS: [[Facelet; 2]; 12] = {
    use Face::*;
    [
        [facelet(U, 0, 1), facelet(B, 0, 1)],
        [facelet(U, 1, 2), facelet(R, 1, 0)],
        [facelet(U, 2, 1), facelet(F, 0, 1)],
        [facelet(U, 1, 0), facelet(L, 1, 2)],
        [facelet(D, 0, 1), facelet(B, 2, 1)],
        [facelet(D, 1, 0), facelet(R, 1, 2)],
        [facelet(D, 2, 1), facelet(F, 2, 1)],
        [facelet(D, 1, 2), facelet(L, 1, 0)],
        [facelet(B, 1, 2), facelet(L, 0, 1)],
        [facelet(B, 1, 0), facelet(R, 0, 1)],
        [facelet(F, 1, 2), facelet(R, 2, 1)],
        [facelet(F, 1, 0), facelet(L, 2, 1)],
    ]
};

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test_log::test]
    fn test_tables_agree_on_home_colors() {
        for (cells, colors) in CORNER_FACELETS.iter().zip(&CORNER_COLORS) {
            for (cell, &color) in cells.iter().zip(colors) {
                assert_eq!(cell.face, color);
            }
        }
        for (cells, colors) in EDGE_FACELETS.iter().zip(&EDGE_COLORS) {
            for (cell, &color) in cells.iter().zip(colors) {
                assert_eq!(cell.face, color);
            }
        }
    }

    #[test_log::test]
    fn test_every_non_center_cell_is_covered_once() {
        let cells = CORNER_FACELETS
            .iter()
            .flatten()
            .chain(EDGE_FACELETS.iter().flatten())
            .copied()
            .collect_vec();
        assert_eq!(cells.len(), 48);
        assert!(cells.iter().all_unique());
        assert!(cells.iter().all(|cell| (cell.row, cell.col) != (1, 1)));
    }

    #[test_log::test]
    fn test_opposites() {
        for face in Face::ALL {
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
        }
    }
}
