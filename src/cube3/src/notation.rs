//! Lossless conversion between the cubie and facelet encodings.
//!
//! A piece with orientation `o` in position `p` shows the color at cyclic
//! index `(k - o) mod n` of its reference tuple on the `k`th cell of `p`,
//! where `n` is the orbit's orientation count.

use crate::{
    state::{CubieState, FaceletState, Orbit},
    tables::{CORNER_COLORS, CORNER_FACELETS, EDGE_COLORS, EDGE_FACELETS, Face, Facelet},
};
use itertools::Itertools;
use std::array;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error(
        "The colors {} at {orbit} position {position} do not match any {orbit} in any orientation",
        .colors.iter().join("")
    )]
    UnrecognizedCubie {
        orbit: Orbit,
        position: usize,
        colors: Vec<Face>,
    },
}

#[must_use]
pub fn to_facelet(cubie_state: &CubieState) -> FaceletState {
    let mut facelet_state = FaceletState::solved();
    paint(
        &mut facelet_state,
        &CORNER_FACELETS,
        &CORNER_COLORS,
        &cubie_state.corner_permutation,
        &cubie_state.corner_orientation,
    );
    paint(
        &mut facelet_state,
        &EDGE_FACELETS,
        &EDGE_COLORS,
        &cubie_state.edge_permutation,
        &cubie_state.edge_orientation,
    );
    facelet_state
}

fn paint<const N: usize>(
    facelet_state: &mut FaceletState,
    cells: &[[Facelet; N]],
    colors: &[[Face; N]],
    permutation: &[u8],
    orientation: &[u8],
) {
    for ((position_cells, &piece), &twist) in cells.iter().zip(permutation).zip(orientation) {
        let piece_colors = colors[piece as usize];
        for (k, &cell) in position_cells.iter().enumerate() {
            facelet_state[cell] = piece_colors[(k + N - twist as usize) % N];
        }
    }
}

/// # Errors
///
/// If some position's cells, in no cyclic rotation, spell out a piece of the
/// matching orbit. Duplicated pieces are not detected here; such a state is
/// rejected by [`CubieState::is_reachable`].
pub fn to_cubie(facelet_state: &FaceletState) -> Result<CubieState, ConversionError> {
    let mut cubie_state = CubieState::SOLVED;
    identify_all(
        facelet_state,
        Orbit::Corners,
        &CORNER_FACELETS,
        &CORNER_COLORS,
        &mut cubie_state.corner_permutation,
        &mut cubie_state.corner_orientation,
    )?;
    identify_all(
        facelet_state,
        Orbit::Edges,
        &EDGE_FACELETS,
        &EDGE_COLORS,
        &mut cubie_state.edge_permutation,
        &mut cubie_state.edge_orientation,
    )?;
    Ok(cubie_state)
}

fn identify_all<const N: usize>(
    facelet_state: &FaceletState,
    orbit: Orbit,
    cells: &[[Facelet; N]],
    colors: &[[Face; N]],
    permutation: &mut [u8],
    orientation: &mut [u8],
) -> Result<(), ConversionError> {
    for (position, position_cells) in cells.iter().enumerate() {
        let seen = position_cells.map(|cell| facelet_state[cell]);
        let (piece, twist) =
            identify(seen, colors).ok_or_else(|| ConversionError::UnrecognizedCubie {
                orbit,
                position,
                colors: seen.to_vec(),
            })?;
        permutation[position] = piece;
        orientation[position] = twist;
    }
    Ok(())
}

/// Rotate the observed colors left until they match a reference tuple. The
/// tuple's index is the piece and the rotation count is its orientation.
#[allow(clippy::cast_possible_truncation)]
fn identify<const N: usize>(seen: [Face; N], colors: &[[Face; N]]) -> Option<(u8, u8)> {
    (0..N).find_map(|rotation| {
        let candidate: [Face; N] = array::from_fn(|k| seen[(k + rotation) % N]);
        colors
            .iter()
            .position(|&reference| reference == candidate)
            .map(|piece| (piece as u8, rotation as u8))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveSequence;

    fn facelet(face: Face, row: u8, col: u8) -> Facelet {
        Facelet { face, row, col }
    }

    #[test_log::test]
    fn test_solved_converts_both_ways() {
        assert_eq!(to_facelet(&CubieState::SOLVED), FaceletState::solved());
        assert_eq!(to_cubie(&FaceletState::solved()), Ok(CubieState::SOLVED));
    }

    #[test_log::test]
    fn test_random_round_trip() {
        for _ in 0..100 {
            let cubie_state = CubieState::random_reachable();
            assert_eq!(to_cubie(&to_facelet(&cubie_state)), Ok(cubie_state));
        }
    }

    #[test_log::test]
    fn test_twisted_corner_stickers() {
        let mut cubie_state = CubieState::SOLVED;
        cubie_state.corner_orientation[2] = 1;
        let facelet_state = to_facelet(&cubie_state);

        // UFR twisted once shows its F color on U, its U color on R, its R
        // color on F
        assert_eq!(facelet_state[facelet(Face::U, 2, 2)], Face::F);
        assert_eq!(facelet_state[facelet(Face::R, 2, 0)], Face::U);
        assert_eq!(facelet_state[facelet(Face::F, 0, 2)], Face::R);

        assert_eq!(to_cubie(&facelet_state), Ok(cubie_state));
    }

    #[test_log::test]
    fn test_flipped_edge_stickers() {
        let mut cubie_state = CubieState::SOLVED;
        cubie_state.edge_orientation[0] = 1;
        let facelet_state = to_facelet(&cubie_state);

        assert_eq!(facelet_state[facelet(Face::U, 0, 1)], Face::B);
        assert_eq!(facelet_state[facelet(Face::B, 0, 1)], Face::U);
        assert_eq!(to_cubie(&facelet_state), Ok(cubie_state));
    }

    #[test_log::test]
    fn test_centers_never_change() {
        let cubie_state = {
            let mut cube = crate::Cube::new_solved();
            cube.apply_sequence(&"R_U'F2L_B'D2".parse::<MoveSequence>().unwrap())
                .unwrap();
            *cube.cubie_state().unwrap()
        };
        let facelet_state = to_facelet(&cubie_state);
        for face in Face::ALL {
            assert_eq!(facelet_state.face(face)[1][1], face);
        }
    }

    #[test_log::test]
    fn test_impossible_colors_are_rejected() {
        let mut facelet_state = FaceletState::solved();
        // U/D are opposite so no edge carries both
        facelet_state[facelet(Face::F, 0, 1)] = Face::D;

        assert_eq!(
            to_cubie(&facelet_state),
            Err(ConversionError::UnrecognizedCubie {
                orbit: Orbit::Edges,
                position: 2,
                colors: vec![Face::U, Face::D],
            })
        );
    }

    #[test_log::test]
    fn test_mirrored_corner_is_rejected() {
        let mut facelet_state = FaceletState::solved();
        // Swapping two stickers of one corner reverses its cyclic order
        facelet_state[facelet(Face::R, 2, 0)] = Face::F;
        facelet_state[facelet(Face::F, 0, 2)] = Face::R;

        assert!(matches!(
            to_cubie(&facelet_state),
            Err(ConversionError::UnrecognizedCubie {
                orbit: Orbit::Corners,
                position: 2,
                ..
            })
        ));
    }

    #[test_log::test]
    fn test_duplicate_pieces_convert_but_are_unreachable() {
        let mut facelet_state = FaceletState::solved();
        // Make the UB edge a second copy of UF
        facelet_state[facelet(Face::B, 0, 1)] = Face::F;

        let cubie_state = to_cubie(&facelet_state).unwrap();
        assert_eq!(cubie_state.edge_permutation[0], 2);
        assert!(!cubie_state.is_reachable());
    }
}
