//! Reachability and orientation checks on the cubie encoding.
//!
//! A state is reachable from solved by face turns exactly when both
//! permutations are bijections of equal parity, corner twists sum to zero mod
//! 3, and edge flips sum to zero mod 2.

use crate::state::CubieState;

/// Whether the slice holds each of `0..len` exactly once.
#[must_use]
pub fn is_permutation(permutation: &[u8]) -> bool {
    let mut seen = vec![false; permutation.len()];
    permutation.iter().all(|&piece| {
        seen.get_mut(piece as usize)
            .is_some_and(|slot| !std::mem::replace(slot, true))
    })
}

/// `true` for an odd permutation. Computed from the cycle decomposition: a
/// cycle of length `k` contributes `k - 1` transpositions.
///
/// The slice must be a permutation; see [`is_permutation`].
#[must_use]
pub fn permutation_parity(permutation: &[u8]) -> bool {
    let mut visited = vec![false; permutation.len()];
    let mut odd = false;
    for start in 0..permutation.len() {
        if visited[start] {
            continue;
        }
        let mut position = start;
        let mut cycle_length = 0;
        while !visited[position] {
            visited[position] = true;
            position = permutation[position] as usize;
            cycle_length += 1;
        }
        if cycle_length % 2 == 0 {
            odd = !odd;
        }
    }
    odd
}

impl CubieState {
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        is_permutation(&self.corner_permutation)
            && is_permutation(&self.edge_permutation)
            && permutation_parity(&self.corner_permutation)
                == permutation_parity(&self.edge_permutation)
            && self
                .corner_orientation
                .iter()
                .map(|&twist| u32::from(twist))
                .sum::<u32>()
                % 3
                == 0
            && self
                .edge_orientation
                .iter()
                .map(|&flip| u32::from(flip))
                .sum::<u32>()
                % 2
                == 0
    }

    /// Every corner and edge orientation is zero, regardless of where the
    /// pieces sit.
    #[must_use]
    pub fn is_oriented(&self) -> bool {
        self.corner_orientation.iter().all(|&twist| twist == 0)
            && self.edge_orientation.iter().all(|&flip| flip == 0)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == CubieState::SOLVED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveSequence;

    fn after(sequence: &str) -> CubieState {
        let mut state = CubieState::SOLVED;
        state.apply_sequence(&sequence.parse::<MoveSequence>().unwrap());
        state
    }

    #[test_log::test]
    fn test_is_permutation() {
        assert!(is_permutation(&[0, 1, 2, 3]));
        assert!(is_permutation(&[3, 1, 0, 2]));
        assert!(is_permutation(&[]));
        assert!(!is_permutation(&[0, 0, 2, 3]));
        assert!(!is_permutation(&[0, 1, 2, 4]));
    }

    #[test_log::test]
    fn test_long_permutations() {
        let identity = (0..=255).collect::<Vec<u8>>();
        assert!(is_permutation(&identity));
        assert!(!permutation_parity(&identity));

        let mut swapped = identity.clone();
        swapped.swap(3, 200);
        assert!(is_permutation(&swapped));
        assert!(permutation_parity(&swapped));

        let mut rotated = (0..40).collect::<Vec<u8>>();
        rotated.rotate_left(1);
        assert!(is_permutation(&rotated));
        // One 40-cycle is odd
        assert!(permutation_parity(&rotated));

        let mut duplicated = identity;
        duplicated[255] = 0;
        assert!(!is_permutation(&duplicated));

        let mut out_of_range = (0..34).collect::<Vec<u8>>();
        out_of_range[33] = 40;
        assert!(!is_permutation(&out_of_range));
    }

    #[test_log::test]
    fn test_parity() {
        assert!(!permutation_parity(&[0, 1, 2, 3]));
        assert!(permutation_parity(&[1, 0, 2, 3]));
        // A 3-cycle is even, a 4-cycle is odd
        assert!(!permutation_parity(&[1, 2, 0, 3]));
        assert!(permutation_parity(&[1, 2, 3, 0]));
        // Two disjoint swaps are even
        assert!(!permutation_parity(&[1, 0, 3, 2]));
    }

    #[test_log::test]
    fn test_quarter_turn_parity_matches() {
        let state = after("R_");
        assert!(permutation_parity(&state.corner_permutation));
        assert!(permutation_parity(&state.edge_permutation));
        assert!(state.is_reachable());
    }

    #[test_log::test]
    fn test_solved_checks() {
        let state = CubieState::SOLVED;
        assert!(state.is_solved());
        assert!(state.is_reachable());
        assert!(state.is_oriented());
    }

    #[test_log::test]
    fn test_single_twist_is_unreachable() {
        let mut state = CubieState::SOLVED;
        state.corner_orientation[5] = 2;
        assert!(!state.is_reachable());

        state.corner_orientation[1] = 1;
        assert!(state.is_reachable());
    }

    #[test_log::test]
    fn test_single_flip_is_unreachable() {
        let mut state = CubieState::SOLVED;
        state.edge_orientation[7] = 1;
        assert!(!state.is_reachable());

        state.edge_orientation[0] = 1;
        assert!(state.is_reachable());
    }

    #[test_log::test]
    fn test_single_swap_is_unreachable() {
        let mut state = CubieState::SOLVED;
        state.corner_permutation.swap(0, 1);
        assert!(!state.is_reachable());

        state.edge_permutation.swap(4, 9);
        assert!(state.is_reachable());
    }

    #[test_log::test]
    fn test_orientation_after_turns() {
        assert!(after("U_D'U2D2").is_oriented());
        assert!(!after("F_").is_oriented());
        assert!(!after("R_U_").is_oriented());
        // Half turns never change orientation
        assert!(after("F2B2").is_oriented());
        assert!(after("R2L2").is_oriented());
        // Side quarter turns twist corners
        assert!(!after("R_L'").is_oriented());
    }

    #[test_log::test]
    fn test_side_turns_never_flip_edges() {
        let state = after("R_L_");
        assert_eq!(state.edge_orientation, [0; 12]);
        assert_ne!(state.corner_orientation, [0; 8]);
    }

    #[test_log::test]
    fn test_scrambles_stay_reachable() {
        let state = after("R_U'F2L_B'D2R2F'U_L2D'B_");
        assert!(state.is_reachable());
        assert!(!state.is_solved());
    }
}
