use crate::{
    moves::{Move, MoveSequence},
    start,
    state::CubieState,
    success,
    tables::Face,
    working,
};
use log::{debug, info, trace};
use std::time::Instant;

/// Exhaustive depth-bounded search for the shortest move sequence back to the
/// solved state.
///
/// Two kinds of redundant branches are never expanded: turning the same face
/// twice in a row, and turning a face again after only its opposite face was
/// turned in between (`X Y X` collapses because opposite faces commute).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Solver {
    max_depth: u8,
}

/// The faces of the last two moves on the current search path.
#[derive(Debug, Copy, Clone, Default)]
struct AxisHistory {
    last: Option<Face>,
    before_last: Option<Face>,
}

impl AxisHistory {
    fn permits(self, face: Face) -> bool {
        match self.last {
            None => true,
            Some(last) => {
                face != last && !(last == face.opposite() && self.before_last == Some(face))
            }
        }
    }

    fn push(self, face: Face) -> Self {
        Self {
            last: Some(face),
            before_last: self.last,
        }
    }
}

struct SearchMutable<'a> {
    cubie_state: &'a mut CubieState,
    nodes_visited: u64,
}

impl Solver {
    #[must_use]
    pub fn new(max_depth: u8) -> Self {
        Self { max_depth }
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Find a shortest solution of at most `max_depth` moves. Among equally
    /// short solutions the first in generator enumeration order wins.
    ///
    /// The state is used as scratch space and is restored before returning.
    pub fn solve(&self, cubie_state: &mut CubieState) -> Option<MoveSequence> {
        info!(start!("Searching for a solution of at most {} moves"), self.max_depth);
        let start = Instant::now();

        let mut mutable = SearchMutable {
            cubie_state,
            nodes_visited: 0,
        };
        let solution = Self::search(&mut mutable, self.max_depth, AxisHistory::default());

        debug!(
            working!("Traversed {} nodes in {:.3}s"),
            mutable.nodes_visited,
            start.elapsed().as_secs_f64()
        );

        let solution = solution.map(|mut reversed| {
            reversed.reverse();
            MoveSequence::from(reversed)
        });
        match &solution {
            Some(solution) => info!(
                success!("Found a {} move solution: {}"),
                solution.len(),
                solution
            ),
            None => info!("No solution within {} moves", self.max_depth),
        }
        solution
    }

    /// Returns the solution from the current node with its moves in reverse
    /// order, so that each level only appends.
    fn search(
        mutable: &mut SearchMutable,
        remaining_depth: u8,
        history: AxisHistory,
    ) -> Option<Vec<Move>> {
        mutable.nodes_visited += 1;
        if mutable.cubie_state.is_solved() {
            return Some(vec![]);
        }
        if remaining_depth == 0 {
            return None;
        }

        let mut best: Option<Vec<Move>> = None;
        for move_ in Move::ALL {
            if !history.permits(move_.face) {
                continue;
            }

            mutable.cubie_state.apply_move(move_);
            let found = Self::search(mutable, remaining_depth - 1, history.push(move_.face));
            mutable.cubie_state.apply_move(move_.inverse());

            let Some(mut found) = found else {
                continue;
            };
            if best.as_ref().is_none_or(|best| found.len() + 1 < best.len()) {
                trace!("Improved solution to {} moves with {move_}", found.len() + 1);
                found.push(move_);
                let optimal = found.len() == 1;
                best = Some(found);
                // Nothing beats a single move from an unsolved state
                if optimal {
                    break;
                }
            }
        }

        best
    }
}
