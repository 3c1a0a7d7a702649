#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::module_name_repetitions)]

//! A 3x3x3 cube model with two interchangeable state encodings, the 18 face
//! turn generators, reachability checks, and a depth-bounded solver.

pub mod invariants;
pub mod moves;
pub mod notation;
pub mod solver;
pub mod state;
pub mod tables;

pub use moves::{Move, MoveParseError, MoveSequence, Turn};
pub use notation::ConversionError;
pub use solver::Solver;
pub use state::{
    Cube, CubeError, CubieState, CubieStateError, FaceletParseError, FaceletState, Orbit,
    Representation,
};
pub use tables::{Face, Facelet};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
