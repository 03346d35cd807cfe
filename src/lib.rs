pub mod config;
pub mod grid;
pub mod grid_file;
pub mod path;
pub mod render;
pub mod solver;

pub use grid::{Cell, Grid, State};
pub use path::reconstruct;
pub use solver::{solve, Action, PolicyMap, Solution, SolveError, SolverParams, Termination, ValueMap};
