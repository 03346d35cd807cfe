use crate::grid::{Cell, Grid, State};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Trace logging flag - set to true to enable per-sweep debug output
const TRACE_SOLVER: bool = false;

/// The four directional actions, in fixed priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Priority order used everywhere actions are enumerated.
    /// Tie-breaking depends on this order staying fixed.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Unit offset as (row delta, col delta)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// Directional glyph for display
    pub fn glyph(&self) -> char {
        match self {
            Action::Up => '↑',
            Action::Down => '↓',
            Action::Left => '←',
            Action::Right => '→',
        }
    }
}

/// Parameters controlling value iteration
#[derive(Debug, Clone, Copy)]
pub struct SolverParams {
    /// Discount factor, must lie in (0, 1)
    pub discount: f64,
    /// Convergence threshold on the max value change per sweep
    pub threshold: f64,
    /// Sweep ceiling; iteration stops here even without convergence
    pub max_sweeps: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            discount: 0.9,
            threshold: 1e-4,
            max_sweeps: 10_000,
        }
    }
}

/// State-value function over the grid
/// Stored row-major; obstacle cells carry no value
#[derive(Debug, Clone, PartialEq)]
pub struct ValueMap {
    pub rows: i32,
    pub cols: i32,
    values: Vec<Option<f64>>,
}

impl ValueMap {
    /// Initialize with 0.0 for every non-obstacle cell
    pub fn new(grid: &Grid) -> Self {
        let mut values = vec![None; (grid.rows * grid.cols) as usize];
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                if grid.get_cell(row, col) != Cell::Obstacle {
                    values[grid.get_id(row, col) as usize] = Some(0.0);
                }
            }
        }
        ValueMap {
            rows: grid.rows,
            cols: grid.cols,
            values,
        }
    }

    /// Value at a state, None for obstacles and out-of-bounds positions
    pub fn get(&self, state: State) -> Option<f64> {
        if state.row < 0 || state.row >= self.rows || state.col < 0 || state.col >= self.cols {
            return None;
        }
        self.values[(state.col + state.row * self.cols) as usize]
    }

    fn set(&mut self, state: State, value: f64) {
        let id = (state.col + state.row * self.cols) as usize;
        self.values[id] = Some(value);
    }
}

/// Greedy policy over the grid
/// None marks cells with no outgoing action: obstacles and the goal
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyMap {
    pub rows: i32,
    pub cols: i32,
    actions: Vec<Option<Action>>,
}

impl PolicyMap {
    /// Initialize with no action anywhere
    pub fn new(grid: &Grid) -> Self {
        PolicyMap {
            rows: grid.rows,
            cols: grid.cols,
            actions: vec![None; (grid.rows * grid.cols) as usize],
        }
    }

    /// Action at a state, None where no action is defined
    pub fn get(&self, state: State) -> Option<Action> {
        if state.row < 0 || state.row >= self.rows || state.col < 0 || state.col >= self.cols {
            return None;
        }
        self.actions[(state.col + state.row * self.cols) as usize]
    }

    /// Set the action for a state; used by the solver and by tests that
    /// build hand-crafted policies
    pub fn set(&mut self, state: State, action: Action) {
        if state.row >= 0 && state.row < self.rows && state.col >= 0 && state.col < self.cols {
            self.actions[(state.col + state.row * self.cols) as usize] = Some(action);
        }
    }
}

/// How the value iteration loop ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// Max value change fell below the threshold
    Converged { sweeps: usize },
    /// Sweep ceiling reached first; the returned maps are best-effort
    DidNotConverge { sweeps: usize, delta: f64 },
}

/// Solver output: converged (or best-effort) values and greedy policy
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub values: ValueMap,
    pub policy: PolicyMap,
    pub termination: Termination,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// No goal cell in the grid - there is nothing to solve towards
    #[error("grid has no goal cell")]
    MissingGoal,
}

/// Apply an action from a state. If the target cell is outside the grid
/// or an obstacle, the move bumps back: the effective next state is the
/// acting state itself.
pub fn effective_next(grid: &Grid, state: State, action: Action) -> State {
    let (dr, dc) = action.delta();
    let row = state.row + dr;
    let col = state.col + dc;
    if grid.is_obstacle(row, col) {
        state
    } else {
        State::new(row, col)
    }
}

/// Reward for a transition: 0 when the effective next state is the goal,
/// -1 otherwise (each step costs one)
fn reward(next: State, goal: State) -> f64 {
    if next == goal {
        0.0
    } else {
        -1.0
    }
}

/// Evaluate all four actions from a state against the given value function
/// and return the best q-value with its action. Actions are tried in
/// priority order and only a strictly greater q replaces the current best,
/// so ties resolve to the earliest action.
fn best_action(grid: &Grid, values: &ValueMap, state: State, goal: State, discount: f64) -> (f64, Action) {
    let mut best_q = f64::NEG_INFINITY;
    let mut best = Action::Up;
    for action in Action::ALL {
        let next = effective_next(grid, state, action);
        let q = reward(next, goal) + discount * values.get(next).unwrap_or(0.0);
        if q > best_q {
            best_q = q;
            best = action;
        }
    }
    (best_q, best)
}

/// Run value iteration over the grid and extract the greedy policy.
///
/// Pure function over an immutable grid: synchronous Bellman sweeps until
/// the max per-state change drops below `params.threshold`, bounded by
/// `params.max_sweeps`. The goal state is absorbing - it is never swept,
/// so its value stays at the initial 0.0 and its policy entry stays None.
///
/// Fails only when the grid has no goal cell. A missing start cell does
/// not block solving; values and policy are well-defined without one.
pub fn solve(grid: &Grid, params: &SolverParams) -> Result<Solution, SolveError> {
    let goal = grid.find_goal().ok_or(SolveError::MissingGoal)?;
    let states = grid.states();

    let mut values = ValueMap::new(grid);
    let mut sweeps = 0;
    let mut delta = f64::INFINITY;

    while delta >= params.threshold {
        if sweeps >= params.max_sweeps {
            if TRACE_SOLVER {
                println!("[solve] ceiling hit after {} sweeps, delta={:.6}", sweeps, delta);
            }
            let policy = extract_policy(grid, &values, &states, goal, params.discount);
            return Ok(Solution {
                values,
                policy,
                termination: Termination::DidNotConverge { sweeps, delta },
            });
        }

        let mut next_values = values.clone();
        delta = 0.0;
        for &state in &states {
            if state == goal {
                continue;
            }
            let (best_q, _) = best_action(grid, &values, state, goal, params.discount);
            let change = (best_q - values.get(state).unwrap_or(0.0)).abs();
            if change > delta {
                delta = change;
            }
            next_values.set(state, best_q);
        }
        values = next_values;
        sweeps += 1;

        if TRACE_SOLVER {
            println!("[solve] sweep {}: delta={:.6}", sweeps, delta);
        }
    }

    let policy = extract_policy(grid, &values, &states, goal, params.discount);
    Ok(Solution {
        values,
        policy,
        termination: Termination::Converged { sweeps },
    })
}

/// Recompute the per-action q-values against the final value function and
/// record the maximizing action per state, same tie-break as the sweeps
fn extract_policy(grid: &Grid, values: &ValueMap, states: &[State], goal: State, discount: f64) -> PolicyMap {
    let mut policy = PolicyMap::new(grid);
    for &state in states {
        if state == goal {
            continue;
        }
        let (_, action) = best_action(grid, values, state, goal, discount);
        policy.set(state, action);
    }
    policy
}
