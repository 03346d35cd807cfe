use crate::grid::{Cell, Grid, State};
use crate::solver::{PolicyMap, ValueMap};

/// Render the policy as a glyph matrix: one arrow per cell, `X` for
/// obstacles, `·` for the goal (which has no outgoing action)
pub fn format_policy(grid: &Grid, policy: &PolicyMap) -> String {
    let mut result = String::new();
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let glyph = match grid.get_cell(row, col) {
                Cell::Obstacle => 'X',
                Cell::Goal => '·',
                _ => match policy.get(State::new(row, col)) {
                    Some(action) => action.glyph(),
                    None => '·',
                },
            };
            if col > 0 {
                result.push(' ');
            }
            result.push(glyph);
        }
        result.push('\n');
    }
    result
}

/// Render the value function as a fixed-width numeric matrix, obstacles
/// marked `X`
pub fn format_values(grid: &Grid, values: &ValueMap) -> String {
    let mut result = String::new();
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            if col > 0 {
                result.push(' ');
            }
            match values.get(State::new(row, col)) {
                Some(value) => result.push_str(&format!("{:>7.2}", value)),
                None => result.push_str(&format!("{:>7}", "X")),
            }
        }
        result.push('\n');
    }
    result
}

/// Render the grid with a path drawn over it:
/// `S` start, `G` goal, `*` path cells, `█` obstacles, `.` free
pub fn format_path_overlay(grid: &Grid, path: &[State]) -> String {
    let mut result = String::new();
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let state = State::new(row, col);
            let symbol = match grid.get_cell(row, col) {
                Cell::Start => 'S',
                Cell::Goal => 'G',
                Cell::Obstacle => '█',
                Cell::Free => {
                    if path.contains(&state) {
                        '*'
                    } else {
                        '.'
                    }
                }
            };
            result.push(symbol);
        }
        result.push('\n');
    }
    result
}
