use crate::grid::{Grid, State};
use crate::solver::PolicyMap;
use std::collections::HashSet;

/// Walk the greedy policy from start towards goal and collect the visited
/// states in order.
///
/// Best-effort by contract: this never errors. A missing start or goal
/// yields an empty path; a dead policy entry, an off-grid or obstacle step,
/// or a revisited state truncates the walk, and whatever was accumulated is
/// returned. Callers treat a short or empty path as "no route found".
///
/// The visited-set guard bounds the walk at one visit per non-obstacle
/// cell, so it terminates for any policy, including inconsistent ones.
pub fn reconstruct(grid: &Grid, policy: &PolicyMap) -> Vec<State> {
    let (start, goal) = match (grid.find_start(), grid.find_goal()) {
        (Some(start), Some(goal)) => (start, goal),
        _ => return Vec::new(),
    };

    let mut path = Vec::new();
    let mut visited: HashSet<State> = HashSet::new();
    let mut current = start;

    loop {
        path.push(current);
        visited.insert(current);

        if current == goal {
            break;
        }

        // Dead end: the policy has no action here
        let action = match policy.get(current) {
            Some(action) => action,
            None => break,
        };

        let (dr, dc) = action.delta();
        let next = State::new(current.row + dr, current.col + dc);

        // The policy points off the grid or into a wall
        if !grid.in_bounds(next.row, next.col) || grid.is_obstacle(next.row, next.col) {
            break;
        }

        // Cycle guard
        if visited.contains(&next) {
            break;
        }

        current = next;
    }

    path
}

/// Format path for display
pub fn format_path(path: &[State]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    let mut result = String::new();
    for (i, state) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&format!("({},{})", state.row, state.col));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn test_missing_endpoints_give_empty_path() {
        let mut grid = Grid::new(3, 3);
        let policy = PolicyMap::new(&grid);
        assert!(reconstruct(&grid, &policy).is_empty(), "no start, no goal");

        grid.set_cell(0, 0, Cell::Start);
        assert!(reconstruct(&grid, &policy).is_empty(), "goal still missing");

        grid.set_cell(0, 0, Cell::Free);
        grid.set_cell(2, 2, Cell::Goal);
        assert!(reconstruct(&grid, &policy).is_empty(), "start still missing");
    }

    #[test]
    fn test_dead_policy_entry_stops_at_start() {
        let mut grid = Grid::new(2, 2);
        grid.set_cell(0, 0, Cell::Start);
        grid.set_cell(1, 1, Cell::Goal);

        let policy = PolicyMap::new(&grid);
        let path = reconstruct(&grid, &policy);
        assert_eq!(path, vec![State::new(0, 0)]);
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[]), "No path");
        let path = vec![State::new(0, 0), State::new(0, 1)];
        assert_eq!(format_path(&path), "(0,0) -> (0,1)");
    }
}
