use gridmdp::path::{format_path, reconstruct};
use gridmdp::render::format_path_overlay;
use gridmdp::solver::{solve, Action, PolicyMap, SolverParams};
use gridmdp::{Cell, Grid, State};

#[test]
fn test_straight_corridor() {
    println!("\n=== Test: Straight Corridor ===");

    let mut grid = Grid::new(1, 5);
    grid.set_cell(0, 0, Cell::Start);
    grid.set_cell(0, 4, Cell::Goal);

    let solution = solve(&grid, &SolverParams::default()).expect("solvable grid");
    let path = reconstruct(&grid, &solution.policy);

    println!("Path: {}", format_path(&path));
    print!("{}", format_path_overlay(&grid, &path));

    let expected: Vec<State> = (0..5).map(|col| State::new(0, col)).collect();
    assert_eq!(path, expected, "corridor walk must visit every cell in order");
}

#[test]
fn test_path_detours_around_wall() {
    println!("\n=== Test: Detour Around Wall ===");

    let mut grid = Grid::new(5, 5);
    grid.set_cell(2, 0, Cell::Start);
    grid.set_cell(2, 4, Cell::Goal);
    // Vertical wall with a gap at the top
    for row in 1..5 {
        grid.set_cell(row, 2, Cell::Obstacle);
    }

    let solution = solve(&grid, &SolverParams::default()).expect("solvable grid");
    let path = reconstruct(&grid, &solution.policy);

    println!("Path: {}", format_path(&path));
    print!("{}", format_path_overlay(&grid, &path));

    assert_eq!(path.first(), Some(&State::new(2, 0)));
    assert_eq!(path.last(), Some(&State::new(2, 4)), "path must reach the goal");
    assert!(path.contains(&State::new(0, 2)), "route must pass through the gap");
    for pair in path.windows(2) {
        let step = (pair[1].row - pair[0].row).abs() + (pair[1].col - pair[0].col).abs();
        assert_eq!(step, 1, "each hop moves exactly one cell");
        assert!(!grid.is_obstacle(pair[1].row, pair[1].col), "path never enters a wall");
    }
}

#[test]
fn test_two_cycle_policy_terminates() {
    println!("\n=== Test: Adversarial 2-Cycle Policy ===");

    let mut grid = Grid::new(1, 3);
    grid.set_cell(0, 0, Cell::Start);
    grid.set_cell(0, 2, Cell::Goal);

    // Hand-built inconsistent policy bouncing between the first two cells
    let mut policy = PolicyMap::new(&grid);
    policy.set(State::new(0, 0), Action::Right);
    policy.set(State::new(0, 1), Action::Left);

    let path = reconstruct(&grid, &policy);
    println!("Path: {}", format_path(&path));

    assert_eq!(
        path,
        vec![State::new(0, 0), State::new(0, 1)],
        "cycle guard must stop the walk at the first revisit"
    );
    assert_ne!(path.last(), Some(&State::new(0, 2)), "goal is never reached");
}

#[test]
fn test_walk_is_bounded_by_state_count() {
    println!("\n=== Test: Termination Bound ===");

    let mut grid = Grid::new(6, 6);
    grid.set_cell(0, 0, Cell::Start);
    grid.set_cell(5, 5, Cell::Goal);
    grid.set_cell(3, 3, Cell::Obstacle);

    // Every cell points Right - the walk runs off the row and stops
    let mut policy = PolicyMap::new(&grid);
    for state in grid.states() {
        policy.set(state, Action::Right);
    }

    let path = reconstruct(&grid, &policy);
    println!("Path: {}", format_path(&path));

    assert!(
        path.len() <= grid.states().len(),
        "walk may not visit more states than exist"
    );
    assert_eq!(path.len(), 6, "Right-only policy crosses the top row then stops");
}

#[test]
fn test_walled_off_start_stalls() {
    println!("\n=== Test: Walled-Off Start ===");

    let mut grid = Grid::new(5, 5);
    grid.set_cell(0, 0, Cell::Goal);
    grid.set_cell(2, 2, Cell::Start);
    // Ring of obstacles around the start
    for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)] {
        grid.set_cell(row, col, Cell::Obstacle);
    }

    let solution = solve(&grid, &SolverParams::default()).expect("goal present");
    let path = reconstruct(&grid, &solution.policy);

    println!("Path: {}", format_path(&path));
    print!("{}", format_path_overlay(&grid, &path));

    assert_eq!(path, vec![State::new(2, 2)], "walk stalls inside the ring");
    assert_ne!(path.last(), Some(&State::new(0, 0)), "goal is unreachable");
}

#[test]
fn test_start_equals_first_and_goal_last_on_success() {
    println!("\n=== Test: Full Walk Endpoints ===");

    let mut grid = Grid::new(4, 4);
    grid.set_cell(3, 0, Cell::Start);
    grid.set_cell(0, 3, Cell::Goal);

    let solution = solve(&grid, &SolverParams::default()).expect("solvable grid");
    let path = reconstruct(&grid, &solution.policy);

    assert_eq!(path.first(), Some(&State::new(3, 0)));
    assert_eq!(path.last(), Some(&State::new(0, 3)));
    assert_eq!(path.len(), 7, "Manhattan-shortest route visits 7 cells");
}
