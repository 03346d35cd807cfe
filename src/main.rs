use gridmdp::config::Config;
use gridmdp::grid_file::GridFile;
use gridmdp::path::{format_path, reconstruct};
use gridmdp::render::{format_path_overlay, format_policy, format_values};
use gridmdp::solver::{solve, SolverParams, Termination};
use gridmdp::{Cell, Grid};
use std::env;
use std::path::Path;

/// Build the fallback demo grid: start top-left, goal bottom-right,
/// no obstacles
fn demo_grid(size: i32) -> Grid {
    let size = size.max(1);
    let mut grid = Grid::new(size, size);
    grid.set_cell(0, 0, Cell::Start);
    grid.set_cell(size - 1, size - 1, Cell::Goal);
    grid
}

/// Resolve the grid to solve: explicit CLI argument first, then the
/// configured default grid file, then a generated demo grid
fn load_grid(config: &Config) -> Grid {
    let args: Vec<String> = env::args().collect();

    if let Some(path) = args.get(1) {
        match GridFile::load_from_file(path) {
            Ok(grid_file) => {
                println!("Loaded grid from {}", path);
                return grid_file.restore_grid();
            }
            Err(e) => {
                eprintln!("Warning: {}", e);
                eprintln!("Falling back to default grid");
            }
        }
    }

    let default_path = &config.default_grid_file.path;
    if Path::new(default_path).exists() {
        match GridFile::load_from_file(default_path) {
            Ok(grid_file) => {
                println!("Loaded grid from {}", default_path);
                return grid_file.restore_grid();
            }
            Err(e) => {
                eprintln!("Warning: {}", e);
                eprintln!("Falling back to generated demo grid");
            }
        }
    }

    println!("Using generated {0}x{0} demo grid", config.grid.size.max(1));
    demo_grid(config.grid.size)
}

fn main() {
    let config = Config::load();
    let grid = load_grid(&config);

    let params = SolverParams {
        discount: config.solver.discount,
        threshold: config.solver.threshold,
        max_sweeps: config.solver.max_sweeps,
    };

    let solution = match solve(&grid, &params) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("Cannot solve grid: {}", e);
            std::process::exit(1);
        }
    };

    match solution.termination {
        Termination::Converged { sweeps } => {
            println!("Converged after {} sweeps", sweeps);
        }
        Termination::DidNotConverge { sweeps, delta } => {
            eprintln!(
                "Warning: did not converge within {} sweeps (delta {:.6}); results are best-effort",
                sweeps, delta
            );
        }
    }

    if config.output.show_values {
        println!("\nValue matrix:");
        print!("{}", format_values(&grid, &solution.values));
    }

    if config.output.show_policy {
        println!("\nPolicy matrix:");
        print!("{}", format_policy(&grid, &solution.policy));
    }

    if config.output.show_path {
        let path = reconstruct(&grid, &solution.policy);
        println!("\nPath: {}", format_path(&path));
        if !path.is_empty() {
            print!("{}", format_path_overlay(&grid, &path));
            match (path.last(), grid.find_goal()) {
                (Some(&last), Some(goal)) if last == goal => {}
                _ => println!("(route blocked or incomplete - path shown is partial)"),
            }
        }
    }
}
