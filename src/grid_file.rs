use crate::grid::{Cell, Grid, State};
use serde::{Deserialize, Serialize};
use std::fs;

/// Grid snapshot for saving/loading
/// Cells are stored as flat IDs to keep the files small and diffable
#[derive(Debug, Serialize, Deserialize)]
pub struct GridFile {
    /// Grid dimensions
    pub rows: i32,
    pub cols: i32,
    /// Start and goal cells (absent if not painted yet)
    pub start_cell: Option<i32>,
    pub goal_cell: Option<i32>,
    /// Obstacle cells
    pub obstacle_cells: Vec<i32>,
}

impl GridFile {
    /// Create a snapshot from a grid
    pub fn from_grid(grid: &Grid) -> Self {
        let mut start_cell = None;
        let mut goal_cell = None;
        let mut obstacle_cells = Vec::new();

        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let id = grid.get_id(row, col);
                match grid.get_cell(row, col) {
                    Cell::Start => start_cell = Some(id),
                    Cell::Goal => goal_cell = Some(id),
                    Cell::Obstacle => obstacle_cells.push(id),
                    Cell::Free => {}
                }
            }
        }

        GridFile {
            rows: grid.rows,
            cols: grid.cols,
            start_cell,
            goal_cell,
            obstacle_cells,
        }
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize grid file: {}", e))?;

        fs::write(path, json)
            .map_err(|e| format!("Failed to write grid file: {}", e))?;

        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read grid file: {}", e))?;

        let grid_file: GridFile = serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse grid file: {}", e))?;

        Ok(grid_file)
    }

    /// Rebuild the grid from this snapshot
    pub fn restore_grid(&self) -> Grid {
        let mut grid = Grid::with_obstacles(self.rows, self.cols, &self.obstacle_cells);

        if let Some(id) = self.start_cell {
            let (row, col) = grid.get_coords(id);
            grid.set_cell(row, col, Cell::Start);
        }
        if let Some(id) = self.goal_cell {
            let (row, col) = grid.get_coords(id);
            grid.set_cell(row, col, Cell::Goal);
        }

        grid
    }

    /// Start position recorded in the snapshot, if any
    pub fn start(&self) -> Option<State> {
        self.start_cell.map(|id| {
            let (row, col) = (id / self.cols, id % self.cols);
            State::new(row, col)
        })
    }

    /// Goal position recorded in the snapshot, if any
    pub fn goal(&self) -> Option<State> {
        self.goal_cell.map(|id| {
            let (row, col) = (id / self.cols, id % self.cols);
            State::new(row, col)
        })
    }
}
