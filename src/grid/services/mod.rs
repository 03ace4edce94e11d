//! Orchestration services for the assignment grid.

mod board;
mod config;
mod grid;

pub use board::{BoardError, BoardResult, MatrixBoard};
pub use config::GridConfig;
pub use grid::AssignmentGrid;
