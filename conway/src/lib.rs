// lib.rs - Conway's Game of Life: grid engine and interaction controller
//
// The grid knows nothing about input or drawing. The controller owns the
// grid, the cursor and the run flag, and turns decoded input events into
// grid operations once per host tick.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;

pub use config::Config;
pub use controller::{Controller, Cursor, Direction, Event, Flow, Mode, View};
pub use error::{ConfigError, GridError};
pub use grid::{Cell, Grid};
