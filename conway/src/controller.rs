// controller.rs - Run/pause state machine and input dispatch around a Grid

use log::{debug, error, info, warn};

use crate::config::Config;
use crate::error::GridError;
use crate::grid::Grid;
use crate::patterns::{self, PATTERNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Decoded input, one variant per thing the user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Quit,
    MoveCursor(Direction),
    ToggleRun,
    SingleStep,
    Clear,
    Randomize,
    ToggleCellAtCursor,
    /// Pixel position inside the field.
    PointAndToggle { x: u32, y: u32 },
    /// Index into [`PATTERNS`], stamped at the cursor.
    StampPattern(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Paused,
    Running,
}

/// Whether the host should keep ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Cell the user is pointing at, kept inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub col: usize,
    pub row: usize,
}

/// What a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub grid: &'a Grid,
    pub cursor: Cursor,
    pub generation: u64,
    pub population: usize,
    pub running: bool,
}

pub struct Controller {
    grid: Grid,
    mode: Mode,
    cursor: Cursor,
    cell_size: u32,
    random_life: f64,
}

impl Controller {
    /// Paused, cursor in the middle of the field.
    pub fn new(grid: Grid, config: &Config) -> Self {
        let (cols, rows) = grid.dimensions();
        Self {
            grid,
            mode: Mode::Paused,
            cursor: Cursor { col: cols / 2, row: rows / 2 },
            cell_size: config.cell_size.max(1),
            random_life: config.random_life,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Grid::from_config(config), config)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn view(&self) -> View<'_> {
        View {
            grid: &self.grid,
            cursor: self.cursor,
            generation: self.grid.generation(),
            population: self.grid.population(),
            running: self.is_running(),
        }
    }

    /// One host tick: step if running, then apply `events` in order.
    ///
    /// Stops at the first `Quit`; anything queued after it is dropped.
    pub fn tick<I>(&mut self, events: I) -> Flow
    where
        I: IntoIterator<Item = Event>,
    {
        if self.is_running() {
            self.grid.step();
        }
        for event in events {
            if self.handle(event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    pub fn handle(&mut self, event: Event) -> Flow {
        debug!("event {event:?}");
        match event {
            Event::Quit => {
                info!("quit requested at generation {}", self.grid.generation());
                return Flow::Quit;
            }
            Event::MoveCursor(direction) => self.move_cursor(direction),
            Event::ToggleRun => {
                self.mode = match self.mode {
                    Mode::Paused => Mode::Running,
                    Mode::Running => Mode::Paused,
                };
                info!("simulation {:?}", self.mode);
            }
            Event::SingleStep => self.grid.step(),
            Event::Clear => self.grid.clear(),
            Event::Randomize => self.grid.randomize(self.random_life),
            Event::ToggleCellAtCursor => self.toggle_at_cursor(),
            Event::PointAndToggle { x, y } => {
                let (cols, rows) = self.grid.dimensions();
                let col = (x / self.cell_size) as usize;
                let row = (y / self.cell_size) as usize;
                if col >= cols || row >= rows {
                    debug!("click at ({x}, {y}) is outside the field");
                } else {
                    self.cursor = Cursor { col, row };
                    self.toggle_at_cursor();
                }
            }
            Event::StampPattern(index) => match PATTERNS.get(index) {
                Some(pattern) => {
                    let placed = patterns::stamp(
                        &mut self.grid,
                        pattern,
                        (self.cursor.col, self.cursor.row),
                    );
                    info!("stamped {} ({placed} cells)", pattern.name);
                }
                None => warn!("no pattern at index {index}"),
            },
        }
        Flow::Continue
    }

    fn move_cursor(&mut self, direction: Direction) {
        let (cols, rows) = self.grid.dimensions();
        let Cursor { col, row } = &mut self.cursor;
        match direction {
            Direction::Left => *col = col.saturating_sub(1),
            Direction::Right => *col = (*col + 1).min(cols.saturating_sub(1)),
            Direction::Up => *row = row.saturating_sub(1),
            Direction::Down => *row = (*row + 1).min(rows.saturating_sub(1)),
        }
    }

    fn toggle_at_cursor(&mut self) {
        let Cursor { col, row } = self.cursor;
        if let Err(err) = self.grid.toggle(col, row) {
            invariant_broken(err);
        }
    }
}

/// The cursor is always clamped, so a failed toggle means a bug here.
fn invariant_broken(err: GridError) {
    if cfg!(debug_assertions) {
        panic!("cursor escaped the grid: {err}");
    }
    error!("cursor escaped the grid: {err}");
}
