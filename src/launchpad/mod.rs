// Launchpad S protocol: colors, pad addressing, commands and the grid builder

pub mod color;
pub mod command;
pub mod event;
pub mod grid;
pub mod layout;
pub mod pattern;

pub use color::{Brightness, BufferFlags, Color};
pub use command::{Channel, Command, ControlCommand, TopButton};
pub use event::LaunchpadEvent;
pub use grid::{GridCommandBuilder, GridSpec, fill_grid, try_fill_grid};
pub use layout::{GRID_COLUMNS, GRID_ROWS, Layout};
