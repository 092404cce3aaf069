// Grid command builder - one addressed command per pad, row-major

use std::convert::Infallible;

use crate::error::{LaunchpadError, LaunchpadResult};
use crate::launchpad::color::Color;
use crate::launchpad::command::Command;
use crate::launchpad::layout::{GRID_COLUMNS, GRID_ROWS, Layout};

/// Validated grid dimensions and the layout used to address them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    rows: usize,
    columns: usize,
    layout: Layout,
}

impl GridSpec {
    /// A `rows` x `columns` region anchored at the top-left pad.
    ///
    /// Fails when the region does not fit the physical 8x8 grid.
    pub fn new(rows: usize, columns: usize, layout: Layout) -> LaunchpadResult<Self> {
        if rows > GRID_ROWS || columns > GRID_COLUMNS {
            return Err(LaunchpadError::InvalidGeometry { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            layout,
        })
    }

    /// The whole pad grid
    pub fn full(layout: Layout) -> Self {
        Self {
            rows: GRID_ROWS,
            columns: GRID_COLUMNS,
            layout,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Cell coordinates in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| (row, column)))
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::full(Layout::default())
    }
}

/// Turns a per-cell generator into the commands that light a grid.
///
/// The generator is called exactly once per cell, in row-major order
/// (every column of row 0, then row 1, ...). The builder has no state of its
/// own and never adds randomness; a generator that uses an RNG sees its draws
/// in that same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridCommandBuilder {
    spec: GridSpec,
}

impl GridCommandBuilder {
    pub fn new(spec: GridSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn fill_grid<F>(&self, mut generator: F) -> Vec<Command>
    where
        F: FnMut(usize, usize) -> Color,
    {
        match self.try_fill_grid(|row, column| Ok::<_, Infallible>(generator(row, column))) {
            Ok(commands) => commands,
            Err(never) => match never {},
        }
    }

    /// Like `fill_grid` for a fallible generator.
    ///
    /// The first error is returned unchanged and the commands built so far
    /// are dropped.
    pub fn try_fill_grid<F, E>(&self, mut generator: F) -> Result<Vec<Command>, E>
    where
        F: FnMut(usize, usize) -> Result<Color, E>,
    {
        let layout = self.spec.layout;
        let mut commands = Vec::with_capacity(self.spec.cell_count());

        for (row, column) in self.spec.cells() {
            let color = generator(row, column)?;
            commands.push(command_at(layout, row, column, color));
        }

        Ok(commands)
    }
}

fn command_at(layout: Layout, row: usize, column: usize, color: Color) -> Command {
    match Command::pad(layout, row, column, color) {
        Some(command) => command,
        // GridSpec only admits regions inside the grid
        None => unreachable!("pad ({row}, {column}) outside the grid"),
    }
}

#[track_caller]
fn xy_spec(rows: usize, columns: usize) -> GridSpec {
    match GridSpec::new(rows, columns, Layout::XY) {
        Ok(spec) => spec,
        Err(e) => panic!("{e}"),
    }
}

/// Build the commands for a `rows` x `columns` region in the X-Y layout.
///
/// # Panics
///
/// Panics when the region does not fit the 8x8 grid. Use [`GridSpec::new`]
/// and [`GridCommandBuilder`] to check the geometry first.
#[track_caller]
pub fn fill_grid<F>(rows: usize, columns: usize, generator: F) -> Vec<Command>
where
    F: FnMut(usize, usize) -> Color,
{
    GridCommandBuilder::new(xy_spec(rows, columns)).fill_grid(generator)
}

/// Fallible counterpart of [`fill_grid`].
#[track_caller]
pub fn try_fill_grid<F, E>(rows: usize, columns: usize, generator: F) -> Result<Vec<Command>, E>
where
    F: FnMut(usize, usize) -> Result<Color, E>,
{
    GridCommandBuilder::new(xy_spec(rows, columns)).try_fill_grid(generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launchpad::color::Brightness;
    use std::collections::HashSet;

    fn diagonal(row: usize, column: usize) -> Color {
        if row == column { Color::GREEN } else { Color::OFF }
    }

    #[test]
    fn test_full_grid_covers_every_cell_once() {
        let commands = fill_grid(8, 8, diagonal);
        assert_eq!(commands.len(), 64);

        let cells: HashSet<(usize, usize)> =
            commands.iter().map(|c| (c.row(), c.column())).collect();
        assert_eq!(cells.len(), 64);
        for row in 0..8 {
            for column in 0..8 {
                assert!(cells.contains(&(row, column)));
            }
        }
    }

    #[test]
    fn test_addresses_are_unique() {
        for layout in [Layout::XY, Layout::DrumRack] {
            let commands = GridCommandBuilder::new(GridSpec::full(layout)).fill_grid(diagonal);
            let addresses: HashSet<u8> = commands.iter().map(Command::address).collect();
            assert_eq!(addresses.len(), 64);
        }
    }

    #[test]
    fn test_row_major_call_order() {
        let mut calls = Vec::new();
        let commands = fill_grid(2, 2, |row, column| {
            calls.push((row, column));
            Color::OFF
        });

        let expected = vec![(0, 0), (0, 1), (1, 0), (1, 1)];
        assert_eq!(calls, expected);
        let emitted: Vec<(usize, usize)> =
            commands.iter().map(|c| (c.row(), c.column())).collect();
        assert_eq!(emitted, expected);
    }

    #[test]
    fn test_payload_and_address_follow_cell() {
        let commands = fill_grid(8, 8, diagonal);
        let cmd = commands[9];
        assert_eq!((cmd.row(), cmd.column()), (1, 1));
        assert_eq!(cmd.address(), 0x11);
        assert_eq!(cmd.color(), Color::GREEN);
        assert_eq!(commands[10].color(), Color::OFF);
    }

    #[test]
    fn test_pure_generator_is_deterministic() {
        let generator = |row: usize, column: usize| {
            Color::new(
                Brightness::from_level((row % 4) as u8).unwrap(),
                Brightness::from_level((column % 4) as u8).unwrap(),
            )
        };
        assert_eq!(fill_grid(8, 8, generator), fill_grid(8, 8, generator));
    }

    #[test]
    fn test_generator_error_discards_prefix() {
        let mut calls = 0;
        let result: Result<Vec<Command>, String> = try_fill_grid(8, 8, |row, column| {
            calls += 1;
            if calls == 5 {
                Err(format!("generator failed at ({row}, {column})"))
            } else {
                Ok(Color::RED)
            }
        });

        assert_eq!(result, Err("generator failed at (0, 4)".to_string()));
        assert_eq!(calls, 5);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_generator_panic_propagates() {
        let mut calls = 0;
        fill_grid(8, 8, |_, _| {
            calls += 1;
            if calls == 5 {
                panic!("boom");
            }
            Color::OFF
        });
    }

    #[test]
    fn test_geometry_is_checked() {
        assert!(GridSpec::new(8, 8, Layout::XY).is_ok());
        assert!(matches!(
            GridSpec::new(9, 8, Layout::XY),
            Err(LaunchpadError::InvalidGeometry { rows: 9, columns: 8 })
        ));
        assert!(GridSpec::new(8, 9, Layout::DrumRack).is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid grid geometry")]
    fn test_fill_grid_rejects_oversized_region() {
        fill_grid(8, 16, diagonal);
    }

    #[test]
    fn test_empty_region() {
        let mut calls = 0;
        let commands = fill_grid(0, 8, |_, _| {
            calls += 1;
            Color::OFF
        });
        assert!(commands.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_scene_column_is_never_emitted() {
        let commands = fill_grid(8, 8, diagonal);
        assert!(
            commands
                .iter()
                .all(|c| Layout::XY.scene_row_of(c.address()).is_none())
        );
    }
}
