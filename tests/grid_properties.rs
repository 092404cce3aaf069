//! Properties of the grid builder and the enumerable domains,
//! exercised through the public API only.

use std::collections::HashSet;

use launchpad_kit::launchpad::pattern::random_pattern;
use launchpad_kit::{
    Brightness, Channel, Color, Command, Enumerable, GridCommandBuilder, GridSpec,
    LaunchpadResult, Layout, MidiSender, all, all_lazy, fill_grid, try_fill_grid,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_enumerable_all_equals_at_index() {
    let values = all::<Brightness>();
    assert_eq!(values.len(), Brightness::count());
    for (i, value) in values.iter().enumerate() {
        assert_eq!(*value, Brightness::at_index(i));
    }
    let lazy: Vec<Brightness> = all_lazy::<Brightness>().iter().collect();
    assert_eq!(lazy, values);
}

#[test]
fn test_full_grid_is_the_cross_product() {
    let mut rng = StdRng::seed_from_u64(2016);
    let commands = fill_grid(8, 8, random_pattern(&mut rng));
    assert_eq!(commands.len(), 64);

    let cells: HashSet<(usize, usize)> =
        commands.iter().map(|c| (c.row(), c.column())).collect();
    let expected: HashSet<(usize, usize)> =
        (0..8).flat_map(|r| (0..8).map(move |c| (r, c))).collect();
    assert_eq!(cells, expected);

    let addresses: HashSet<u8> = commands.iter().map(Command::address).collect();
    assert_eq!(addresses.len(), 64);
}

#[test]
fn test_seeded_runs_match() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        GridCommandBuilder::new(GridSpec::full(Layout::DrumRack))
            .fill_grid(random_pattern(&mut rng))
    };
    assert_eq!(run(5), run(5));
}

#[test]
fn test_fault_on_fifth_cell_yields_nothing() {
    #[derive(Debug, PartialEq)]
    struct Fault(usize);

    let mut calls = 0;
    let result = try_fill_grid(8, 8, |_, _| {
        calls += 1;
        if calls == 5 { Err(Fault(calls)) } else { Ok(Color::OFF) }
    });
    assert_eq!(result, Err(Fault(5)));
}

/// Collects the wire bytes a grid would produce
struct WireLog(Vec<[u8; 3]>);

impl MidiSender for WireLog {
    fn send(&mut self, message: &[u8]) -> LaunchpadResult<()> {
        self.0.push([message[0], message[1], message[2]]);
        Ok(())
    }
}

#[test]
fn test_wire_bytes_for_a_sub_grid() {
    let commands = fill_grid(1, 3, |_, column| match column {
        0 => Color::RED,
        1 => Color::GREEN,
        _ => Color::new(Brightness::Full, Brightness::Low),
    });

    let mut wire = WireLog(Vec::new());
    wire.send_commands(&commands, Channel::new(0).unwrap()).unwrap();
    assert_eq!(
        wire.0,
        vec![[0x90, 0x00, 0x0F], [0x90, 0x01, 0x3C], [0x90, 0x02, 0x1F]]
    );
}
