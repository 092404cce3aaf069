use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use launchpad_kit::launchpad::pattern::{checkerboard, random_pattern};
use launchpad_kit::{Color, GridCommandBuilder, GridSpec, Layout};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Building a full grid, per layout
fn bench_fill_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_grid");

    for layout in [Layout::XY, Layout::DrumRack] {
        let builder = GridCommandBuilder::new(GridSpec::full(layout));

        group.bench_with_input(
            BenchmarkId::new("checkerboard", format!("{:?}", layout)),
            &builder,
            |b, builder| {
                b.iter(|| black_box(builder.fill_grid(checkerboard(Color::RED, Color::OFF))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("random", format!("{:?}", layout)),
            &builder,
            |b, builder| {
                let mut rng = StdRng::seed_from_u64(1);
                b.iter(|| black_box(builder.fill_grid(random_pattern(&mut rng))));
            },
        );
    }
    group.finish();
}

/// Encoding commands to wire bytes
fn bench_encode(c: &mut Criterion) {
    let commands =
        GridCommandBuilder::default().fill_grid(checkerboard(Color::AMBER, Color::GREEN));
    let channel = launchpad_kit::Channel::default();

    c.bench_function("encode_grid", |b| {
        b.iter(|| {
            for cmd in &commands {
                black_box(cmd.to_bytes(channel));
            }
        });
    });
}

criterion_group!(benches, bench_fill_grid, bench_encode);
criterion_main!(benches);
