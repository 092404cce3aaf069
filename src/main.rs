use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use launchpad_kit::launchpad::pattern::{checkerboard, random_pattern};
use launchpad_kit::midi::{find_destination, find_source};
use launchpad_kit::{
    Color, Config, ControlCommand, Destination, GridCommandBuilder, GridSpec, LaunchpadInput,
    LaunchpadOutput, Layout, MidiSender, Source, TopButton, create_event_channel, drain_events,
};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PatternArg {
    Random,
    Checkerboard,
}

/// Light a Launchpad S grid and print what is pressed on it.
#[derive(Parser)]
#[command(name = "launchpad_kit", version)]
struct Args {
    /// Config file (RON); defaults to the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exact name of the MIDI destination and source
    #[arg(long)]
    device: Option<String>,

    /// MIDI channel (0-15)
    #[arg(long)]
    channel: Option<u8>,

    /// Seed for the random pattern
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "random")]
    pattern: PatternArg,

    /// Use the drum rack note layout instead of X-Y
    #[arg(long)]
    drum_rack: bool,

    /// List MIDI destinations and sources, then exit
    #[arg(long)]
    list: bool,

    /// Exit after sending instead of listening for presses
    #[arg(long)]
    no_listen: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let path = args.config.clone().or_else(Config::default_path);
    let mut config = match &path {
        Some(path) => Config::load_or_default(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(device) = &args.device {
        config.device_name = device.clone();
    }
    if let Some(channel) = args.channel {
        config.channel = channel;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.drum_rack {
        config.layout = Layout::DrumRack;
    }

    config.validate()?;
    Ok(config)
}

fn list_endpoints() {
    println!("=== MIDI destinations ===");
    for destination in Destination::snapshot() {
        println!("  [{}] {}", destination.index(), destination.name());
    }
    println!("=== MIDI sources ===");
    for source in Source::snapshot() {
        println!("  [{}] {}", source.index(), source.name());
    }
}

fn light_grid(config: &Config, pattern: PatternArg) -> Result<()> {
    let Some(destination) = find_destination(&config.device_name) else {
        bail!("MIDI destination '{}' not found", config.device_name);
    };

    let channel = config.channel()?;
    let mut output = LaunchpadOutput::connect(&destination, &config.client_name)?;

    output.send_control(&ControlCommand::Reset, channel)?;
    if config.layout != Layout::XY {
        output.send_control(&ControlCommand::SetLayout(config.layout), channel)?;
    }

    let builder = GridCommandBuilder::new(GridSpec::full(config.layout));
    let commands = match pattern {
        PatternArg::Random => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            builder.fill_grid(random_pattern(&mut rng))
        }
        PatternArg::Checkerboard => builder.fill_grid(checkerboard(Color::AMBER, Color::OFF)),
    };

    let sent = output.send_commands(&commands, channel)?;
    output.send_control(
        &ControlCommand::TopButton {
            button: TopButton::new(1)?,
            color: Color::AMBER,
        },
        channel,
    )?;

    info!("{} pad commands sent to {}", sent, output.destination_name());
    output.close();
    Ok(())
}

fn listen(config: &Config) -> Result<()> {
    let Some(source) = find_source(&config.device_name) else {
        warn!("MIDI source '{}' not found, not listening", config.device_name);
        return Ok(());
    };

    let (event_tx, mut event_rx) = create_event_channel(config.event_buffer_capacity);
    let input = LaunchpadInput::connect(&source, &config.client_name, config.layout, event_tx)?;

    // Stdin closing (Ctrl-D or Enter) ends the session
    let running = Arc::new(AtomicBool::new(true));
    let stdin_flag = Arc::clone(&running);
    thread::spawn(move || {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => debug!("stdin closed, stopping"),
            Ok(_) => debug!("Enter pressed, stopping"),
            Err(e) => debug!("stdin read failed ({}), stopping", e),
        }
        stdin_flag.store(false, Ordering::Relaxed);
    });

    println!("Listening on {} - press Enter to quit", input.source_name());
    while running.load(Ordering::Relaxed) {
        for event in drain_events(&mut event_rx) {
            println!("{:?}", event);
        }
        thread::sleep(EVENT_POLL_INTERVAL);
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        list_endpoints();
        return Ok(());
    }

    let config = load_config(&args)?;
    info!("Using device '{}' on channel {}", config.device_name, config.channel);

    light_grid(&config, args.pattern)?;

    if !args.no_listen {
        listen(&config)?;
    }

    Ok(())
}
