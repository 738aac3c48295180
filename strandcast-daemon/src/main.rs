//! strandcastd - bring-up daemon for multi-lane LED strip devices
//!
//! Parses options, constructs one output device, and drives it with a
//! test pattern through the same contract a PixelPusher protocol server
//! uses. Runs for the requested number of frames, or forever.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use strandcast_core::traits::OutputDevice;
use strandcast_core::{ChipFamily, DeviceConfig, StrandDevice};
use strandcast_drivers::{ChipStrip, MemoryLanes};
use strandcast_protocol::PusherCommand;

mod config;
mod pattern;

use config::FileConfig;
use pattern::TestPattern;

#[derive(Debug, Parser)]
#[command(name = "strandcastd", about = "Drive multi-lane LED strips with a bring-up pattern")]
struct Args {
    /// Number of connected LED strips
    #[arg(short = 'S', long)]
    strips: Option<u8>,

    /// Length of LED strips in pixels
    #[arg(short = 'L', long)]
    length: Option<u32>,

    /// LED chip family of the connected strips
    #[arg(short = 'c', long, value_enum)]
    chip: Option<ChipArg>,

    /// TOML configuration file; explicit flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second for the bring-up pattern
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Number of frames to push before exiting (0 = run forever)
    #[arg(long, default_value_t = 0)]
    frames: u64,

    /// Raw 16-bit global brightness, applied through the command path
    #[arg(long)]
    brightness: Option<u16>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChipArg {
    Apa102,
    Lpd6803,
}

impl From<ChipArg> for ChipFamily {
    fn from(chip: ChipArg) -> Self {
        match chip {
            ChipArg::Apa102 => ChipFamily::Apa102,
            ChipArg::Lpd6803 => ChipFamily::Lpd6803,
        }
    }
}

fn load_config(args: &Args) -> Result<DeviceConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            FileConfig::parse(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
                .device
        }
        None => DeviceConfig::default(),
    };

    if let Some(strips) = args.strips {
        config.strip_count = strips;
    }
    if let Some(length) = args.length {
        config.pixels_per_strip = length;
    }
    if let Some(chip) = args.chip {
        config.chip = chip.into();
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = load_config(&args)?;
    let chip = config.chip;

    info!(
        "configuring {} strips x {} pixels, {} at {} MHz",
        config.strip_count,
        config.pixels_per_strip,
        chip.name(),
        chip.clock_mhz()
    );

    let bus = MemoryLanes::new(config.strip_count, chip.clock_mhz());
    let mut device = StrandDevice::new(bus, &config, |bus, lane, count| {
        ChipStrip::create(chip, &*bus, lane, count)
    })
    .map_err(|err| anyhow!("device construction failed: {err}"))?;

    if let Some(raw) = args.brightness {
        let cmd = PusherCommand::GlobalBrightness { raw };
        device.handle_pusher_command(&cmd.encode());
    }

    run(&mut device, args.fps, args.frames)
}

fn run(
    device: &mut StrandDevice<ChipStrip, MemoryLanes>,
    fps: u32,
    frames: u64,
) -> Result<()> {
    let frame_period = Duration::from_secs(1) / fps.max(1);
    let mut pattern = TestPattern::new();
    let mut pushed: u64 = 0;

    info!("pushing frames every {} ms", frame_period.as_millis());
    loop {
        pattern.paint(device);
        device
            .flush_frame()
            .map_err(|err| anyhow!("frame transmission failed: {err}"))?;

        pushed += 1;
        if pushed % 300 == 0 {
            info!(
                "{} frames pushed, {} transmission passes",
                pushed,
                device.bus().transmission_count()
            );
        }
        if frames != 0 && pushed >= frames {
            break;
        }
        thread::sleep(frame_period);
    }

    info!("done after {pushed} frames");
    Ok(())
}
