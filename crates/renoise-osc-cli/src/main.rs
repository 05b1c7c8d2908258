//! renoise-osc - remote control for Renoise from the command line
//!
//! Every subcommand sends a single OSC message to Renoise's built-in OSC
//! server and exits.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use renoise_osc_client::{Renoise, SendOutcome};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;
mod config;

use config::CliConfig;

/// Send OSC commands to a running Renoise
#[derive(Parser)]
#[command(name = "renoise-osc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Renoise host (overrides the config file)
    #[arg(short = 'H', long, global = true, env = "RENOISE_OSC_HOST")]
    host: Option<String>,

    /// Renoise OSC port (overrides the config file)
    #[arg(short, long, global = true, env = "RENOISE_OSC_PORT")]
    port: Option<u16>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> bool {
        matches!(toggle, Toggle::On)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Set the tempo (32-999)
    Bpm { bpm: i32 },

    /// Set lines per beat (1-256)
    Lpb { lpb: i32 },

    /// Set the keyboard octave (0-8)
    Octave { octave: i32 },

    /// Turn edit mode on or off
    EditMode { state: Toggle },

    /// Turn the metronome on or off
    Metronome { state: Toggle },

    /// Start playback
    Start,

    /// Stop playback
    Stop,

    /// Continue playback from the current position
    Continue,

    /// Stop all playing notes
    Panic,

    /// Evaluate a Lua expression inside Renoise
    Evaluate { code: String },

    /// Play a note (0-119)
    #[command(allow_negative_numbers = true)]
    NoteOn {
        note: i32,

        /// Velocity (0-127)
        #[arg(short, long, default_value = "127")]
        velocity: i32,

        /// Instrument index, -1 for the selected one
        #[arg(short, long, default_value = "-1")]
        instrument: i32,

        /// Track index, -1 for the selected one
        #[arg(short, long, default_value = "-1")]
        track: i32,
    },

    /// Release a note (0-119)
    #[command(allow_negative_numbers = true)]
    NoteOff {
        note: i32,

        /// Instrument index, -1 for the selected one
        #[arg(short, long, default_value = "-1")]
        instrument: i32,

        /// Track index, -1 for the selected one
        #[arg(short, long, default_value = "-1")]
        track: i32,
    },

    /// Set a track's volume (clamped to +3 dB)
    #[command(allow_negative_numbers = true)]
    TrackVolume {
        /// Track index, -1 for the selected one
        track: i32,

        volume: f64,

        /// Interpret the volume in dB
        #[arg(long)]
        db: bool,

        /// Set the post-FX volume instead of pre-FX
        #[arg(long)]
        post: bool,
    },

    /// Set an instrument's volume (clamped to +6 dB)
    #[command(allow_negative_numbers = true)]
    InstrumentVolume {
        /// Instrument index, -1 for the selected one
        instrument: i32,

        volume: f64,

        /// Interpret the volume in dB
        #[arg(long)]
        db: bool,
    },

    /// Send a raw OSC message
    Send {
        /// Full OSC address, e.g. /renoise/song/bpm
        address: String,

        /// Type tags from i, h, d, s, T, F, m
        #[arg(default_value = "")]
        tags: String,

        /// One value per tag except T and F; MIDI as port,status,data1,data2
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Show the effective destination and version info
    Info {
        /// Print the destination as a config file
        #[arg(long = "toml")]
        as_toml: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli.log_level, cli.json_logs)?;

    let (config, config_path) = CliConfig::resolve(cli.config.as_deref())?;
    let config = config.with_overrides(cli.host, cli.port);
    debug!(?config, "Effective configuration");
    let renoise = config
        .builder()
        .build()
        .context("Failed to set up the Renoise destination")?;

    let outcome = match cli.command {
        Commands::Bpm { bpm } => renoise.set_bpm(bpm)?,
        Commands::Lpb { lpb } => renoise.set_lpb(lpb)?,
        Commands::Octave { octave } => renoise.set_octave(octave)?,
        Commands::EditMode { state } => renoise.set_edit_mode(state.into())?,
        Commands::Metronome { state } => renoise.set_metronome(state.into())?,
        Commands::Start => renoise.start()?,
        Commands::Stop => renoise.stop()?,
        Commands::Continue => renoise.continue_playback()?,
        Commands::Panic => renoise.panic()?,
        Commands::Evaluate { code } => renoise.evaluate(&code)?,

        Commands::NoteOn {
            note,
            velocity,
            instrument,
            track,
        } => renoise.note_on(instrument, track, note, velocity)?,

        Commands::NoteOff {
            note,
            instrument,
            track,
        } => renoise.note_off(instrument, track, note)?,

        Commands::TrackVolume {
            track,
            volume,
            db,
            post,
        } => match (post, db) {
            (false, false) => renoise.set_track_prefx_volume(track, volume)?,
            (false, true) => renoise.set_track_prefx_volume_db(track, volume)?,
            (true, false) => renoise.set_track_postfx_volume(track, volume)?,
            (true, true) => renoise.set_track_postfx_volume_db(track, volume)?,
        },

        Commands::InstrumentVolume {
            instrument,
            volume,
            db,
        } => {
            if db {
                renoise.set_instrument_volume_db(instrument, volume)?
            } else {
                renoise.set_instrument_volume(instrument, volume)?
            }
        }

        Commands::Send {
            address,
            tags,
            values,
        } => {
            let args = args::parse_args(&tags, &values)?;
            let bytes = renoise
                .send_message(&address, tags.trim_start_matches(','), &args)
                .with_context(|| format!("Failed to send {}", address))?;
            SendOutcome::Sent { bytes }
        }

        Commands::Info { as_toml } => {
            if as_toml {
                print!("{}", toml::to_string(&renoise.destination())?);
            } else {
                print_info(&renoise, config_path.as_deref());
            }
            return Ok(());
        }
    };

    report(&renoise, &outcome);
    Ok(())
}

fn setup_logging(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("Failed to parse log level")?;

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .init();
    }

    Ok(())
}

/// Rejections are reported, not failed
fn report(renoise: &Renoise, outcome: &SendOutcome) {
    match outcome {
        SendOutcome::Sent { bytes } => {
            println!(
                "{} {} bytes to {}",
                "sent".green().bold(),
                bytes,
                renoise.destination()
            );
        }
        SendOutcome::Rejected(rejection) => {
            println!("{} {}", "not sent:".yellow().bold(), rejection);
        }
    }
}

fn print_info(renoise: &Renoise, config_path: Option<&Path>) {
    println!("{}", "renoise-osc - Renoise OSC remote control".cyan().bold());
    println!();
    println!("Version:     {}", env!("CARGO_PKG_VERSION"));
    println!("Destination: {}", renoise.destination());
    match renoise.registry().bind_addr() {
        Some(addr) => println!("Bind:        {}", addr),
        None => println!("Bind:        [::]:0 (dual-stack, 0.0.0.0:0 without IPv6)"),
    }
    match config_path {
        Some(path) => println!("Config:      {}", path.display()),
        None => println!("Config:      (none)"),
    }
    println!();
    println!("{}", "Examples:".green());
    println!("  renoise-osc bpm 140                       # Set the tempo");
    println!("  renoise-osc note-on 48 -v 100             # Play C-4 on the selected track");
    println!("  renoise-osc track-volume 1 -6 --db        # Pre-FX volume of track 1");
    println!("  renoise-osc send /renoise/song/lpb i 8    # Raw OSC message");
    println!("  renoise-osc --host 192.168.1.20 start     # Remote Renoise");
}
