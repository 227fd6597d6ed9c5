//! fuzzwave CLI - render note tracks to WAV files

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fuzzwave::dsp::renderer::{TrackSets, build_wave};
use fuzzwave::song::Song;
use fuzzwave::{RenderConfig, demo};
use tracing::info;

#[derive(Parser)]
#[command(name = "fuzzwave")]
#[command(about = "Render sine-tone note tracks to PCM WAV files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RenderArgs {
    /// Sample rate in Hz (default: song value or 44100)
    #[arg(short, long)]
    sample_rate: Option<u32>,

    /// Nominal note length in seconds (default: song value or 1/60)
    #[arg(short, long)]
    time_step: Option<f64>,

    /// Headroom level; each mixed track lowers it by one (default: song value or 10)
    #[arg(short, long, allow_negative_numbers = true)]
    volume: Option<i32>,
}

impl RenderArgs {
    fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(sample_rate) = self.sample_rate {
            config.sample_rate = sample_rate;
        }
        if let Some(time_step) = self.time_step {
            config.time_step = time_step;
        }
        if let Some(volume) = self.volume {
            config.base_volume = volume;
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in demonstration track (mono)
    Demo {
        /// Output WAV file path
        #[arg(short, long, default_value = "demo_wave_gen_fuzzy.wav")]
        output: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Render a JSON song document
    Render {
        /// Song document (.json)
        input: PathBuf,

        /// Output WAV file path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { output, render } => {
            let config = render.apply(RenderConfig::default());
            let track = demo::demo_track();
            info!("Rendering demo track ({} notes)", track.len());
            build_wave(&output, &TrackSets::mono(vec![track]), &config)?;
        }
        Commands::Render {
            input,
            output,
            render,
        } => {
            let source = std::fs::read_to_string(&input)?;
            let song = Song::from_json(&source)?;
            let config = render.apply(song.config);
            info!("Rendering {}", input.display());
            build_wave(&output, &song.track_sets(), &config)?;
        }
    }

    Ok(())
}
