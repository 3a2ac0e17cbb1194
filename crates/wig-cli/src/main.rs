mod report;
mod server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::{ServiceExt, transport::stdio};
use serde_json::Value;
use wig_core::{DEFAULT_KEYFRAME_COUNT, Waveform};

use report::SequenceSource;

#[derive(Parser)]
#[command(name = "wig", about = "Wig aesthetic morphospace CLI and MCP server")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server on stdio transport
    Serve,

    /// List rhythmic presets
    Presets,

    /// Show morphospace coordinates of one state, or all states
    States {
        /// State identifier
        id: Option<String>,
    },

    /// Generate a rhythmic sequence from a preset or two states
    Sequence {
        /// Curated preset name
        #[arg(
            long,
            conflicts_with_all = ["state_a", "state_b"],
            required_unless_present_all = ["state_a", "state_b"]
        )]
        preset: Option<String>,

        /// Starting state
        #[arg(long, requires = "state_b")]
        state_a: Option<String>,

        /// Alternating state
        #[arg(long, requires = "state_a")]
        state_b: Option<String>,

        /// sinusoidal, triangular or square
        #[arg(long, default_value = "sinusoidal")]
        waveform: Waveform,

        /// Number of cycles (may be fractional)
        #[arg(long, default_value_t = 3.0)]
        cycles: f64,

        /// Samples per cycle
        #[arg(long, default_value_t = 20)]
        period: usize,

        /// Starting phase, in cycles
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        phase_offset: f64,
    },

    /// Classify a state (name or JSON coordinates) against the visual types
    Classify {
        /// State identifier or JSON object of parameters
        state: String,

        /// Keyword strength in [0, 1]
        #[arg(long, default_value_t = 1.0)]
        strength: f64,
    },

    /// Compare two states (names or JSON coordinates)
    Distance {
        a: String,
        b: String,
    },

    /// Composite image prompt for a state
    Prompt {
        /// State identifier or JSON object; defaults to the glamour_cascade centre
        state: Option<String>,

        /// Prompt prefix
        #[arg(long)]
        style: Option<String>,
    },

    /// Keyframe prompts along a preset trajectory
    Keyframes {
        /// Preset name
        preset: String,

        /// Number of keyframes
        #[arg(long, default_value_t = DEFAULT_KEYFRAME_COUNT)]
        count: usize,

        /// Prompt prefix
        #[arg(long)]
        style: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn print_json(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    wig_core::validate_tables().context("static morphospace tables are inconsistent")?;

    match cli.command {
        Commands::Serve => cmd_serve().await,
        Commands::Presets => print_json(&report::presets()),
        Commands::States { id } => cmd_states(id.as_deref()),
        Commands::Sequence {
            preset,
            state_a,
            state_b,
            waveform,
            cycles,
            period,
            phase_offset,
        } => {
            let source = match (preset, state_a, state_b) {
                (Some(preset), _, _) => SequenceSource::Preset(preset),
                (None, Some(state_a), Some(state_b)) => SequenceSource::Custom {
                    state_a,
                    state_b,
                    waveform,
                    num_cycles: cycles,
                    steps_per_cycle: period,
                },
                _ => anyhow::bail!("provide --preset or both --state-a and --state-b"),
            };
            cmd_sequence(&source, phase_offset)
        }
        Commands::Classify { state, strength } => cmd_classify(&state, strength),
        Commands::Distance { a, b } => cmd_distance(&a, &b),
        Commands::Prompt { state, style } => cmd_prompt(state.as_deref(), style.as_deref()),
        Commands::Keyframes {
            preset,
            count,
            style,
        } => cmd_keyframes(&preset, count, style.as_deref()),
    }
}

async fn cmd_serve() -> Result<()> {
    tracing::info!("starting MCP server on stdio");

    let service = server::WigServer::new()
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await?;

    tracing::info!("MCP server stopped");
    Ok(())
}

fn cmd_states(id: Option<&str>) -> Result<()> {
    let value = report::states(id).context("failed to look up state")?;
    print_json(&value)
}

fn cmd_sequence(source: &SequenceSource, phase_offset: f64) -> Result<()> {
    let value = report::sequence(source, phase_offset).context("failed to build sequence")?;
    tracing::debug!(steps = %value["total_steps"], "built sequence");
    print_json(&value)
}

fn cmd_classify(state: &str, strength: f64) -> Result<()> {
    let params = report::parse_state(state).context("failed to read state")?;
    let value = report::vocabulary(&params, strength).context("failed to classify state")?;
    print_json(&value)
}

fn cmd_distance(a: &str, b: &str) -> Result<()> {
    let a = report::parse_state(a).context("failed to read first state")?;
    let b = report::parse_state(b).context("failed to read second state")?;
    let value = report::distance(&a, &b).context("failed to compare states")?;
    print_json(&value)
}

fn cmd_prompt(state: Option<&str>, style: Option<&str>) -> Result<()> {
    let params = state
        .map(report::parse_state)
        .transpose()
        .context("failed to read state")?;
    let value = report::composite(params.as_ref(), style).context("failed to build prompt")?;
    print_json(&value)
}

fn cmd_keyframes(preset: &str, count: usize, style: Option<&str>) -> Result<()> {
    let value =
        report::keyframe_prompts(preset, count, style).context("failed to extract keyframes")?;
    print_json(&value)
}
