//! pixfx - deterministic image effects from the command line
//!
//! Thin wrapper over `pixfx-ops`: every subcommand reads one image, applies
//! one operation and writes the result to an explicit output path.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use pixfx_ops::Operation;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

#[derive(Parser)]
#[command(name = "pixfx")]
#[command(author, version, about = "Deterministic image effects")]
#[command(long_about = "
Applies simple, reproducible image effects: grayscale, invert, sepia,
black/white threshold, rotation, HSL adjustments and a warm vignette filter.

Examples:
  pixfx grayscale photo.jpg -o gray.png
  pixfx bw photo.jpg -o bw.png
  pixfx rotate photo.jpg -o turned.png --times 3
  pixfx hue photo.jpg -o shifted.png --delta -45
  pixfx filter photo.jpg -o styled.png --halo resources/halo.png
  pixfx resize photo.jpg -o thumb.png -w 320 --fit
  pixfx batch -i 'shots/*.png' -o out/ --op sepia --op lightness=0.1
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads for batch work (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Average the channels into gray
    #[command(visible_alias = "gray")]
    Grayscale(ImageArgs),

    /// Invert every channel
    Invert(ImageArgs),

    /// Apply a sepia tone
    Sepia(ImageArgs),

    /// Black/white at the median luminance
    #[command(visible_alias = "threshold")]
    Bw(ImageArgs),

    /// Rotate clockwise in quarter turns
    Rotate(RotateArgs),

    /// Rotate the hue
    Hue(HueArgs),

    /// Shift saturation
    Saturation(DeltaArgs),

    /// Shift lightness
    Lightness(DeltaArgs),

    /// Warm tint, vignette and film grain
    Filter(FilterArgs),

    /// Nearest-neighbor resize
    Resize(ResizeArgs),

    /// Apply operations to many files in parallel
    Batch(BatchArgs),
}

/// Input and output of a single-image command.
#[derive(Args)]
struct ImageArgs {
    /// Input image
    input: PathBuf,

    /// Output image (.png or .jpg)
    #[arg(short, long)]
    output: PathBuf,
}

/// Arguments for the `rotate` command.
#[derive(Args)]
struct RotateArgs {
    #[command(flatten)]
    io: ImageArgs,

    /// Number of clockwise quarter turns
    #[arg(short, long, default_value = "1")]
    times: u32,
}

/// Arguments for the `hue` command.
#[derive(Args)]
struct HueArgs {
    #[command(flatten)]
    io: ImageArgs,

    /// Degrees to add to the hue (wraps at 360)
    #[arg(short, long, allow_hyphen_values = true)]
    delta: i32,
}

/// Arguments for the `saturation` and `lightness` commands.
#[derive(Args)]
struct DeltaArgs {
    #[command(flatten)]
    io: ImageArgs,

    /// Amount to add, result clamped to [0, 1]
    #[arg(short, long, allow_hyphen_values = true)]
    delta: f64,
}

/// Arguments for the `filter` command.
#[derive(Args)]
struct FilterArgs {
    #[command(flatten)]
    io: ImageArgs,

    /// Halo overlay for the vignette stage
    #[arg(long, default_value = "resources/halo.png")]
    halo: PathBuf,

    /// Grain overlay for the grain stage
    #[arg(long, default_value = "resources/decorative_grain.png")]
    grain: PathBuf,
}

/// Arguments for the `resize` command.
#[derive(Args)]
struct ResizeArgs {
    #[command(flatten)]
    io: ImageArgs,

    /// Target width
    #[arg(short, long)]
    width: Option<u32>,

    /// Target height
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Keep the aspect ratio, fitting inside width x height
    #[arg(long)]
    fit: bool,
}

/// Arguments for the `batch` command.
#[derive(Args)]
struct BatchArgs {
    /// Input pattern (glob)
    #[arg(short, long)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Operation to apply, NAME or NAME=VALUE; repeat to chain
    #[arg(long = "op", required = true)]
    ops: Vec<String>,

    /// Output format extension (defaults to the input's)
    #[arg(short, long)]
    format: Option<String>,
}

/// Installs the global subscriber. The returned guard flushes the log file
/// on drop and must live until the end of `main`.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr)
            .try_init()
            .context("Failed to install logger")?;
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install logger")?;
    Ok(Some(guard))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let verbose = cli.verbose;
    match cli.command {
        Commands::Grayscale(args) => commands::simple::run(args, Operation::Grayscale, verbose),
        Commands::Invert(args) => commands::simple::run(args, Operation::Invert, verbose),
        Commands::Sepia(args) => commands::simple::run(args, Operation::Sepia, verbose),
        Commands::Bw(args) => commands::simple::run(args, Operation::Threshold, verbose),
        Commands::Rotate(args) => commands::rotate::run(args, verbose),
        Commands::Hue(args) => commands::adjust::run_hue(args, verbose),
        Commands::Saturation(args) => commands::adjust::run_saturation(args, verbose),
        Commands::Lightness(args) => commands::adjust::run_lightness(args, verbose),
        Commands::Filter(args) => commands::filter::run(args, verbose),
        Commands::Resize(args) => commands::resize::run(args, verbose),
        Commands::Batch(args) => commands::batch::run(args, verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_delta() {
        let argv = ["pixfx", "hue", "in.png", "-o", "out.png", "--delta", "-45"];
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Hue(args) => assert_eq!(args.delta, -45),
            _ => panic!("expected hue"),
        }
    }

    #[test]
    fn test_filter_defaults() {
        let cli = Cli::try_parse_from(["pixfx", "filter", "in.png", "-o", "out.png"]).unwrap();
        match cli.command {
            Commands::Filter(args) => {
                assert_eq!(args.halo, PathBuf::from("resources/halo.png"));
                assert_eq!(args.grain, PathBuf::from("resources/decorative_grain.png"));
            }
            _ => panic!("expected filter"),
        }
    }

    #[test]
    fn test_global_flags() {
        let argv = ["pixfx", "-vv", "-j", "4", "invert", "a.png", "-o", "b.png"];
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.threads, 4);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_batch_requires_op() {
        assert!(Cli::try_parse_from(["pixfx", "batch", "-i", "*.png", "-o", "out"]).is_err());
        let cli = Cli::try_parse_from([
            "pixfx", "batch", "-i", "*.png", "-o", "out", "--op", "sepia", "--op", "hue=30",
        ])
        .unwrap();
        match cli.command {
            Commands::Batch(args) => assert_eq!(args.ops, vec!["sepia", "hue=30"]),
            _ => panic!("expected batch"),
        }
    }
}
