//! `fractals` — render an L-system fractal to PNG.
//!
//! ## Quick start
//!
//! ```bash
//! fractals -f dragon   -l 12 -i 4K
//! fractals -f hilbert  -l 7  -i 4K
//! fractals -f sierpTri -l 7  -i 4K
//! fractals -f tree     -l 5  -i 1200
//!
//! # User grammar (JSON), bracketed
//! fractals --grammar plant.json --branching -l 4
//!
//! # Custom config
//! FRACTALS_LOG_LEVEL=debug FRACTALS_OUTPUT_DIR=/tmp/out fractals -f dragon -l 16
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use fractals_cli::{render, Config, GrammarSource, ImageShape, RenderRequest};
use fractals_lsystem::{Fractal, Mode};

#[derive(Parser)]
#[command(name = "fractals")]
#[command(about = "Render L-system fractals (Hilbert, dragon, Sierpinski, tree) to PNG")]
struct Cli {
    /// Built-in fractal: hilbert | dragon | sierpTri | tree
    #[arg(short = 'f', long, default_value = "hilbert")]
    fractal: Fractal,

    /// Image shape: 4K | 1200
    #[arg(short = 'i', long, default_value = "4K")]
    image: ImageShape,

    /// Recursion level to reach
    #[arg(short = 'l', long, default_value_t = 4)]
    level: u32,

    /// Output directory (overrides FRACTALS_OUTPUT_DIR)
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Render a JSON grammar file instead of a built-in
    #[arg(long)]
    grammar: Option<PathBuf>,

    /// Drive the user grammar with the branching ('[' / ']') expander
    #[arg(long, requires = "grammar")]
    branching: bool,

    /// Ignore FRACTALS_MAX_SEGMENTS
    #[arg(long)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Tracing ───────────────────────────────────────────────────────────────
    let mut config = Config::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .compact()
        .init();

    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    let source = match cli.grammar {
        Some(path) => GrammarSource::File {
            path,
            mode: if cli.branching { Mode::Branching } else { Mode::Linear },
        },
        None => GrammarSource::Builtin(cli.fractal),
    };

    let request = RenderRequest {
        source,
        shape: cli.image,
        level: cli.level,
        force: cli.force,
    };

    match render(&request, &config) {
        Ok(outcome) => {
            info!(
                path     = %outcome.path.display(),
                segments = outcome.segments,
                "done"
            );
            Ok(())
        }
        Err(e) => {
            error!("render failed: {e:#}");
            Err(e)
        }
    }
}
