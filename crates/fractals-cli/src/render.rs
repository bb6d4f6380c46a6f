//! One rendering run: pick a grammar, size it, draw it, save it.
//!
//! ## Run protocol
//!
//! 1. **Resolve**: built-in [`Fractal`] or a JSON grammar file.
//! 2. **Place**: start cursor + step from the image shape ([`Placement`]).
//! 3. **Census**: count segments up front; refuse runs over budget
//!    unless forced, then validate the grammar.
//! 4. **Draw**: linear grammars stream commands from a producer thread;
//!    branching grammars drive the turtle synchronously.
//! 5. **Save**: `"{name}_{level:02}_{shape}.png"` in the output directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use tracing::{info, warn};

use fractals_canvas::{Canvas, TurtleDraw, BLACK, WHITE};
use fractals_lsystem::{census, expand_branching, CommandStream, Fractal, Grammar, Mode, Turtle};

use crate::config::Config;
use crate::placement::{ImageShape, Placement};

// ─────────────────────────────────────────────
// Request / outcome
// ─────────────────────────────────────────────

/// Where the grammar comes from.
#[derive(Debug, Clone)]
pub enum GrammarSource {
    Builtin(Fractal),
    /// JSON-encoded [`Grammar`]; drawn from the canvas centre.
    File { path: PathBuf, mode: Mode },
}

#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub source: GrammarSource,
    pub shape:  ImageShape,
    pub level:  u32,
    /// Skip the segment budget check.
    pub force:  bool,
}

/// Statistics returned by [`render`].
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub path:     PathBuf,
    /// Segments plotted.
    pub segments: u64,
    /// Commands (forwards + turns) the census predicted.
    pub commands: u128,
}

// ─────────────────────────────────────────────
// Run
// ─────────────────────────────────────────────

pub fn render(request: &RenderRequest, config: &Config) -> anyhow::Result<RenderOutcome> {
    let (name, grammar, mode, placement) = resolve(request)?;

    // Budget before validation: past level ~1075 the derived step is 0.
    let counts = census(&grammar, request.level);
    if !request.force && !config.allows(counts.forwards) {
        bail!(
            "{name} at level {} would draw {} segments (budget {}); lower the level or pass --force",
            request.level,
            counts.forwards,
            config.max_segments
        );
    }
    grammar.validate().with_context(|| format!("grammar {name:?} is not drawable"))?;
    if mode == Mode::Linear && grammar.has_branches() {
        warn!(grammar = %name, "'[' and ']' are ignored by the linear expander; use --branching");
    }

    info!(
        fractal  = %name,
        level    = request.level,
        shape    = %request.shape,
        step     = placement.step,
        segments = %counts.forwards,
        "rendering"
    );

    let started = Instant::now();
    let mut canvas = Canvas::new(request.shape.width(), request.shape.height(), BLACK)?;
    let segments = draw(&mut canvas, &grammar, mode, request.level, placement)
        .with_context(|| format!("expanding {name} at level {}", request.level))?;

    let file = format!("{}_{:02}_{}.png", name, request.level, request.shape.name());
    let path = config.output_dir.join(file);
    canvas
        .save_png(&path)
        .with_context(|| format!("writing {}", path.display()))?;

    info!(
        path       = %path.display(),
        segments,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "image written"
    );

    Ok(RenderOutcome { path, segments, commands: counts.commands() })
}

fn resolve(request: &RenderRequest) -> anyhow::Result<(String, Grammar, Mode, Placement)> {
    match &request.source {
        GrammarSource::Builtin(fractal) => {
            let placement = Placement::for_fractal(*fractal, request.shape, request.level);
            let grammar = fractal.grammar(placement.step);
            Ok((fractal.name().to_string(), grammar, fractal.mode(), placement))
        }
        GrammarSource::File { path, mode } => {
            let grammar = load_grammar(path)?;
            let heading = match mode {
                Mode::Linear    => 0.0,
                Mode::Branching => 90.0,
            };
            let placement = Placement::centered(request.shape, heading, grammar.step);
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("grammar")
                .to_string();
            Ok((name, grammar, *mode, placement))
        }
    }
}

/// Read a JSON grammar file.
pub fn load_grammar(path: &Path) -> anyhow::Result<Grammar> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading grammar file {}", path.display()))?;
    let grammar: Grammar = serde_json::from_str(&text)
        .with_context(|| format!("parsing grammar file {}", path.display()))?;
    Ok(grammar)
}

fn draw(
    canvas:    &mut Canvas,
    grammar:   &Grammar,
    mode:      Mode,
    level:     u32,
    placement: Placement,
) -> anyhow::Result<u64> {
    let mut turtle = TurtleDraw::new(canvas);
    turtle.restore(placement.start);
    turtle.set_color(WHITE);
    turtle.pen_down();

    match mode {
        Mode::Linear => {
            let mut stream = CommandStream::spawn(grammar.clone(), level)?;
            for cmd in &mut stream {
                turtle.apply(cmd);
            }
            stream.finish()?;
        }
        Mode::Branching => {
            let report = expand_branching(grammar, level, &mut turtle)?;
            if report.max_depth > 0 {
                tracing::debug!(max_depth = report.max_depth, pushes = report.pushes, "branches drawn");
            }
        }
    }
    Ok(turtle.segments())
}
