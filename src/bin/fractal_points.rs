//! Fractal point CLI
//!
//! Prints the fitted point path of an L-System as a JSON array of `[x, y]` pairs, for a
//! renderer (or a plotting script) to consume.
//!
//! # Usage
//!
//! ```bash
//! # List the built-in grammars
//! fractal-points list
//!
//! # Points for a preset
//! fractal-points preset koch --iterations 3 --width 1024 --height 768
//!
//! # Points for an inline grammar stored as JSON
//! fractal-points preset --grammar my_tree.json --iterations 4
//!
//! # A grammar written as rule text (`@file` reads the rules from a file)
//! fractal-points custom --axiom FX --rules 'X=X+YF+
//! Y=-FX-Y' --angle 90 --iterations 10
//!
//! # The expanded command string, before interpretation
//! fractal-points expand dragon --iterations 4
//! ```

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use glam::Vec2;
use std::path::{Path, PathBuf};
use symbios_fractal::{
    DEFAULT_ANGLE, DEFAULT_PADDING, DEFAULT_STEP, Grammar, PointSequence, Viewport, commands_for,
    generate_in, parse_rules, registry,
};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "fractal-points")]
#[command(about = "Generate L-System fractal point paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in grammars
    List,

    /// Generate points for a built-in grammar or a JSON grammar file
    Preset {
        /// Preset id (see `list`)
        #[arg(required_unless_present = "grammar")]
        id: Option<String>,

        /// Load an inline grammar from a JSON file instead
        #[arg(long, conflicts_with = "id")]
        grammar: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate points for a grammar given as rule text
    Custom {
        /// Starting string
        #[arg(long, default_value = "F")]
        axiom: String,

        /// `SYMBOL = expansion` lines, or `@path` to read them from a file
        #[arg(long, default_value = "F=F+F--F+F")]
        rules: String,

        /// Turn angle in degrees
        #[arg(long, default_value_t = DEFAULT_ANGLE)]
        angle: f32,

        /// Symbols drawn as forward moves
        #[arg(long, default_value = "F")]
        draw: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the expanded command string of a preset
    Expand {
        /// Preset id (see `list`)
        id: String,

        /// Number of rewriting generations
        #[arg(short, long, default_value = "1")]
        iterations: usize,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Number of rewriting generations
    #[arg(short, long, default_value = "1")]
    iterations: usize,

    /// Forward step length before fitting
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f32,

    /// Viewport width in pixels
    #[arg(long, default_value = "800")]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value = "600")]
    height: f32,

    /// Margin on each side in pixels
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    padding: f32,
}

impl RenderArgs {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_padding(self.padding)
    }

    fn run(&self, grammar: &Grammar) -> Result<PointSequence> {
        if !self.step.is_finite() {
            bail!("step must be finite, got {}", self.step);
        }
        grammar
            .validate()
            .with_context(|| format!("grammar `{}`", grammar.id))?;
        Ok(generate_in(grammar, self.iterations, self.step, &self.viewport()))
    }
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("symbios_fractal=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for preset in registry::PRESETS {
                println!("{:<20} {}", preset.id, preset.label);
            }
        }
        Commands::Preset {
            id,
            grammar,
            render,
        } => {
            let grammar = match (id, grammar) {
                (_, Some(path)) => load_grammar(&path)?,
                (Some(id), None) => registry::require(&id)?,
                (None, None) => bail!("either a preset id or --grammar is required"),
            };
            print_points(&render.run(&grammar)?)?;
        }
        Commands::Custom {
            axiom,
            rules,
            angle,
            draw,
            render,
        } => {
            let rules_text = read_rules_arg(&rules)?;
            let grammar = Grammar::new("custom", axiom, parse_rules(&rules_text), angle)
                .with_draw_symbols(&draw);
            if grammar.rules.is_empty() {
                tracing::warn!("no rule lines parsed; the axiom will not be rewritten");
            }
            print_points(&render.run(&grammar)?)?;
        }
        Commands::Expand { id, iterations } => {
            let grammar = registry::require(&id)?;
            println!("{}", commands_for(&grammar, iterations));
        }
    }

    Ok(())
}

fn load_grammar(path: &Path) -> Result<Grammar> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid grammar in {}", path.display()))
}

fn read_rules_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rules from {path}")),
        None => Ok(arg.to_string()),
    }
}

fn print_points(points: &[Vec2]) -> Result<()> {
    let json = serde_json::to_string(points).context("failed to serialize points")?;
    println!("{json}");
    Ok(())
}
