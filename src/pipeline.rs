//! The full generation pipeline: expand, collapse draw symbols, interpret, fit.

use tracing::{debug, warn};

use crate::expander::expand;
use crate::grammar::{Grammar, collapse_draw_symbols, parse_rules};
use crate::interpreter::{PointSequence, interpret};
use crate::registry;
use crate::viewport::Viewport;

/// Default forward step, in turtle units.
pub const DEFAULT_STEP: f32 = 8.0;

/// Either a catalog id or an inline grammar.
#[derive(Clone, Copy, Debug)]
pub enum GrammarSource<'a> {
    Id(&'a str),
    Inline(&'a Grammar),
}

impl<'a> From<&'a str> for GrammarSource<'a> {
    fn from(id: &'a str) -> Self {
        GrammarSource::Id(id)
    }
}

impl<'a> From<&'a Grammar> for GrammarSource<'a> {
    fn from(grammar: &'a Grammar) -> Self {
        GrammarSource::Inline(grammar)
    }
}

/// Expands `grammar` and collapses its draw symbols into `F`, ready for the turtle.
pub fn commands_for(grammar: &Grammar, iterations: usize) -> String {
    let expanded = expand(&grammar.axiom, &grammar.rules, iterations);
    collapse_draw_symbols(&expanded, &grammar.draw_symbols)
}

/// Generates the fitted point path for a preset id or inline grammar.
///
/// Uses [`crate::viewport::DEFAULT_PADDING`]. An unknown id, or a grammar that fails
/// [`Grammar::validate`], yields an empty sequence.
pub fn generate_points<'a>(
    source: impl Into<GrammarSource<'a>>,
    iterations: usize,
    step: f32,
    width: f32,
    height: f32,
) -> PointSequence {
    let viewport = Viewport::new(width, height);
    match source.into() {
        GrammarSource::Id(id) => match registry::lookup(id) {
            Some(grammar) => generate_in(&grammar, iterations, step, &viewport),
            None => {
                warn!(id, "unknown fractal preset");
                Vec::new()
            }
        },
        GrammarSource::Inline(grammar) => generate_in(grammar, iterations, step, &viewport),
    }
}

/// Generates points for a user-supplied grammar given as rule text.
///
/// `rules_text` uses the `SYMBOL = expansion` line format of [`parse_rules`], and every
/// character of `draw_symbols_text` is drawn as a forward move.
#[allow(clippy::too_many_arguments)]
pub fn generate_custom_points(
    axiom: &str,
    rules_text: &str,
    angle: f32,
    iterations: usize,
    step: f32,
    width: f32,
    height: f32,
    draw_symbols_text: &str,
) -> PointSequence {
    let grammar = Grammar::new("custom", axiom, parse_rules(rules_text), angle)
        .with_label("Custom L-system")
        .with_draw_symbols(draw_symbols_text);
    generate_in(&grammar, iterations, step, &Viewport::new(width, height))
}

/// Runs the pipeline for `grammar` into an explicit viewport.
pub fn generate_in(
    grammar: &Grammar,
    iterations: usize,
    step: f32,
    viewport: &Viewport,
) -> PointSequence {
    if let Err(e) = grammar.validate() {
        warn!(id = %grammar.id, error = %e, "invalid grammar; producing no points");
        return Vec::new();
    }

    let commands = commands_for(grammar, iterations);
    let points = interpret(&commands, grammar.angle, step);
    debug!(
        id = %grammar.id,
        iterations,
        commands = commands.len(),
        points = points.len(),
        "generated fractal path"
    );
    viewport.fit(&points)
}

