//! Grammar records and the plain-text rule format.
//!
//! A [`Grammar`] is tagged data: an axiom, a set of single-symbol rewrite rules, a turn
//! angle and the set of symbols that count as "move forward and draw". Nothing here is
//! polymorphic; adding a fractal means adding a record.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Rewrite rules, keyed by the single symbol they replace.
///
/// A `BTreeMap` keeps iteration (and therefore serialisation) order stable.
pub type Rules = BTreeMap<char, String>;

/// Turn angle used when a grammar does not specify one.
pub const DEFAULT_ANGLE: f32 = 90.0;

/// The universal forward-draw command.
pub const DRAW_SYMBOL: char = 'F';

/// Errors raised by the fallible grammar surface.
///
/// The generation pipeline itself never returns these; it falls back to an empty
/// point sequence instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GrammarError {
    #[error("turn angle must be finite, got {0}")]
    NonFiniteAngle(f32),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}

fn default_angle() -> f32 {
    DEFAULT_ANGLE
}

/// A context-free, deterministic L-System definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    /// Identifier, e.g. `"koch"`.
    pub id: String,

    /// Optional human-readable name.
    #[serde(default)]
    pub label: Option<String>,

    /// The starting string before any rewriting.
    pub axiom: String,

    /// Single-symbol rewrite rules. Symbols without a rule rewrite to themselves.
    #[serde(default)]
    pub rules: Rules,

    /// Turn angle in degrees applied by `+` and `-`.
    #[serde(default = "default_angle")]
    pub angle: f32,

    /// Symbols collapsed to [`DRAW_SYMBOL`] before interpretation.
    #[serde(default)]
    pub draw_symbols: BTreeSet<char>,
}

impl Grammar {
    /// Creates a grammar with no draw symbols, the same default a JSON record without
    /// `draw_symbols` gets. `F` still draws; use [`Grammar::with_draw_symbols`] to add more.
    pub fn new(id: impl Into<String>, axiom: impl Into<String>, rules: Rules, angle: f32) -> Self {
        Self {
            id: id.into(),
            label: None,
            axiom: axiom.into(),
            rules,
            angle,
            draw_symbols: BTreeSet::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Replaces the draw-symbol set with every character of `text`.
    pub fn with_draw_symbols(mut self, text: &str) -> Self {
        self.draw_symbols = draw_symbols_from_text(text);
        self
    }

    /// Checks the invariants the interpreter relies on.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if !self.angle.is_finite() {
            return Err(GrammarError::NonFiniteAngle(self.angle));
        }
        Ok(())
    }
}

/// Parses newline-separated `SYMBOL = expansion` lines into a rule map.
///
/// Each line is trimmed; a line is accepted when it starts with a single character that is
/// neither whitespace nor `=`, followed by optional whitespace, `=`, optional whitespace and
/// a non-empty expansion. Anything else is skipped. Later duplicates overwrite earlier ones.
pub fn parse_rules(text: &str) -> Rules {
    let mut rules = Rules::new();
    for line in text.lines() {
        if let Some((symbol, expansion)) = parse_rule_line(line) {
            rules.insert(symbol, expansion.to_string());
        }
    }
    rules
}

fn parse_rule_line(line: &str) -> Option<(char, &str)> {
    let line = line.trim();
    let mut chars = line.chars();
    let symbol = chars.next()?;
    if symbol == '=' || symbol.is_whitespace() {
        return None;
    }

    let rest = chars.as_str().trim_start().strip_prefix('=')?;
    let expansion = rest.trim_start();
    if expansion.is_empty() {
        return None;
    }
    Some((symbol, expansion))
}

/// Every character of `text` becomes a draw symbol.
pub fn draw_symbols_from_text(text: &str) -> BTreeSet<char> {
    text.chars().collect()
}

/// Rewrites every member of `draw_symbols` in `commands` to [`DRAW_SYMBOL`].
pub fn collapse_draw_symbols(commands: &str, draw_symbols: &BTreeSet<char>) -> String {
    if draw_symbols.is_empty() {
        return commands.to_string();
    }
    commands
        .chars()
        .map(|c| {
            if draw_symbols.contains(&c) {
                DRAW_SYMBOL
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_rule() {
        let rules = parse_rules("F = F+F");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[&'F'], "F+F");
    }

    #[test]
    fn skips_malformed_lines() {
        let rules = parse_rules("bad line\nX=Y");
        assert_eq!(rules, Rules::from([('X', "Y".to_string())]));
    }

    #[test]
    fn skips_empty_expansion_and_multi_char_keys() {
        let rules = parse_rules("X=\nAB=C\n==F\n\n   \nY =  -FX-Y  ");
        assert_eq!(rules, Rules::from([('Y', "-FX-Y".to_string())]));
    }

    #[test]
    fn last_duplicate_wins() {
        let rules = parse_rules("F=F+F\r\nF=F-F\r\n");
        assert_eq!(rules[&'F'], "F-F");
    }

    #[test]
    fn expansion_may_contain_equals() {
        let rules = parse_rules("0 = 1[+0]=0");
        assert_eq!(rules[&'0'], "1[+0]=0");
    }

    #[test]
    fn key_is_one_unicode_scalar() {
        let rules = parse_rules("🌿=F[+🌿]\né=F");
        assert_eq!(rules[&'🌿'], "F[+🌿]");
        assert_eq!(rules[&'é'], "F");
    }

    #[test]
    fn collapse_replaces_only_members() {
        let draw = draw_symbols_from_text("AB");
        assert_eq!(collapse_draw_symbols("A-B+X[A]", &draw), "F-F+X[F]");
        assert_eq!(collapse_draw_symbols("A-B", &BTreeSet::new()), "A-B");
    }

    #[test]
    fn constructor_and_json_share_defaults() {
        let built = Grammar::new("twig", "F", Rules::new(), DEFAULT_ANGLE)
            .with_label("Twig")
            .with_draw_symbols("AB");
        assert_eq!(built.label.as_deref(), Some("Twig"));
        assert_eq!(built.draw_symbols, BTreeSet::from(['A', 'B']));

        let plain = Grammar::new("twig", "F", Rules::new(), DEFAULT_ANGLE);
        assert!(plain.draw_symbols.is_empty());
    }

    #[test]
    fn rejects_non_finite_angle() {
        let grammar = Grammar::new("g", "F", Rules::new(), f32::NAN);
        assert!(matches!(
            grammar.validate(),
            Err(GrammarError::NonFiniteAngle(_))
        ));
        assert!(Grammar::new("g", "F", Rules::new(), 60.0).validate().is_ok());
    }
}
