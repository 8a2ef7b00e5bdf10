//! The built-in fractal catalog.
//!
//! Presets are static records. [`lookup`] turns one into an owned [`Grammar`].

use crate::grammar::{Grammar, GrammarError, draw_symbols_from_text};

/// A catalog entry, stored as borrowed static data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub axiom: &'static str,
    pub rules: &'static [(char, &'static str)],
    /// Turn angle in degrees.
    pub angle: f32,
    /// Symbols drawn as forward moves.
    pub draw_symbols: &'static str,
}

impl From<&Preset> for Grammar {
    fn from(preset: &Preset) -> Self {
        Grammar {
            id: preset.id.to_string(),
            label: Some(preset.label.to_string()),
            axiom: preset.axiom.to_string(),
            rules: preset
                .rules
                .iter()
                .map(|&(symbol, expansion)| (symbol, expansion.to_string()))
                .collect(),
            angle: preset.angle,
            draw_symbols: draw_symbols_from_text(preset.draw_symbols),
        }
    }
}

/// Every known grammar, in display order.
///
/// `custom` is the starting point offered for user-edited grammars.
pub const PRESETS: &[Preset] = &[
    Preset {
        id: "koch",
        label: "Koch Curve / Snowflake",
        axiom: "F",
        rules: &[('F', "F+F--F+F")],
        angle: 60.0,
        draw_symbols: "F",
    },
    Preset {
        id: "dragon",
        label: "Dragon Curve",
        axiom: "FX",
        rules: &[('X', "X+YF+"), ('Y', "-FX-Y")],
        angle: 90.0,
        draw_symbols: "F",
    },
    Preset {
        id: "sierpinski",
        label: "Sierpinski (L-system)",
        axiom: "A",
        rules: &[('A', "B-A-B"), ('B', "A+B+A")],
        angle: 60.0,
        draw_symbols: "AB",
    },
    Preset {
        id: "hilbert",
        label: "Hilbert Curve",
        axiom: "A",
        rules: &[('A', "-BF+AFA+FB-"), ('B', "+AF-BFB-FA+")],
        angle: 90.0,
        draw_symbols: "AB",
    },
    Preset {
        id: "plant",
        label: "Plant",
        axiom: "F",
        rules: &[('F', "F[+F]F[-F]F")],
        angle: 25.0,
        draw_symbols: "F",
    },
    Preset {
        id: "gosper",
        label: "Gosper Curve",
        axiom: "A",
        rules: &[('A', "A-B--B+A++AA+B-"), ('B', "+A-BB--B-A++A+B")],
        angle: 60.0,
        draw_symbols: "AB",
    },
    Preset {
        id: "peano",
        label: "Peano Curve",
        axiom: "A",
        rules: &[
            ('A', "AFBFA+F+BFAFB-F-AFBFA"),
            ('B', "AFBFA-F-BFAFB+F+AFBFA"),
        ],
        angle: 90.0,
        draw_symbols: "AB",
    },
    Preset {
        id: "levy",
        label: "Levy Curve",
        axiom: "F",
        rules: &[('F', "+F--F+")],
        angle: 45.0,
        draw_symbols: "F",
    },
    Preset {
        id: "quadratic_koch",
        label: "Quadratic Koch",
        axiom: "F",
        rules: &[('F', "F+F-F-F+F")],
        angle: 90.0,
        draw_symbols: "F",
    },
    Preset {
        id: "pythagoras_tree",
        label: "Pythagoras Tree",
        axiom: "0",
        rules: &[('1', "11"), ('0', "1[+0]-0")],
        angle: 45.0,
        draw_symbols: "01",
    },
    Preset {
        id: "bush",
        label: "Bush",
        axiom: "F",
        rules: &[('F', "FF-[-F+F+F]+[+F-F-F]")],
        angle: 22.5,
        draw_symbols: "F",
    },
    Preset {
        id: "crystal",
        label: "Crystal",
        axiom: "F+F+F+F",
        rules: &[('F', "FF+F++F+F")],
        angle: 90.0,
        draw_symbols: "F",
    },
    Preset {
        id: "board",
        label: "Board",
        axiom: "F+F+F+F",
        rules: &[('F', "FF+F+F+F+FF")],
        angle: 90.0,
        draw_symbols: "F",
    },
    Preset {
        id: "quadratic_snowflake",
        label: "Quadratic Snowflake",
        axiom: "F",
        rules: &[('F', "F-F+F+F-F")],
        angle: 90.0,
        draw_symbols: "F",
    },
    Preset {
        id: "custom",
        label: "Custom L-system",
        axiom: "F",
        rules: &[('F', "F+F--F+F")],
        angle: 90.0,
        draw_symbols: "F",
    },
];

/// Finds a preset by id.
pub fn preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Builds the grammar for a preset id, or `None` if it is unknown.
pub fn lookup(id: &str) -> Option<Grammar> {
    preset(id).map(Grammar::from)
}

/// Like [`lookup`], but reports an unknown id as an error.
pub fn require(id: &str) -> Result<Grammar, GrammarError> {
    lookup(id).ok_or_else(|| GrammarError::UnknownPreset(id.to_string()))
}

/// All preset ids in catalog order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.id)
}
