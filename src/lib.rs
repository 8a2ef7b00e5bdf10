//! # symbios-fractal
//!
//! Turns Lindenmayer-system grammars into 2-D point paths ready to be drawn as polylines.
//!
//! The pipeline is three stateless stages: [`expand`] rewrites an axiom through N
//! generations, [`interpret`] walks the result with a turtle (the same turtle also traces
//! [Symbios](https://crates.io/crates/symbios) module states), and [`normalize`] fits the
//! path into a pixel viewport. [`registry`] holds the catalog of named grammars, and
//! [`generate_points`] runs the whole thing.

pub mod expander;
pub mod grammar;
pub mod interpreter;
pub mod pipeline;
pub mod registry;
pub mod turtle;
pub mod viewport;

pub use expander::*;
pub use grammar::*;
pub use interpreter::*;
pub use pipeline::*;
pub use turtle::*;
pub use viewport::*;
