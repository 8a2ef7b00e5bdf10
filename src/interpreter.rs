//! Interpreter that converts an L-System symbol sequence into a planar point path.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! register symbol-to-operation mappings via [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::trace_path`] with a [`symbios::SymbiosState`].
//!
//! Plain command strings go through [`interpret`], which walks the characters directly
//! with the same operations as [`TurtleInterpreter::populate_standard_symbols`].

use crate::turtle::{Cursor, TurtleOp};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use symbios::{SymbiosState, SymbolTable};

/// An ordered polyline. Positions emitted on `]` mark a jump back to a branch origin.
pub type PointSequence = Vec<Vec2>;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Distance travelled by `F` and `f` when no parameter is provided.
    pub step: f32,
    /// Turn angle (in radians) for `+` and `-` when no parameter is provided.
    pub angle: f32,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step: 8.0,
            angle: 90.0f32.to_radians(),
        }
    }
}

/// Interprets L-System output to build a [`PointSequence`].
pub struct TurtleInterpreter {
    op_map: Vec<TurtleOp>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty symbol map.
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: Vec::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    ///
    /// `map` is indexed by symbol ID as returned by [`symbios::SymbolTable`].
    /// Any ID that falls outside the slice is treated as [`TurtleOp::Ignore`].
    pub fn with_map(mut self, map: Vec<TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol ID, growing the map as needed.
    pub fn set_op(&mut self, sym_id: u16, op: TurtleOp) {
        let idx = sym_id as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, TurtleOp::Ignore);
        }
        self.op_map[idx] = op;
    }

    /// Registers the conventional mappings: `F f + - [ ]`.
    ///
    /// Symbols that are not present in `interner` are silently skipped. The sign convention
    /// is fixed: `+` decreases the heading and `-` increases it.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        let mut buf = [0u8; 4];
        for c in STANDARD_SYMBOLS {
            if let Some(id) = interner.resolve_id(c.encode_utf8(&mut buf)) {
                self.set_op(id, standard_op(c));
            }
        }
    }

    /// Walks every module of `state` and returns the emitted points.
    ///
    /// The turtle starts at the origin with heading zero, and that origin is always the
    /// first point. `F` appends the position after moving, `]` appends the restored
    /// position. Popping an empty stack does nothing. Parametric modules override the
    /// defaults: `F(len)`, `f(len)`, `+(deg)`, `-(deg)`.
    pub fn trace_path(&self, state: &SymbiosState) -> PointSequence {
        let mut walk = PathWalk::default();

        for i in 0..state.len() {
            let view = match state.get_view(i) {
                Some(v) => v,
                None => break,
            };

            let op = self
                .op_map
                .get(view.sym as usize)
                .unwrap_or(&TurtleOp::Ignore);

            let length = view
                .params
                .first()
                .map(|&x| x as f32)
                .unwrap_or(self.config.step);
            let angle = view
                .params
                .first()
                .map(|&deg| (deg as f32).to_radians())
                .unwrap_or(self.config.angle);

            walk.apply(*op, length, angle);
        }

        walk.points
    }
}

/// Symbols with a meaning under [`standard_op`].
pub const STANDARD_SYMBOLS: [char; 6] = ['F', 'f', '+', '-', '[', ']'];

/// Maps a command character to its operation under the standard symbol set.
pub fn standard_op(c: char) -> TurtleOp {
    match c {
        'F' => TurtleOp::Draw,
        'f' => TurtleOp::Move,
        '+' => TurtleOp::Turn(-1.0),
        '-' => TurtleOp::Turn(1.0),
        '[' => TurtleOp::Push,
        ']' => TurtleOp::Pop,
        _ => TurtleOp::Ignore,
    }
}

/// Interprets a plain command string with the standard symbol set.
///
/// `angle_degrees` is the turn applied by `+`/`-`, `step` the distance moved by `F`/`f`.
/// Characters outside `F f + - [ ]` are ignored. The result always holds at least the origin.
/// The string is walked in place, so its length is bounded only by memory.
pub fn interpret(commands: &str, angle_degrees: f32, step: f32) -> PointSequence {
    let angle = angle_degrees.to_radians();
    let mut walk = PathWalk::default();
    for c in commands.chars() {
        walk.apply(standard_op(c), step, angle);
    }
    walk.points
}

/// One interpretation run: the live cursor, its saved copies and the emitted path.
struct PathWalk {
    turtle: Cursor,
    stack: Vec<Cursor>,
    points: PointSequence,
}

impl Default for PathWalk {
    fn default() -> Self {
        let turtle = Cursor::default();
        Self {
            turtle,
            stack: Vec::new(),
            points: vec![turtle.position],
        }
    }
}

impl PathWalk {
    fn apply(&mut self, op: TurtleOp, length: f32, angle: f32) {
        match op {
            TurtleOp::Draw => {
                self.turtle.advance(length);
                self.points.push(self.turtle.position);
            }
            TurtleOp::Move => self.turtle.advance(length),
            TurtleOp::Turn(s) => self.turtle.turn(angle * s),
            TurtleOp::Push => self.stack.push(self.turtle),
            TurtleOp::Pop => {
                if let Some(saved) = self.stack.pop() {
                    self.turtle = saved;
                    self.points.push(self.turtle.position);
                }
            }
            TurtleOp::Ignore => {}
        }
    }
}
