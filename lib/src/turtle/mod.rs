use std::f64::consts::{FRAC_PI_2, SQRT_2};
use std::fmt::Debug;

use log::trace;
use lyon_geom::{Point, vector};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    command::{Command, CommandTable},
    geometry::{Bounds, Segment},
};

mod polyline;
mod preprocess;
mod segments;
pub use self::polyline::PolylineTurtle;
pub use self::preprocess::PreprocessTurtle;
pub use self::segments::SegmentTurtle;

/// Abstraction based on [Turtle graphics](https://en.wikipedia.org/wiki/Turtle_graphics)
///
/// Receives the pen movements produced while interpreting a symbol string.
pub trait Turtle: Debug {
    fn begin(&mut self);
    fn end(&mut self);
    /// Place the pen without drawing
    fn move_to(&mut self, to: Point<f64>);
    /// Draw a straight stroke from the current position
    fn line_to(&mut self, to: Point<f64>);
}

/// Reusable drawing parameters. Never modified by drawing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurtleConfig {
    /// Heading at the start of every walk, in radians
    #[cfg_attr(feature = "serde", serde(default))]
    pub heading: f64,
    /// Step length at the start of every walk
    #[cfg_attr(feature = "serde", serde(default = "default_step_length"))]
    pub step_length: f64,
    /// Angle added or removed by each turn, in radians
    #[cfg_attr(feature = "serde", serde(default = "default_turn_angle"))]
    pub turn_angle: f64,
    /// Factor applied to the step length by the scaling commands
    #[cfg_attr(feature = "serde", serde(default = "default_step_scaler"))]
    pub step_scaler: f64,
}

const fn default_step_length() -> f64 {
    10.
}

const fn default_turn_angle() -> f64 {
    FRAC_PI_2
}

const fn default_step_scaler() -> f64 {
    SQRT_2
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            heading: 0.,
            step_length: default_step_length(),
            turn_angle: default_turn_angle(),
            step_scaler: default_step_scaler(),
        }
    }
}

impl TurtleConfig {
    /// Interpret `symbols` from `start`, returning every segment in drawing order.
    ///
    /// Symbols missing from `commands` are skipped.
    pub fn draw(&self, commands: &CommandTable, symbols: &str, start: Point<f64>) -> Vec<Segment> {
        self.walk(commands, symbols, start, SegmentTurtle::default()).segments
    }

    /// Like [Self::draw], but returns the points the pen passes through
    pub fn trace(
        &self,
        commands: &CommandTable,
        symbols: &str,
        start: Point<f64>,
    ) -> Vec<Point<f64>> {
        self.walk(commands, symbols, start, PolylineTurtle::default()).points
    }

    /// Extent of the drawing, without keeping its geometry around
    pub fn measure(&self, commands: &CommandTable, symbols: &str, start: Point<f64>) -> Bounds {
        self.walk(commands, symbols, start, PreprocessTurtle::default()).bounds
    }

    /// Drive any [Turtle] with the interpretation of `symbols`, handing it back afterwards
    pub fn walk<T: Turtle>(
        &self,
        commands: &CommandTable,
        symbols: &str,
        start: Point<f64>,
        turtle: T,
    ) -> T {
        let mut interpreter = Interpreter::new(self, turtle, start);
        interpreter.run(commands, symbols);
        interpreter.turtle
    }
}

/// Live state of a single walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleState {
    pub position: Point<f64>,
    pub heading: f64,
    pub step_length: f64,
}

impl TurtleState {
    /// Fresh state at `start`, taking heading and step length from the config
    pub fn new(config: &TurtleConfig, start: Point<f64>) -> Self {
        Self {
            position: start,
            heading: config.heading,
            step_length: config.step_length,
        }
    }
}

/// Steps a [TurtleState] through a symbol string, reporting pen movement to a [Turtle]
#[derive(Debug)]
pub struct Interpreter<'a, T: Turtle> {
    pub turtle: T,
    config: &'a TurtleConfig,
    state: TurtleState,
}

impl<'a, T: Turtle> Interpreter<'a, T> {
    pub fn new(config: &'a TurtleConfig, turtle: T, start: Point<f64>) -> Self {
        Self {
            turtle,
            config,
            state: TurtleState::new(config, start),
        }
    }

    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    pub fn run(&mut self, commands: &CommandTable, symbols: &str) {
        self.turtle.begin();
        self.turtle.move_to(self.state.position);

        let mut skipped = 0usize;
        for symbol in symbols.chars() {
            match commands.get(symbol) {
                Some(command) => self.apply(command),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            trace!("Skipped {skipped} symbols with no command");
        }

        self.turtle.end();
    }

    pub fn apply(&mut self, command: Command) {
        let state = &mut self.state;
        match command {
            Command::Forward => {
                state.position += vector(
                    state.step_length * state.heading.cos(),
                    state.step_length * state.heading.sin(),
                );
                self.turtle.line_to(state.position);
            }
            Command::TurnPositive => state.heading += self.config.turn_angle,
            Command::TurnNegative => state.heading -= self.config.turn_angle,
            Command::ScaleUp => state.step_length *= self.config.step_scaler,
            Command::ScaleDown => state.step_length /= self.config.step_scaler,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{geometry::single_line, grammar::Curve, rewrite::expand};
    use lyon_geom::{LineSegment, point};
    use pretty_assertions::assert_eq;

    fn nth_generation(curve: &Curve, n: usize) -> String {
        (0..n).fold(curve.grammar.axiom().to_string(), |acc, _| {
            expand(curve.grammar.rules(), &acc)
        })
    }

    #[test]
    fn single_forward_moves_one_step() {
        let segments = TurtleConfig::default().draw(&CommandTable::default(), "F", point(0., 0.));
        assert_eq!(
            segments,
            vec![LineSegment {
                from: point(0., 0.),
                to: point(10., 0.),
            }]
        );
    }

    #[test]
    fn turns_never_draw() {
        let config = TurtleConfig::default();
        let mut interpreter = Interpreter::new(&config, SegmentTurtle::default(), point(0., 0.));
        interpreter.run(&CommandTable::default(), "++--");

        assert!(interpreter.turtle.segments.is_empty());
        assert_eq!(interpreter.state().position, point(0., 0.));
        assert_eq!(interpreter.state().heading, 0.);
    }

    #[test]
    fn unknown_symbols_are_skipped() {
        let commands = CommandTable::default();
        let config = TurtleConfig::default();
        assert_eq!(
            config.draw(&commands, "XFYZ?F", point(0., 0.)),
            config.draw(&commands, "FF", point(0., 0.))
        );
    }

    #[test]
    fn scaling_changes_step_length() {
        let config = TurtleConfig {
            step_scaler: 2.,
            ..Default::default()
        };
        let segments = config.draw(&CommandTable::default(), "*F/F/F", point(0., 0.));
        let lengths = segments.iter().map(LineSegment::length).collect::<Vec<_>>();
        assert_eq!(lengths, vec![20., 10., 5.]);
    }

    #[test]
    fn draw_starts_from_config_every_time() {
        let config = TurtleConfig::default();
        let commands = CommandTable::default();
        let first = config.draw(&commands, "+**F", point(1., 2.));
        let second = config.draw(&commands, "+**F", point(1., 2.));

        assert_eq!(first, second);
        assert_eq!(config, TurtleConfig::default());
        assert_eq!(first[0].from, point(1., 2.));
    }

    #[test]
    fn draw_is_bit_identical() {
        let dragon = Curve::builtin("dragon").unwrap();
        let symbols = nth_generation(&dragon, 10);
        let config = TurtleConfig::default();

        let bits = |segments: Vec<Segment>| {
            segments
                .iter()
                .flat_map(|s| [s.from.x, s.from.y, s.to.x, s.to.y])
                .map(f64::to_bits)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            bits(config.draw(&dragon.commands, &symbols, point(0., 0.))),
            bits(config.draw(&dragon.commands, &symbols, point(0., 0.)))
        );
    }

    #[test]
    fn dragon_segment_count_doubles() {
        let dragon = Curve::builtin("dragon").unwrap();
        for n in 0..10 {
            let symbols = nth_generation(&dragon, n);
            let segments = TurtleConfig::default().draw(&dragon.commands, &symbols, point(0., 0.));
            assert_eq!(segments.len(), 1 << n);
        }
    }

    #[test]
    fn hilbert_is_contiguous_and_fills_its_square() {
        let hilbert = Curve::builtin("hilbert").unwrap();
        let config = TurtleConfig {
            step_length: 1.,
            ..Default::default()
        };

        for k in 1..=5 {
            let symbols = nth_generation(&hilbert, k);
            let segments = config.draw(&hilbert.commands, &symbols, point(0., 0.));
            assert_eq!(segments.len(), (1 << (2 * k)) - 1);

            let points = single_line(&segments).unwrap();
            assert_eq!(points.len(), segments.len() + 1);
            assert_eq!(points, config.trace(&hilbert.commands, &symbols, point(0., 0.)));

            let size = Bounds::from_segments(&segments).size().unwrap();
            let side = ((1 << k) - 1) as f64;
            assert!((size.width - side).abs() < 1e-9, "{k}: {size:?}");
            assert!((size.height - side).abs() < 1e-9, "{k}: {size:?}");
        }
    }

    #[test]
    fn measure_agrees_with_draw() {
        let dragon = Curve::builtin("dragon").unwrap();
        let symbols = nth_generation(&dragon, 8);
        let config = TurtleConfig::default();
        let start = point(3., -4.);

        assert_eq!(
            config.measure(&dragon.commands, &symbols, start),
            Bounds::from_segments(&config.draw(&dragon.commands, &symbols, start))
        );
    }

    #[test]
    fn nothing_drawn_has_no_extent() {
        let config = TurtleConfig::default();
        let commands = CommandTable::default();
        assert!(config.measure(&commands, "+X-", point(2., 2.)).is_empty());
        assert!(config.trace(&commands, "+X-", point(2., 2.)).is_empty());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_turtle_config_fills_defaults() {
        let config = serde_json::from_str::<TurtleConfig>(r#"{"step_length":1.0}"#).unwrap();
        assert_eq!(
            config,
            TurtleConfig {
                step_length: 1.,
                ..Default::default()
            }
        );
    }
}
