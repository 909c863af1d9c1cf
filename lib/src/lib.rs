/// Symbol to turtle operation tables
mod command;
mod error;
/// Segments, bounding boxes and polylines
mod geometry;
/// Axioms, rewriting rules and the built-in curves
mod grammar;
/// Turns a grown curve into a [Scene] ready for rendering
mod plot;
/// The boundary to whatever writes the image
mod render;
/// Growing generations by rewriting every symbol at once.
/// See [L-systems](https://en.wikipedia.org/wiki/L-system).
mod rewrite;
mod settings;
/// Interprets symbol strings as pen movements.
/// This concept is referred to as [Turtle graphics](https://en.wikipedia.org/wiki/Turtle_graphics).
mod turtle;

pub use command::{Command, CommandTable};
pub use error::Error;
pub use geometry::{Bounds, Segment, single_line};
pub use grammar::{BUILTIN_CURVES, Curve, Grammar, Rules};
pub use plot::{Mode, plot, plot_final, plot_overlay};
pub use render::{Layer, Renderer, Scene, Shape, Style};
pub use rewrite::{Generations, Limits, expand, expanded_len};
pub use settings::{GenerationConfig, OverlayConfig, Settings};
pub use turtle::{
    Interpreter, PolylineTurtle, PreprocessTurtle, SegmentTurtle, Turtle, TurtleConfig,
    TurtleState,
};

#[cfg(test)]
mod test {
    use super::*;
    use lyon_geom::point;
    use pretty_assertions::assert_eq;

    /// Draws every generation of a curve and checks the pieces agree with each other
    fn check_curve(name: &str, generations: usize) {
        let curve = Curve::builtin(name).unwrap();
        let config = TurtleConfig::default();

        for symbols in Generations::new(curve.grammar.rules(), curve.grammar.axiom())
            .take(generations)
            .map(Result::unwrap)
        {
            let segments = config.draw(&curve.commands, &symbols, point(0., 0.));
            let points = single_line(&segments).unwrap();

            assert_eq!(points.len(), segments.len() + 1);
            assert_eq!(Bounds::from_points(&points), Bounds::from_segments(&segments));
            assert_eq!(
                config.measure(&curve.commands, &symbols, point(0., 0.)),
                Bounds::from_segments(&segments)
            );
        }
    }

    #[test]
    fn dragon_is_consistent() {
        check_curve("dragon", 8);
    }

    #[test]
    fn hilbert_is_consistent() {
        check_curve("hilbert", 5);
    }

    #[test]
    fn default_settings_plot_both_modes() {
        let settings = Settings::default();
        for name in BUILTIN_CURVES {
            let curve = Curve::builtin(name).unwrap();
            let final_scene = plot(&curve, &settings, Mode::Final).unwrap();
            let overlay = plot(&curve, &settings, Mode::Overlay).unwrap();

            assert_eq!(final_scene.layers.len(), 1);
            assert_eq!(overlay.layers.len(), settings.generations.count);
            assert!(!final_scene.bounds().is_empty());
            assert!(!overlay.bounds().is_empty());
        }
    }
}
