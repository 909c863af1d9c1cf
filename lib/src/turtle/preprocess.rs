use lyon_geom::Point;

use super::Turtle;
use crate::geometry::Bounds;

/// Folds strokes into a bounding box without keeping them
#[derive(Debug, Default)]
pub struct PreprocessTurtle {
    current_position: Point<f64>,
    pub bounds: Bounds,
}

impl Turtle for PreprocessTurtle {
    fn begin(&mut self) {}

    fn end(&mut self) {}

    fn move_to(&mut self, to: Point<f64>) {
        self.current_position = to;
    }

    fn line_to(&mut self, to: Point<f64>) {
        self.bounds.include_point(self.current_position);
        self.bounds.include_point(to);
        self.current_position = to;
    }
}
