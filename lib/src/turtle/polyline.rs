use lyon_geom::Point;

use super::Turtle;

/// Records the points the pen passes through.
///
/// A walk never lifts the pen after it starts, so this is always a single connected
/// polyline. The starting point only appears once something has been drawn.
#[derive(Debug, Default)]
pub struct PolylineTurtle {
    start: Point<f64>,
    pub points: Vec<Point<f64>>,
}

impl Turtle for PolylineTurtle {
    fn begin(&mut self) {
        self.points.clear();
    }

    fn end(&mut self) {}

    fn move_to(&mut self, to: Point<f64>) {
        // Moving after drawing would break the polyline.
        debug_assert!(self.points.is_empty());
        self.start = to;
    }

    fn line_to(&mut self, to: Point<f64>) {
        if self.points.is_empty() {
            self.points.push(self.start);
        }
        self.points.push(to);
    }
}
