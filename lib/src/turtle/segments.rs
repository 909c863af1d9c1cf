use lyon_geom::{LineSegment, Point};

use super::Turtle;
use crate::geometry::Segment;

/// Records every stroke as a separate segment, in drawing order
#[derive(Debug, Default)]
pub struct SegmentTurtle {
    current_position: Point<f64>,
    pub segments: Vec<Segment>,
}

impl Turtle for SegmentTurtle {
    fn begin(&mut self) {
        self.segments.clear();
    }

    fn end(&mut self) {}

    fn move_to(&mut self, to: Point<f64>) {
        self.current_position = to;
    }

    fn line_to(&mut self, to: Point<f64>) {
        self.segments.push(LineSegment {
            from: self.current_position,
            to,
        });
        self.current_position = to;
    }
}
