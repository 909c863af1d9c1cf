use lyon_geom::{Box2D, LineSegment, Point, euclid::default::Size2D, vector};

use crate::error::Error;

/// A straight stroke left behind by the turtle
pub type Segment = LineSegment<f64>;

/// Axis-aligned extent of everything folded into it so far.
///
/// Starts out empty and only gains a box once the first point is included.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds(Option<Box2D<f64>>);

impl Bounds {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> Self {
        let mut bounds = Self::new();
        bounds.include_segments(segments);
        bounds
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point<f64>>) -> Self {
        let mut bounds = Self::new();
        bounds.include_points(points);
        bounds
    }

    pub fn include_point(&mut self, p: Point<f64>) {
        self.0 = Some(match self.0 {
            Some(bounding_box) => Box2D::new(bounding_box.min.min(p), bounding_box.max.max(p)),
            None => Box2D::new(p, p),
        });
    }

    pub fn include_points<'a>(&mut self, points: impl IntoIterator<Item = &'a Point<f64>>) {
        points.into_iter().for_each(|p| self.include_point(*p));
    }

    pub fn include_segment(&mut self, segment: &Segment) {
        self.include_point(segment.from);
        self.include_point(segment.to);
    }

    pub fn include_segments<'a>(&mut self, segments: impl IntoIterator<Item = &'a Segment>) {
        segments
            .into_iter()
            .for_each(|segment| self.include_segment(segment));
    }

    pub fn union(&self, other: &Self) -> Self {
        match (self.0, other.0) {
            // Box2D::union drops degenerate boxes, which a straight stroke or a lone
            // point produces.
            (Some(a), Some(b)) => Self(Some(Box2D::new(a.min.min(b.min), a.max.max(b.max)))),
            (a, b) => Self(a.or(b)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn get(&self) -> Option<Box2D<f64>> {
        self.0
    }

    /// Width and height, if anything has been included
    pub fn size(&self) -> Option<Size2D<f64>> {
        self.0.map(|bounding_box| bounding_box.size())
    }
}

/// Collapse a contiguous run of segments into the points it passes through.
///
/// Each segment must start where the previous one ended, which always holds for the
/// output of a single turtle walk. Returns [Error::NonContiguous] at the first break.
pub fn single_line(segments: &[Segment]) -> Result<Vec<Point<f64>>, Error> {
    let Some(first) = segments.first() else {
        return Ok(vec![]);
    };

    let mut points = Vec::with_capacity(segments.len() + 1);
    points.push(first.from);
    points.push(first.to);

    for (index, pair) in segments.windows(2).enumerate() {
        let (previous, segment) = (&pair[0], &pair[1]);
        if !(segment.from - previous.to)
            .abs()
            .lower_than(vector(f64::EPSILON, f64::EPSILON))
            .all()
        {
            return Err(Error::NonContiguous { index: index + 1 });
        }
        points.push(segment.to);
    }

    Ok(points)
}
