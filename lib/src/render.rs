use lyon_geom::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Segment};

/// Stroke attributes of a [Layer]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Style {
    /// Any color the output format understands, e.g. `black` or `#ff0000`
    #[cfg_attr(feature = "serde", serde(default = "default_stroke"))]
    pub stroke: String,
    #[cfg_attr(feature = "serde", serde(default = "default_one"))]
    pub opacity: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_one"))]
    pub width: f64,
}

fn default_stroke() -> String {
    "black".to_string()
}

const fn default_one() -> f64 {
    1.
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: default_stroke(),
            opacity: default_one(),
            width: default_one(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Independent strokes, drawn in order
    Lines(Vec<Segment>),
    /// One connected stroke through every point
    Polyline(Vec<Point<f64>>),
}

impl Shape {
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Lines(segments) => Bounds::from_segments(segments),
            Shape::Polyline(points) => Bounds::from_points(points),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub shape: Shape,
    pub style: Style,
}

/// Everything a [Renderer] needs to produce an image.
///
/// Layers are painted in order, so later layers end up on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Union of the extents of every layer. Empty if nothing is drawn.
    pub fn bounds(&self) -> Bounds {
        self.layers
            .iter()
            .fold(Bounds::new(), |acc, layer| acc.union(&layer.shape.bounds()))
    }
}

/// Output sink for a finished [Scene], e.g. a vector image writer
pub trait Renderer {
    type Error;

    fn render(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}
