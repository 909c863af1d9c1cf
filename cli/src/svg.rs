use std::io::{self, Write};

use lsys2svg::{Renderer, Scene, Shape, Style};
use lyon_geom::Point;

/// Decimal places kept for coordinates and stroke attributes
const PRECISION: i32 = 6;

/// viewBox extent used along an axis the scene does not span
const MIN_EXTENT: f64 = 1.;

/// Writes a [Scene] as a standalone SVG document, viewbox fitted to the scene bounds
#[derive(Debug)]
pub struct SvgRenderer<W: Write> {
    out: W,
}

impl<W: Write> SvgRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, from: Point<f64>, to: Point<f64>, style: &Style) -> io::Result<()> {
        writeln!(
            self.out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            number(from.x),
            number(from.y),
            number(to.x),
            number(to.y),
            stroke_attributes(style)
        )
    }

    fn polyline(&mut self, points: &[Point<f64>], style: &Style) -> io::Result<()> {
        let points = points
            .iter()
            .map(|p| format!("{},{}", number(p.x), number(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            self.out,
            r#"  <polyline points="{}" {}/>"#,
            points,
            stroke_attributes(style)
        )
    }
}

impl<W: Write> Renderer for SvgRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, scene: &Scene) -> io::Result<()> {
        let Some(view_box) = scene.bounds().get() else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "the scene has nothing to draw",
            ));
        };
        // A straight stroke has no extent across it, pad that side so the viewBox stays valid
        let mut size = view_box.size();
        let mut origin = view_box.min;
        if size.width <= 0. {
            size.width = MIN_EXTENT;
            origin.x -= MIN_EXTENT / 2.;
        }
        if size.height <= 0. {
            size.height = MIN_EXTENT;
            origin.y -= MIN_EXTENT / 2.;
        }

        writeln!(self.out, r#"<?xml version="1.0" encoding="utf-8" ?>"#)?;
        writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="{} {} {} {}">"#,
            number(origin.x),
            number(origin.y),
            number(size.width),
            number(size.height)
        )?;

        for layer in &scene.layers {
            match &layer.shape {
                Shape::Lines(segments) => {
                    for segment in segments {
                        self.line(segment.from, segment.to, &layer.style)?;
                    }
                }
                Shape::Polyline(points) if points.is_empty() => {}
                Shape::Polyline(points) => self.polyline(points, &layer.style)?,
            }
        }

        writeln!(self.out, "</svg>")?;
        self.out.flush()
    }
}

fn stroke_attributes(style: &Style) -> String {
    format!(
        r#"fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
        escape(&style.stroke),
        number(style.opacity),
        number(style.width)
    )
}

/// Round to [PRECISION] places, dropping trailing zeros and negative zero
fn number(value: f64) -> String {
    let scale = 10f64.powi(PRECISION);
    let scaled = value * scale;
    // Values this large have no fractional digits left to round
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };
    if rounded == 0. {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

fn escape(attribute: &str) -> String {
    let mut escaped = String::with_capacity(attribute.len());
    for c in attribute.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}
