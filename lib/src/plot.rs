use log::{debug, info};
use lyon_geom::point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    command::CommandTable,
    error::Error,
    geometry::single_line,
    grammar::Curve,
    render::{Layer, Scene, Shape, Style},
    rewrite::Generations,
    settings::Settings,
    turtle::TurtleConfig,
};

/// How the generations of a curve end up in the [Scene]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    /// Only the last generation, from the origin, as individual segments
    Final,
    /// Every generation as a polyline, each one smaller, thinner and closer to the origin
    #[default]
    Overlay,
}

pub fn plot(curve: &Curve, settings: &Settings, mode: Mode) -> Result<Scene, Error> {
    let scene = match mode {
        Mode::Final => plot_final(curve, settings)?,
        Mode::Overlay => plot_overlay(curve, settings)?,
    };

    if let Some(bounding_box) = scene.bounds().get() {
        debug!(
            "Plotted {} layers of {} within {:?}",
            scene.layers.len(),
            curve.name,
            bounding_box
        );
    }
    Ok(scene)
}

/// Draw the last generation from the origin.
///
/// Generations are plain expansions here, nothing is prepended to them.
pub fn plot_final(curve: &Curve, settings: &Settings) -> Result<Scene, Error> {
    let mut last = None;
    for generation in Generations::new(curve.grammar.rules(), curve.grammar.axiom())
        .with_limits(settings.generations.limits())
        .take(settings.generations.count)
    {
        last = Some(generation?);
    }

    let Some(symbols) = last else {
        info!("No generations requested, nothing to draw");
        return Ok(Scene::default());
    };

    let segments = settings
        .turtle
        .draw(&curve.commands, &symbols, point(0., 0.));
    Ok(Scene {
        layers: vec![Layer {
            shape: Shape::Lines(segments),
            style: settings.style.clone(),
        }],
    })
}

/// Draw every generation, nested towards the origin.
///
/// Generation `i` is drawn from `step_length * scaler^(i+1)` on both axes, and has `i`
/// copies of the shrinking command in front of it so its step is `step_length * scaler^i`.
/// The stroke width shrinks by the decay factor with every generation.
pub fn plot_overlay(curve: &Curve, settings: &Settings) -> Result<Scene, Error> {
    let config = TurtleConfig {
        step_scaler: settings.overlay.step_scaler,
        ..settings.turtle.clone()
    };
    let shrink = CommandTable::shrinking_command(config.step_scaler);
    let prefix = curve
        .commands
        .symbol_for(shrink)
        .ok_or(Error::MissingCommand(shrink))?;
    let decay = settings.overlay.stroke_width_decay();

    let mut layers = vec![];
    let mut width = settings.style.width;
    for (i, generation) in Generations::new(curve.grammar.rules(), curve.grammar.axiom())
        .with_prefix(Some(prefix))
        .with_limits(settings.generations.limits())
        .take(settings.generations.count)
        .enumerate()
    {
        let generation = generation?;
        let offset = config.step_length * config.step_scaler.powi(i as i32 + 1);
        let segments = config.draw(&curve.commands, &generation, point(offset, offset));

        layers.push(Layer {
            shape: Shape::Polyline(single_line(&segments)?),
            style: Style {
                width,
                ..settings.style.clone()
            },
        });
        width *= decay;
    }

    Ok(Scene { layers })
}
