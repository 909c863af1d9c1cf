use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use lsys2svg::{BUILTIN_CURVES, Curve, Mode, Renderer, Scene, Settings, plot};

mod svg;
use svg::SvgRenderer;

#[derive(Debug, Parser)]
#[command(name = "lsys2svg", author, version, about)]
struct Opt {
    /// Name of a built-in curve
    #[arg(default_value = "hilbert")]
    curve: String,
    /// A JSON curve definition (name, axiom, rules and optionally commands), used instead
    /// of a built-in curve
    #[arg(long, value_name = "FILE")]
    grammar: Option<PathBuf>,
    /// A JSON settings file. Options given on the command line take precedence.
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
    /// Draw only the last generation, or every generation on top of each other
    #[arg(long, value_enum, default_value_t = ModeArg::Overlay)]
    mode: ModeArg,
    /// Number of generations to grow
    #[arg(long)]
    generations: Option<usize>,
    /// Initial step length
    #[arg(long)]
    step_length: Option<f64>,
    /// Factor applied by the scaling commands (in overlay mode, also the nesting factor)
    #[arg(long)]
    step_scaler: Option<f64>,
    /// Turn angle in degrees
    #[arg(long)]
    turn_angle: Option<f64>,
    /// Stroke color
    #[arg(long)]
    stroke: Option<String>,
    /// Stroke opacity
    #[arg(long)]
    opacity: Option<f64>,
    /// Stroke width (of the first generation, in overlay mode)
    #[arg(long)]
    width: Option<f64>,
    /// List the built-in curves and exit
    #[arg(long)]
    list: bool,
    /// Output file path (overwrites old files), else writes to stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Final,
    Overlay,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Final => Mode::Final,
            ModeArg::Overlay => Mode::Overlay,
        }
    }
}

impl Opt {
    /// Override loaded settings with whatever was given on the command line
    fn apply(&self, settings: &mut Settings) {
        if let Some(count) = self.generations {
            settings.generations.count = count;
        }
        if let Some(step_length) = self.step_length {
            settings.turtle.step_length = step_length;
        }
        if let Some(step_scaler) = self.step_scaler {
            match self.mode {
                ModeArg::Final => settings.turtle.step_scaler = step_scaler,
                ModeArg::Overlay => settings.overlay.step_scaler = step_scaler,
            }
        }
        if let Some(turn_angle) = self.turn_angle {
            settings.turtle.turn_angle = turn_angle.to_radians();
        }
        if let Some(stroke) = &self.stroke {
            settings.style.stroke = stroke.clone();
        }
        if let Some(opacity) = self.opacity {
            settings.style.opacity = opacity;
        }
        if let Some(width) = self.width {
            settings.style.width = width;
        }
    }

    fn curve(&self) -> io::Result<Curve> {
        match &self.grammar {
            Some(path) => Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?),
            None => Curve::builtin(&self.curve).map_err(io::Error::other),
        }
    }

    fn settings(&self) -> io::Result<Settings> {
        let mut settings = match &self.settings {
            Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
            None => Settings::default(),
        };
        self.apply(&mut settings);
        Ok(settings)
    }
}

fn write_scene(scene: &Scene, out: impl Write) -> io::Result<()> {
    SvgRenderer::new(out).render(scene)
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("lsys2svg=info")).init();

    let opt = Opt::parse();

    if opt.list {
        let mut stdout = io::stdout().lock();
        for name in BUILTIN_CURVES {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let curve = opt.curve()?;
    let settings = opt.settings()?;
    let mode = Mode::from(opt.mode);

    let scene = plot(&curve, &settings, mode).map_err(io::Error::other)?;

    if let Some(bounding_box) = scene.bounds().get() {
        info!(
            "{} ({:?}, {} generations) spans {:?} to {:?}",
            curve.name, mode, settings.generations.count, bounding_box.min, bounding_box.max
        );
    }

    if let Some(out_path) = opt.out {
        write_scene(&scene, BufWriter::new(File::create(out_path)?))
    } else {
        write_scene(&scene, io::stdout().lock())
    }
}
