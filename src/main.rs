use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use colorlasso::config::{Config, OutputFormat};
use colorlasso::draw::{Point, Region};
use colorlasso::session::{Session, WriterSink};
use colorlasso::{loader, replay, util};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "colorlasso")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("COLORLASSO_GIT_HASH"), ")"),
    about = "Average color of a hand-drawn image region"
)]
struct Cli {
    /// Print one JSON object per result instead of text
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    json: bool,

    /// Include a color-unmixer link with each result
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    unmixer: bool,

    /// Sample the image at native size instead of fitting it to the display limits
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    no_fit: bool,

    /// Read settings from this file instead of ~/.config/colorlasso/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Average one region given in buffer coordinates
    Sample(SampleArgs),

    /// Feed a JSON script of pointer events through a selection session
    Replay {
        /// Image to analyze
        image: PathBuf,

        /// Replay script (JSON)
        script: PathBuf,
    },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("region").required(true).multiple(false)))]
struct SampleArgs {
    /// Image to analyze
    image: PathBuf,

    /// Rectangle corners
    #[arg(long, group = "region", value_name = "X1,Y1,X2,Y2", value_parser = util::parse_quad, allow_hyphen_values = true)]
    rect: Option<[f64; 4]>,

    /// Circle center and a point on its edge
    #[arg(long, group = "region", value_name = "CX,CY,EX,EY", value_parser = util::parse_quad, allow_hyphen_values = true)]
    circle: Option<[f64; 4]>,

    /// Polygon vertices, e.g. "10,10 90,10 50,80"
    #[arg(long, group = "region", value_name = "POINTS", value_parser = parse_polygon, allow_hyphen_values = true)]
    polygon: Option<PointList>,
}

/// Vertex list wrapper so clap treats the whole argument as one value.
#[derive(Debug, Clone)]
struct PointList(Vec<Point>);

fn parse_polygon(input: &str) -> Result<PointList, String> {
    util::parse_point_list(input).map(PointList)
}

impl SampleArgs {
    fn region(&self) -> Option<Region> {
        if let Some([x1, y1, x2, y2]) = self.rect {
            return Some(Region::rectangle(Point::new(x1, y1), Point::new(x2, y2)));
        }
        if let Some([cx, cy, ex, ey]) = self.circle {
            return Some(Region::circle(Point::new(cx, cy), Point::new(ex, ey)));
        }
        self.polygon
            .as_ref()
            .map(|points| Region::polygon(points.0.clone()))
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let reports = match &cli.command {
        Command::Sample(args) => run_sample(&config, args, cli.unmixer)?,
        Command::Replay { image, script } => run_replay(&config, image, script, cli.unmixer)?,
    };

    if reports == 0 {
        eprintln!("no pixels selected");
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.no_fit {
        config.canvas.fit_to_display = false;
    }

    Ok(config)
}

fn new_session(config: &Config, image: &Path, unmixer: bool) -> Result<Session> {
    let buffer = loader::load_image(image, &config.canvas)?;
    let unmixer = unmixer.then(|| config.output.unmixer_url.clone());
    let sink = WriterSink::new(io::stdout(), config.output.format, unmixer);
    Ok(Session::with_buffer(
        buffer,
        config.input_state(),
        Box::new(sink),
    ))
}

fn run_sample(config: &Config, args: &SampleArgs, unmixer: bool) -> Result<usize> {
    let region = args
        .region()
        .context("one of --rect, --circle or --polygon is required")?;
    let mut session = new_session(config, &args.image, unmixer)?;
    Ok(usize::from(session.analyze(&region).is_some()))
}

fn run_replay(config: &Config, image: &Path, script: &Path, unmixer: bool) -> Result<usize> {
    let script = replay::load_script(script)?;
    let mut session = new_session(config, image, unmixer)?;

    let (width, height) = session
        .buffer()
        .map(|buffer| (buffer.width(), buffer.height()))
        .context("session has no image")?;

    let mut reports = 0;
    for event in script.into_events(width, height) {
        if session.handle_event(&event).is_some() {
            reports += 1;
        }
    }

    log::info!("Replay produced {reports} result(s)");
    Ok(reports)
}
