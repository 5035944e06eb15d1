// Render gradient-raster gradients to PNG files.
//
// Usage:
//   gradient-render linear <x0> <y0> <x1> <y1> [-o out.png] [--stop POS:RRGGBBAA]...
//   gradient-render radial <cx> <cy> <r> [--fx <fx>] [--fy <fy>] [-o out.png]
//   gradient-render demo [--out-dir <dir>]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gradient_raster::Stop;
use gradient_render::{default_stops, demo_scenes, init_logging, parse_stop, save_png, Scene};
use log::info;

#[derive(Parser)]
#[command(name = "gradient-render")]
#[command(version, about = "Render linear and radial gradients to PNG", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CanvasSize {
    /// Image width in pixels
    #[arg(long, default_value_t = 512)]
    width: u32,
    /// Image height in pixels
    #[arg(long, default_value_t = 512)]
    height: u32,
}

#[derive(Args)]
struct Ramp {
    /// Color stop as POS:RRGGBBAA or POS:RRGGBB; repeat for more stops.
    /// Defaults to red, translucent green, blue.
    #[arg(long = "stop", value_parser = parse_stop_arg)]
    stops: Vec<Stop>,
}

impl Ramp {
    fn into_stops(self) -> Vec<Stop> {
        if self.stops.is_empty() {
            default_stops()
        } else {
            self.stops
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Linear gradient along (x0, y0) -> (x1, y1), in canvas fractions
    #[command(allow_negative_numbers = true)]
    Linear {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        /// Output file
        #[arg(short, long, default_value = "linear.png")]
        output: PathBuf,
        #[command(flatten)]
        canvas: CanvasSize,
        #[command(flatten)]
        ramp: Ramp,
    },
    /// Radial gradient around (cx, cy) with radius r, in canvas fractions
    #[command(allow_negative_numbers = true)]
    Radial {
        cx: f64,
        cy: f64,
        r: f64,
        /// Focus x (defaults to cx)
        #[arg(long)]
        fx: Option<f64>,
        /// Focus y (defaults to cy)
        #[arg(long)]
        fy: Option<f64>,
        /// Output file
        #[arg(short, long, default_value = "radial.png")]
        output: PathBuf,
        #[command(flatten)]
        canvas: CanvasSize,
        #[command(flatten)]
        ramp: Ramp,
    },
    /// Write the five reference renders
    Demo {
        /// Directory to write into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        #[command(flatten)]
        canvas: CanvasSize,
    },
}

fn parse_stop_arg(s: &str) -> std::result::Result<Stop, String> {
    parse_stop(s).map_err(|e| format!("{:#}", e))
}

fn render_to(scene: Scene, canvas: &CanvasSize, stops: &[Stop], output: &Path) -> Result<()> {
    let img = scene
        .render(canvas.width, canvas.height, stops)
        .with_context(|| format!("rendering {:?}", scene))?;
    save_png(output, &img)?;
    info!("Saved: {}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Linear {
            x0,
            y0,
            x1,
            y1,
            output,
            canvas,
            ramp,
        } => {
            let scene = Scene::Linear { x0, y0, x1, y1 };
            render_to(scene, &canvas, &ramp.into_stops(), &output)?;
        }
        Commands::Radial {
            cx,
            cy,
            r,
            fx,
            fy,
            output,
            canvas,
            ramp,
        } => {
            let scene = Scene::Radial {
                cx,
                cy,
                r,
                fx: fx.unwrap_or(cx),
                fy: fy.unwrap_or(cy),
            };
            render_to(scene, &canvas, &ramp.into_stops(), &output)?;
        }
        Commands::Demo { out_dir, canvas } => {
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            let stops = default_stops();
            for (name, scene) in demo_scenes() {
                render_to(scene, &canvas, &stops, &out_dir.join(name))?;
            }
        }
    }
    Ok(())
}
