//! `glint`: render a scene of spheres to PPM, PNG or JPEG.
//!
//! Run with: cargo run --release -- out.png --scene scene.json

mod config;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_renderer::{output, Camera, ImageFormat};
use log::LevelFilter;

use crate::config::{RenderFile, Rule};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "glint", version, about = "Render a scene of spheres to PPM, PNG or JPEG")]
struct Args {
    /// Output file (.ppm, .png, .jpg or .jpeg). PPM goes to stdout when omitted.
    output: Option<PathBuf>,

    /// JSON render description (camera, depth, ambient, spheres)
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Maximum bounces per ray
    #[arg(long)]
    depth: Option<u32>,

    /// Rays per pixel
    #[arg(long, short = 's')]
    samples: Option<u32>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Which collision governs a bounce when several spheres are hit
    #[arg(long, value_enum)]
    rule: Option<Rule>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

impl Args {
    /// Load the render file (or the demo) and apply command line overrides.
    fn render_file(&self) -> Result<RenderFile> {
        let mut file = match &self.scene {
            Some(path) => RenderFile::load(path)?,
            None => RenderFile::default(),
        };

        if let Some(depth) = self.depth {
            file.depth = depth;
        }
        if let Some(samples) = self.samples {
            file.camera.samples_per_pixel = samples;
        }
        if let Some(width) = self.width {
            file.camera.width = width;
        }
        if let Some(height) = self.height {
            file.camera.height = height;
        }
        if let Some(rule) = self.rule {
            file.rule = rule;
        }
        Ok(file)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    // Reject unknown extensions before spending time on the render
    let format = match &args.output {
        Some(path) => Some(ImageFormat::from_path(path)?),
        None => None,
    };

    let file = args.render_file()?;
    let scene = file.build_scene().context("building scene")?;
    let options = file.camera_options();
    let config = file.render_config();

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {:?} rule",
        options.width,
        options.height,
        options.samples_per_pixel,
        config.max_depth,
        config.selection
    );

    let mut camera = Camera::new(&options).context("building camera")?;
    camera.take_picture_with(&scene, &config);
    let image = camera.image();

    match (&args.output, format) {
        (Some(path), Some(_)) => {
            output::save(&image, path)
                .with_context(|| format!("failed writing image to {}", path.display()))?;
        }
        _ => {
            let stdout = io::stdout();
            output::write_ppm(&image, io::BufWriter::new(stdout.lock()))
                .context("failed writing image to stdout")?;
        }
    }

    Ok(())
}
