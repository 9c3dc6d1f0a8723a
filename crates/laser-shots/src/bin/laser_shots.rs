use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use image::ImageReader;
use log::{info, warn};

use laser_shots::core::grayscale_from_rgb;
use laser_shots::detect::rgb_view;
use laser_shots::io::{ShotsConfig, ShotsReport};
use laser_shots::ShotColor;

#[derive(Debug, Parser)]
#[command(name = "laser-shots", version, about = "Detect laser dry-fire shots in camera frames")]
struct Cli {
    /// Log level filter (error, warn, info, debug, trace). `LASER_SHOTS_LOG` wins when set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit JSON log lines (requires the `tracing` feature).
    #[arg(long, global = true)]
    json_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Detect shots in a single frame and write a JSON report.
    Detect(DetectArgs),
}

#[derive(Debug, Args)]
struct DetectArgs {
    /// JSON config file (frame path, output path, detector settings).
    #[arg(long, required_unless_present = "image")]
    config: Option<PathBuf>,

    /// Frame image; overrides `frame_path` from the config.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Laser intensity threshold override.
    #[arg(long, allow_negative_numbers = true)]
    threshold: Option<i32>,

    /// Laser color to ignore (`red` or `green`).
    #[arg(long)]
    ignore: Option<ShotColor>,

    /// Report path override.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.json_log)?;

    match cli.command {
        Command::Detect(args) => run_detect(args),
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(level: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level: log::LevelFilter = level.parse()?;
    laser_shots::core::init_with_level(level)?;
    if json {
        warn!("--json-log needs the `tracing` feature; using plain logs");
    }
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(level: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", level);
    }
    laser_shots::core::init_tracing(json);
    // No-op when the subscriber already bridged `log` records.
    let _ = tracing_log::LogTracer::init();
    Ok(())
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(args)))]
fn run_detect(args: DetectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = match &args.config {
        Some(path) => ShotsConfig::load_json(path)?,
        None => {
            let image = args
                .image
                .as_ref()
                .ok_or("either --config or --image is required")?;
            ShotsConfig::new(image.to_string_lossy())
        }
    };
    apply_overrides(&mut cfg, &args);

    let frame = load_frame(Path::new(&cfg.frame_path))?;
    let view = rgb_view(&frame);
    info!(
        "loaded {} ({}x{}), threshold {}",
        cfg.frame_path,
        view.width,
        view.height,
        cfg.detector.laser_intensity_threshold()
    );

    let gray = grayscale_from_rgb(&view);
    let result = cfg.build_detector().detect(&view, &gray.view());
    if let Err(err) = &result {
        warn!("detection failed: {err}");
    }

    let mut report = ShotsReport::new(&cfg, args.config.as_deref(), view.width, view.height);
    report.set_result(result);
    for shot in &report.shots {
        info!("{} shot at ({:.1}, {:.1})", shot.color, shot.x(), shot.y());
    }

    let out_path = cfg.output_path();
    report.write_json(&out_path)?;
    println!(
        "detected {} shot(s); wrote report JSON to {}",
        report.shots.len(),
        out_path.display()
    );
    Ok(())
}

fn apply_overrides(cfg: &mut ShotsConfig, args: &DetectArgs) {
    if let Some(image) = &args.image {
        cfg.frame_path = image.to_string_lossy().into_owned();
    }
    if let Some(threshold) = args.threshold {
        cfg.detector.laser_intensity_threshold = threshold;
    }
    if let Some(color) = args.ignore {
        cfg.detector = cfg.detector.clone().with_ignored_color(color);
    }
    if let Some(out) = &args.out {
        cfg.output_path = Some(out.to_string_lossy().into_owned());
    }
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info"))]
fn load_frame(path: &Path) -> Result<image::RgbImage, Box<dyn std::error::Error>> {
    Ok(ImageReader::open(path)?.decode()?.to_rgb8())
}
