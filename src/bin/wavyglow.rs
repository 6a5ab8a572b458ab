use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wavyglow::{Compositor, Fps, FrameRGBA, GlowConfig, GlowState, wavy_contour};

#[derive(Parser, Debug)]
#[command(name = "wavyglow", version)]
struct Cli {
    /// Log driver and compositor activity to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the glow at one point in time as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Frames(FramesArgs),
    /// Print the wavy outline at a given phase.
    Contour(ContourArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Glow configuration JSON; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Animation time in milliseconds since the driver started.
    #[arg(long, default_value_t = 0)]
    time_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to render.
    #[arg(long)]
    count: u64,

    /// Frames per second used to step the driver.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output directory; frames are written as `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct ContourArgs {
    #[arg(long)]
    config: Option<PathBuf>,

    /// Phase in radians added to the configured wave phase.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    phase: f64,

    /// Print SVG path data instead of JSON points.
    #[arg(long)]
    svg: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Contour(args) => cmd_contour(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<GlowConfig> {
    match path {
        Some(p) => GlowConfig::load(p).with_context(|| format!("load config '{}'", p.display())),
        None => Ok(GlowConfig::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let mut driver = cfg.driver()?;
    driver.start();
    driver.fast_forward(Duration::from_millis(args.time_ms));

    let frame = render_state(&cfg, &mut Compositor::new(), driver.state())?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let fps = Fps::new(args.fps, 1)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut driver = cfg.driver()?;
    let mut compositor = Compositor::new();
    let mut session = driver.session();
    for i in 0..args.count {
        let frame = render_state(&cfg, &mut compositor, session.state())?;
        write_png(&args.out_dir.join(format!("frame_{i:05}.png")), &frame)?;
        session.advance_frames(fps, 1);
    }

    eprintln!("wrote {} frames to {}", args.count, args.out_dir.display());
    Ok(())
}

fn cmd_contour(args: ContourArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let glow = &cfg.glow;
    let wave = glow.wave.with_phase(glow.wave.phase + args.phase);
    let contour = wavy_contour(
        glow.outline_rect(cfg.content_bounds()),
        glow.corner_radius,
        &wave,
    );

    if args.svg {
        println!("{}", contour.to_path().to_svg());
    } else {
        let s = serde_json::to_string_pretty(&contour).context("serialize contour")?;
        println!("{s}");
    }
    Ok(())
}

fn render_state(
    cfg: &GlowConfig,
    compositor: &mut Compositor,
    state: &GlowState,
) -> anyhow::Result<FrameRGBA> {
    let base = cfg.base_frame()?;
    let frame = cfg
        .glow
        .render(compositor, &base, cfg.content_bounds(), state)
        .context("render glow")?;
    Ok(frame)
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
