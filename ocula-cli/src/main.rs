use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use ocula::{
    BackendKind, Controller, ControllerEvent, ImageStore, PATTERN_NAMES, SessionConfig, Viewport,
    create_backend,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ocula", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pattern roster with comprehensive repeat counts.
    List(ListArgs),
    /// Simulate playback headlessly and print every pattern change.
    Schedule(ScheduleArgs),
    /// Render frames to numbered PNG files.
    Frames(FramesArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Single,
    Comprehensive,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Session config JSON (repeat counts come from here).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON object per line.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    #[arg(long, value_enum, default_value_t = Mode::Comprehensive)]
    mode: Mode,

    /// Roster index for single mode.
    #[arg(long, default_value_t = 0)]
    pattern: usize,

    /// Simulated duration in seconds.
    #[arg(long, default_value_t = 600.0)]
    seconds: f64,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON object per line.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out: PathBuf,

    /// Roster index to play in single mode.
    #[arg(long, default_value_t = 0, conflicts_with = "comprehensive")]
    pattern: usize,

    /// Play the comprehensive sequence instead of one pattern.
    #[arg(long, default_value_t = false)]
    comprehensive: bool,

    /// Number of frames to write.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Dark theme.
    #[arg(long, default_value_t = false)]
    dark: bool,

    /// Hide the guide grid.
    #[arg(long, default_value_t = false)]
    no_grid: bool,

    /// Directory holding the themed images.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Schedule(args) => cmd_schedule(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SessionConfig> {
    match path {
        Some(p) => SessionConfig::from_path(p)
            .with_context(|| format!("load session config '{}'", p.display())),
        None => Ok(SessionConfig::default()),
    }
}

fn check_pattern(index: usize) -> anyhow::Result<()> {
    anyhow::ensure!(
        index < PATTERN_NAMES.len(),
        "pattern index {index} is out of range (roster has {})",
        PATTERN_NAMES.len()
    );
    Ok(())
}

fn frame_interval_ms(fps: f64) -> anyhow::Result<f64> {
    anyhow::ensure!(fps.is_finite() && fps > 0.0, "fps must be positive");
    Ok(1000.0 / fps)
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    for (index, name) in PATTERN_NAMES.iter().enumerate() {
        let repeats = cfg.loops_for(index);
        if args.json {
            println!(
                "{}",
                serde_json::json!({ "index": index, "name": name, "repeats": repeats })
            );
        } else {
            println!("{index:>2}  {name:<28} x{repeats}");
        }
    }
    Ok(())
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let step = frame_interval_ms(args.fps)?;
    anyhow::ensure!(args.seconds >= 0.0, "seconds must not be negative");

    let mut controller = Controller::new(&cfg);
    match args.mode {
        Mode::Single => {
            check_pattern(args.pattern)?;
            controller.start_single(args.pattern);
        }
        Mode::Comprehensive => controller.start_comprehensive(),
    }

    // Timing does not depend on the surface, so nothing is drawn.
    let viewport = Viewport::new(0, 0);
    let end_ms = args.seconds * 1000.0;
    let mut now = 0.0;
    loop {
        for event in controller.drain_events() {
            print_event(now, event, args.json);
        }
        if now > end_ms {
            break;
        }
        controller.frame(now, viewport);
        now += step;
    }
    Ok(())
}

fn print_event(now_ms: f64, event: ControllerEvent, json: bool) {
    let ControllerEvent::PatternChanged { index, name } = event;
    let secs = now_ms / 1000.0;
    if json {
        println!(
            "{}",
            serde_json::json!({ "t_s": secs, "index": index, "name": name })
        );
    } else {
        println!("{secs:>9.3}s  {index:>2}  {name}");
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let step = frame_interval_ms(args.fps)?;
    anyhow::ensure!(
        args.width > 0 && args.height > 0,
        "width and height must be positive"
    );

    let mut store = ImageStore::new();
    if let Some(dir) = &args.assets {
        let names = [cfg.images.light.as_str(), cfg.images.dark.as_str()];
        let report = store.load_dir(dir, names);
        for (name, err) in &report.failed {
            tracing::warn!(asset = %name, error = %err, "image not loaded; it will not be drawn");
        }
    }

    let mut controller = Controller::new(&cfg);
    if args.dark {
        controller.set_dark_mode(true);
    }
    if args.no_grid {
        controller.set_show_grid(false);
    }
    if args.comprehensive {
        controller.start_comprehensive();
    } else {
        check_pattern(args.pattern)?;
        controller.start_single(args.pattern);
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let viewport = Viewport::new(args.width, args.height);
    let mut backend = create_backend(BackendKind::Cpu);
    let mut written = 0u32;
    for i in 0..args.frames {
        let now = f64::from(i) * step;
        let Some(list) = controller.frame(now, viewport) else {
            continue;
        };
        for event in controller.drain_events() {
            let ControllerEvent::PatternChanged { index, name } = event;
            tracing::info!(frame = i, index, name, "pattern changed");
        }
        let frame = backend
            .render(&list, &store)
            .with_context(|| format!("render frame {i}"))?;

        // The background is opaque, so premultiplied bytes equal straight RGBA.
        let path = args.out.join(format!("frame_{i:05}.png"));
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        written += 1;
    }

    eprintln!("wrote {written} frames to {}", args.out.display());
    Ok(())
}
