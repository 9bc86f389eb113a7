use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use inkmorph::{
    AnimationCoordinator, AnimationData, Clock as _, Drawing, FontSpec, GlyphMeasure,
    LayoutEngine, ManualClock, MonospaceRatio, MorphConfig, ParleyMeasure, Prediction, Surface,
};

#[derive(Parser, Debug)]
#[command(name = "inkmorph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the character grid of a text as JSON.
    Layout(LayoutArgs),
    /// Render a scene's morph pass as one PNG per frame.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[arg(long)]
    text: String,

    /// Canvas width in logical pixels.
    #[arg(long)]
    width: f64,

    #[arg(long, default_value_t = 0.0)]
    padding: f64,

    #[arg(long, default_value_t = 16.0)]
    font_size: f32,

    /// TTF/OTF file to measure with; glyph ratios are used when absent.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `frame_NNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Scene {
    surface: SceneSurface,
    #[serde(default)]
    text_context: String,
    drawing: Drawing,
    prediction: Prediction,
    animation_data: AnimationData,
    #[serde(default)]
    config: Option<MorphConfig>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneSurface {
    width: f64,
    height: f64,
    #[serde(default = "unit_ratio")]
    device_pixel_ratio: f64,
}

fn unit_ratio() -> f64 {
    1.0
}

#[derive(Debug, serde::Serialize)]
struct LayoutReport {
    advance: f64,
    ascent: f64,
    rows: usize,
    positions: Vec<inkmorph::CharacterPosition>,
}

#[derive(Debug, serde::Serialize)]
struct RenderReport {
    frames: u64,
    draws: u64,
    duration_ms: u64,
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_font(path: &Path) -> anyhow::Result<ParleyMeasure> {
    let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    Ok(ParleyMeasure::from_font_bytes(&bytes)?)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let data = AnimationData {
        canvas_width: args.width,
        padding: args.padding,
        scroll_top: 0.0,
        font_size: args.font_size,
    };
    data.validate()?;

    let report = match &args.font {
        Some(path) => {
            let measure = load_font(path)?;
            let family = measure.family_name().to_string();
            layout_report(measure, &family, &args.text, &data)?
        }
        None => layout_report(MonospaceRatio::default(), "monospace", &args.text, &data)?,
    };

    let out = serde_json::to_string_pretty(&report).context("serialize layout")?;
    println!("{out}");
    Ok(())
}

fn layout_report<M: GlyphMeasure>(
    measure: M,
    family: &str,
    text: &str,
    data: &AnimationData,
) -> anyhow::Result<LayoutReport> {
    let mut engine = LayoutEngine::new(measure);
    engine.set_font(FontSpec::new(family, data.font_size)?);
    let metrics = engine.metrics()?;
    let positions = engine.layout(text, data.wrap_width())?;
    Ok(LayoutReport {
        advance: metrics.advance,
        ascent: metrics.ascent,
        rows: positions.rows(),
        positions: positions.iter().map(|(_, p)| p).collect(),
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let f = std::fs::File::open(&args.in_path)
        .with_context(|| format!("open scene '{}'", args.in_path.display()))?;
    let scene: Scene = serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parse scene '{}'", args.in_path.display()))?;

    let mut config = scene.config.clone().unwrap_or_default().with_env_overrides(|key| {
        std::env::var(key).ok()
    });
    let report = match &args.font {
        Some(path) => {
            let measure = load_font(path)?;
            config.font_family = measure.family_name().to_string();
            render_scene(measure, config, &scene, &args.out_dir)?
        }
        None => render_scene(MonospaceRatio::default(), config, &scene, &args.out_dir)?,
    };

    let out = serde_json::to_string_pretty(&report).context("serialize report")?;
    println!("{out}");
    eprintln!("wrote {} frames to {}", report.frames + 1, args.out_dir.display());
    Ok(())
}

fn render_scene<M: GlyphMeasure>(
    measure: M,
    config: MorphConfig,
    scene: &Scene,
    out_dir: &Path,
) -> anyhow::Result<RenderReport> {
    config.validate()?;
    let mut surface = Surface::new(
        scene.surface.width,
        scene.surface.height,
        scene.surface.device_pixel_ratio,
    )?;
    surface.paint_drawing(&scene.drawing, &config.ink);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;
    inkmorph::render::png::write_surface_png(&surface, &out_dir.join("frame_0000.png"))?;

    let clock = ManualClock::new();
    let interval = config.frame_interval();
    let mut coordinator = AnimationCoordinator::new(measure, config);
    let mut handle = coordinator.animate(
        &scene.text_context,
        &scene.prediction,
        &scene.drawing,
        &mut surface,
        &scene.animation_data,
        clock.now(),
    )?;

    let mut write_err: Option<inkmorph::MorphError> = None;
    let stats = handle.drive_with(&clock, &mut surface, interval, |s, i| {
        if write_err.is_some() {
            return;
        }
        let path = out_dir.join(format!("frame_{:04}.png", i + 1));
        if let Err(e) = inkmorph::render::png::write_surface_png(s, &path) {
            write_err = Some(e);
        }
    });
    if let Some(e) = write_err {
        return Err(e.into());
    }

    Ok(RenderReport {
        frames: stats.frames,
        draws: stats.draws,
        duration_ms: clock.now().as_millis() as u64,
        out_dir: out_dir.to_path_buf(),
    })
}
