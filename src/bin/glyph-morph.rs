use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use glyph_morph::{Emotion, LetterReport, PipelineConfig, Ratio};

#[derive(Parser, Debug)]
#[command(name = "glyph-morph", version)]
struct Cli {
    /// Pipeline config JSON (defaults are used for anything it leaves out).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert hand-drawn sources into SDF files.
    Sdf(LetterArgs),
    /// Resize every raster in a folder in place.
    Resize(ResizeArgs),
    /// Linear blend of two still images into a black/white image.
    Blend(BlendArgs),
    /// Render one morph video per letter (requires `ffmpeg` on PATH).
    Video(LetterArgs),
    /// Weighted blend of several expressions of one letter into a still image.
    Mix(MixArgs),
}

#[derive(Args, Debug)]
struct LetterArgs {
    /// Letters to process; defaults to the configured list.
    #[arg(long = "letter")]
    letters: Vec<char>,

    /// Process letters on a worker pool.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count for --parallel.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct ResizeArgs {
    /// Folder to resize; defaults to the configured SDF folder.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Target square size; defaults to the configured size.
    #[arg(long)]
    size: Option<u32>,
}

#[derive(Args, Debug)]
struct BlendArgs {
    /// First input image.
    #[arg(long)]
    a: PathBuf,

    /// Second input image.
    #[arg(long)]
    b: PathBuf,

    /// Mix ratio in [0, 1]; 0 keeps `a`, 1 keeps `b`.
    #[arg(long, default_value_t = 0.5)]
    ratio: f32,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct MixArgs {
    /// Letter whose stored SDFs are blended.
    #[arg(long)]
    letter: char,

    /// Relative weight per expression, as `emotion=weight` (repeatable).
    #[arg(long = "weight", value_parser = parse_weight, required = true)]
    weights: Vec<(Emotion, f32)>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Sdf(args) => cmd_sdf(cfg, args),
        Command::Resize(args) => cmd_resize(cfg, args),
        Command::Blend(args) => cmd_blend(args),
        Command::Video(args) => cmd_video(cfg, args),
        Command::Mix(args) => cmd_mix(cfg, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PipelineConfig> {
    match path {
        Some(p) => PipelineConfig::load(p).with_context(|| format!("load config '{}'", p.display())),
        None => Ok(PipelineConfig::default()),
    }
}

fn apply_letter_args(mut cfg: PipelineConfig, args: &LetterArgs) -> anyhow::Result<PipelineConfig> {
    if !args.letters.is_empty() {
        cfg.letters = args.letters.clone();
    }
    if args.parallel {
        cfg.threading.parallel = true;
    }
    if args.threads.is_some() {
        cfg.threading.threads = args.threads;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_sdf(cfg: PipelineConfig, args: LetterArgs) -> anyhow::Result<()> {
    let cfg = apply_letter_args(cfg, &args)?;
    let reports = glyph_morph::convert_all(&cfg)?;
    for r in &reports {
        if let Ok(paths) = &r.outcome {
            eprintln!("{}: wrote {} sdf files", r.letter, paths.len());
        }
    }
    summarize(&reports)
}

fn cmd_resize(cfg: PipelineConfig, args: ResizeArgs) -> anyhow::Result<()> {
    let dir = args.dir.unwrap_or_else(|| cfg.sdf_dir.clone());
    let size = args.size.unwrap_or(cfg.resize);
    let n = glyph_morph::resize_folder(&dir, size)?;
    eprintln!("resized {n} files in {} to {size}x{size}", dir.display());
    Ok(())
}

fn cmd_blend(args: BlendArgs) -> anyhow::Result<()> {
    let ratio = Ratio::new(args.ratio)?;
    glyph_morph::blend_files(&args.a, &args.b, ratio, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_video(cfg: PipelineConfig, args: LetterArgs) -> anyhow::Result<()> {
    let cfg = apply_letter_args(cfg, &args)?;
    let reports = glyph_morph::render_videos(&cfg)?;
    for r in &reports {
        if let Ok(path) = &r.outcome {
            eprintln!("wrote {}", path.display());
        }
    }
    summarize(&reports)
}

fn cmd_mix(cfg: PipelineConfig, args: MixArgs) -> anyhow::Result<()> {
    glyph_morph::validate_letter(args.letter)?;
    glyph_morph::mix_still(&cfg, args.letter, &args.weights, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn summarize<T>(reports: &[LetterReport<T>]) -> anyhow::Result<()> {
    let failed: Vec<String> = reports
        .iter()
        .filter_map(|r| match &r.outcome {
            Ok(_) => None,
            Err(e) => Some(format!("{}: {e}", r.letter)),
        })
        .collect();
    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} letters failed:\n  {}",
            failed.len(),
            reports.len(),
            failed.join("\n  ")
        );
    }
    Ok(())
}

fn parse_weight(s: &str) -> Result<(Emotion, f32), String> {
    let (name, weight) = s
        .split_once('=')
        .ok_or_else(|| format!("expected 'emotion=weight', got '{s}'"))?;
    let emotion = name.parse::<Emotion>().map_err(|e| e.to_string())?;
    let weight = weight
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("bad weight '{weight}': {e}"))?;
    Ok((emotion, weight))
}
