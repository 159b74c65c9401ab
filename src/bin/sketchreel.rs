use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sketchreel", version)]
struct Cli {
    #[command(flatten)]
    global: Global,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct Global {
    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Render configuration JSON. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the hand-drawn wiggle; omit for a fresh look every run.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Leave sound cues out of the script.
    #[arg(long, global = true)]
    no_sound: bool,

    /// Font file used to measure text. Without it a fixed-advance estimate is used.
    #[arg(long, global = true)]
    font: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the fight script as timeline JSON.
    Script(OutArgs),
    /// Dry-run the script and print every driver call as a JSON line.
    Play(PlayArgs),
    /// Evaluate one frame and print the visible groups as JSON.
    Frame(FrameArgs),
    /// Synthesize one sound effect as raw mono f32le at 44.1 kHz.
    Sfx(SfxArgs),
    /// Mix every sound cue of the script into one raw mono f32le track.
    Soundtrack(RequiredOut),
    /// Write the static download page.
    Publish(PublishArgs),
}

#[derive(Args, Debug)]
struct OutArgs {
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RequiredOut {
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Timeline JSON to play instead of the built-in script.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Timeline JSON to sample instead of the built-in script.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    #[command(flatten)]
    out: OutArgs,
}

#[derive(Args, Debug)]
struct SfxArgs {
    /// Effect name, e.g. `thwip` or `arrow-shot`.
    name: String,

    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PublishArgs {
    /// Directory that holds the media tree and receives `index.html`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let config = load_config(cli.global.config.as_deref())?;
    match cli.cmd {
        Command::Script(args) => cmd_script(&cli.global, args),
        Command::Play(args) => cmd_play(&cli.global, &config, args),
        Command::Frame(args) => cmd_frame(&cli.global, &config, args),
        Command::Sfx(args) => cmd_sfx(args),
        Command::Soundtrack(args) => cmd_soundtrack(&cli.global, &config, args),
        Command::Publish(args) => cmd_publish(&cli.global, &config, args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<sketchreel::RenderConfig> {
    match path {
        Some(p) => Ok(sketchreel::RenderConfig::from_path(p)?),
        None => Ok(sketchreel::RenderConfig::default()),
    }
}

fn story_options(global: &Global) -> sketchreel::StoryOptions {
    sketchreel::StoryOptions {
        sound_effects: !global.no_sound,
        seed: global.seed,
    }
}

fn make_measure(font: Option<&Path>) -> anyhow::Result<Box<dyn sketchreel::TextMeasure>> {
    Ok(match font {
        Some(path) => {
            let m = sketchreel::ParleyTextMeasure::from_path(path)
                .with_context(|| format!("load measurement font '{}'", path.display()))?;
            tracing::info!(family = m.family_name(), "measuring text with font");
            Box::new(m)
        }
        None => Box::new(sketchreel::ApproxTextMeasure::default()),
    })
}

fn build_script(global: &Global) -> anyhow::Result<sketchreel::Timeline> {
    let mut measure = make_measure(global.font.as_deref())?;
    let timeline = sketchreel::build_story(&story_options(global), measure.as_mut())
        .with_context(|| "build stickman fight script")?;
    Ok(timeline)
}

fn load_or_build(global: &Global, in_path: Option<&Path>) -> anyhow::Result<sketchreel::Timeline> {
    match in_path {
        Some(p) => Ok(sketchreel::Timeline::from_path(p)?),
        None => build_script(global),
    }
}

fn write_output(out: Option<&Path>, body: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, body).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(body.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .with_context(|| "write to stdout")?;
        }
    }
    Ok(())
}

fn cmd_script(global: &Global, args: OutArgs) -> anyhow::Result<()> {
    let timeline = build_script(global)?;
    write_output(args.out.as_deref(), &timeline.to_json_pretty()?)
}

fn cmd_play(
    global: &Global,
    config: &sketchreel::RenderConfig,
    args: PlayArgs,
) -> anyhow::Result<()> {
    let timeline = load_or_build(global, args.in_path.as_deref())?;
    let mut driver = sketchreel::RecordingDriver::new();
    let mut bank = sketchreel::SoundBank::new();
    let summary = sketchreel::play(&timeline, config.fps()?, &mut driver, &mut bank)
        .with_context(|| "play timeline")?;

    let mut stdout = std::io::stdout().lock();
    for event in &driver.events {
        let line = serde_json::to_string(event).with_context(|| "serialize playback event")?;
        writeln!(stdout, "{line}").with_context(|| "write to stdout")?;
    }
    eprintln!(
        "{} steps, {} frames, {:.2}s, {} sound cues",
        summary.steps,
        summary.total_frames,
        summary.total_secs,
        summary.cues.len()
    );
    Ok(())
}

fn cmd_frame(
    global: &Global,
    config: &sketchreel::RenderConfig,
    args: FrameArgs,
) -> anyhow::Result<()> {
    let timeline = load_or_build(global, args.in_path.as_deref())?;
    let frame = sketchreel::eval_frame(
        &timeline,
        config.fps()?,
        sketchreel::FrameIndex(args.frame),
    )?;
    let json = serde_json::to_string_pretty(&frame).with_context(|| "serialize frame")?;
    write_output(args.out.out.as_deref(), &json)
}

fn cmd_sfx(args: SfxArgs) -> anyhow::Result<()> {
    let effect = sketchreel::SoundEffect::from_name(&args.name)?;
    let clip = sketchreel::SoundBank::new().clip(effect)?;
    sketchreel::write_mix_to_f32le_file(clip.samples(), &args.out)?;
    eprintln!(
        "wrote {} ({effect}, {} samples)",
        args.out.display(),
        clip.len()
    );
    Ok(())
}

fn cmd_soundtrack(
    global: &Global,
    config: &sketchreel::RenderConfig,
    args: RequiredOut,
) -> anyhow::Result<()> {
    let timeline = build_script(global)?;
    let mut bank = sketchreel::SoundBank::new();
    let summary = sketchreel::play(
        &timeline,
        config.fps()?,
        &mut sketchreel::RecordingDriver::new(),
        &mut bank,
    )?;
    let track = sketchreel::build_soundtrack(&summary.cues, summary.total_secs)?;
    sketchreel::write_mix_to_f32le_file(&track, &args.out)?;
    eprintln!(
        "wrote {} ({} cues, {} samples)",
        args.out.display(),
        summary.cues.len(),
        track.len()
    );
    Ok(())
}

fn cmd_publish(
    global: &Global,
    config: &sketchreel::RenderConfig,
    args: PublishArgs,
) -> anyhow::Result<()> {
    let timeline = build_script(global)?;
    let secs = timeline.total_secs().round() as u32;
    let page = sketchreel::DownloadPage::for_config(config, secs, !global.no_sound);
    let published = sketchreel::publish(config, &page, &args.out_dir)?;
    eprintln!("wrote {}", published.page.display());
    Ok(())
}
