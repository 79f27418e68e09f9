use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "shotscript", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a storyboard from parameters.
    Generate(GenerateArgs),
    /// Convert an existing markdown storyboard to JSON or YAML.
    Convert(ConvertArgs),
    /// Generate one markdown storyboard per entry of a YAML job file.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Video title.
    #[arg(long, short = 't')]
    title: String,

    /// Duration in seconds.
    #[arg(long, short = 'd')]
    duration: Option<u32>,

    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Video-type preset (tech_tutorial, product_promo, story_telling, data_insight).
    #[arg(long, short = 'v', value_parser = parse_video_type)]
    video_type: Option<shotscript::VideoType>,

    /// Background style override.
    #[arg(long)]
    background: Option<String>,

    /// Visual style override.
    #[arg(long)]
    style: Option<String>,

    /// Character description override.
    #[arg(long, conflicts_with = "no_character")]
    character: Option<String>,

    /// Generate abstract visuals with no character.
    #[arg(long)]
    no_character: bool,

    /// Narration style override.
    #[arg(long)]
    narration: Option<String>,

    /// Config file (YAML) supplying defaults.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Preset table file (YAML) replacing the built-in presets.
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Output path. Defaults to `./docs/<sanitized-title>_storyboard.<ext>`.
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Skip embedding the execution prompt in JSON/YAML output.
    #[arg(long)]
    no_prompt: bool,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input markdown storyboard.
    #[arg(long = "in", short = 'i')]
    in_path: PathBuf,

    /// Output format.
    #[arg(long, short = 'f', value_enum)]
    format: ConvertFormat,

    /// Output path. Defaults to the input path with the extension swapped.
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Skip embedding the execution prompt.
    #[arg(long)]
    no_prompt: bool,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// YAML file holding a list of generation jobs.
    jobs: PathBuf,

    /// Output directory for the generated markdown files.
    #[arg(long, default_value = "./docs")]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
    Yaml,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConvertFormat {
    Json,
    Yaml,
}

impl From<ConvertFormat> for shotscript::ExportFormat {
    fn from(f: ConvertFormat) -> Self {
        match f {
            ConvertFormat::Json => shotscript::ExportFormat::Json,
            ConvertFormat::Yaml => shotscript::ExportFormat::Yaml,
        }
    }
}

/// One entry of a batch job file.
#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchJob {
    title: String,
    duration_seconds: Option<u32>,
    fps: Option<u32>,
    video_type: Option<String>,
    background_style: Option<String>,
    visual_style: Option<String>,
    character: Option<String>,
    narration_style: Option<String>,
}

fn parse_video_type(s: &str) -> Result<shotscript::VideoType, String> {
    shotscript::VideoType::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = shotscript::VideoType::ALL.iter().map(|t| t.name()).collect();
        format!("unknown video type '{s}' (expected one of: {})", names.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Convert(args) => cmd_convert(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut builder = shotscript::StoryboardBuilder::new(&args.title);
    if let Some(d) = args.duration {
        builder = builder.duration_seconds(d);
    }
    if let Some(fps) = args.fps {
        builder = builder.fps(fps);
    }
    if let Some(t) = args.video_type {
        builder = builder.video_type(t);
    }
    if let Some(s) = args.background {
        builder = builder.background_style(s);
    }
    if let Some(s) = args.style {
        builder = builder.visual_style(s);
    }
    if args.no_character {
        builder = builder.no_character();
    } else if let Some(s) = args.character {
        builder = builder.main_character(s);
    }
    if let Some(s) = args.narration {
        builder = builder.narration_style(s);
    }
    if let Some(path) = &args.config {
        builder = builder.config(shotscript::GeneratorConfig::load(path));
    }
    if let Some(path) = &args.presets {
        builder = builder.presets(shotscript::PresetTable::load(path));
    }

    let board = builder.build()?;

    let (text, ext) = match args.format {
        OutputFormat::Markdown => (shotscript::render_markdown(&board), "md"),
        OutputFormat::Json => (
            shotscript::export_structured(&board, shotscript::ExportFormat::Json, !args.no_prompt)?,
            "json",
        ),
        OutputFormat::Yaml => (
            shotscript::export_structured(&board, shotscript::ExportFormat::Yaml, !args.no_prompt)?,
            "yaml",
        ),
    };

    let out = args.out.unwrap_or_else(|| {
        PathBuf::from("./docs").join(format!(
            "{}_storyboard.{ext}",
            shotscript::sanitize_title(&board.title)
        ))
    });
    write_output(&out, &text)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let md = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read storyboard '{}'", args.in_path.display()))?;
    let board = shotscript::parse_markdown(&md);
    let format: shotscript::ExportFormat = args.format.into();
    let text = shotscript::export_structured(&board, format, !args.no_prompt)?;

    let out = args
        .out
        .unwrap_or_else(|| args.in_path.with_extension(format.extension()));
    write_output(&out, &text)?;
    eprintln!("converted {} -> {}", args.in_path.display(), out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let src = std::fs::read_to_string(&args.jobs)
        .with_context(|| format!("read job file '{}'", args.jobs.display()))?;
    let jobs: Vec<BatchJob> =
        serde_yaml::from_str(&src).with_context(|| "parse job file YAML")?;

    let total = jobs.len();
    for (i, job) in jobs.into_iter().enumerate() {
        let mut builder = shotscript::StoryboardBuilder::new(&job.title);
        if let Some(d) = job.duration_seconds {
            builder = builder.duration_seconds(d);
        }
        if let Some(fps) = job.fps {
            builder = builder.fps(fps);
        }
        if let Some(name) = &job.video_type {
            builder = builder.video_type(
                parse_video_type(name).map_err(|e| anyhow::anyhow!("job '{}': {e}", job.title))?,
            );
        }
        if let Some(s) = job.background_style {
            builder = builder.background_style(s);
        }
        if let Some(s) = job.visual_style {
            builder = builder.visual_style(s);
        }
        if let Some(s) = job.character {
            builder = builder.main_character(s);
        }
        if let Some(s) = job.narration_style {
            builder = builder.narration_style(s);
        }

        let board = builder.build()?;
        let out = args.out_dir.join(format!(
            "{}_storyboard.md",
            shotscript::sanitize_title(&board.title)
        ));
        write_output(&out, &shotscript::render_markdown(&board))?;
        eprintln!("[{}/{total}] wrote {}", i + 1, out.display());
    }
    Ok(())
}

fn write_output(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}
