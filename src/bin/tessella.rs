use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tessella", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose images into a grid and write a PNG.
    Render(RenderArgs),
    /// Print the default configuration for editing.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Layout configuration, JSON or YAML. Malformed content degrades to
    /// the default layout.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Divide the bare canvas instead of the margin-aware layout (no
    /// background fill, no shadow).
    #[arg(long)]
    simple: bool,

    /// Output path; defaults to the configured file name.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Images to place, in grid order (row-major).
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = ConfigFormat::Yaml)]
    format: ConfigFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConfigFormat {
    Yaml,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<tessella::GridConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config '{}'", path.display()))?;
    Ok(tessella::parse_config(&text))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => tessella::GridConfig::default(),
    };

    let mut images = Vec::with_capacity(args.images.len());
    for path in &args.images {
        let decoded =
            image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
        images.push(decoded.to_rgba8());
    }

    let composite = if args.simple {
        tessella::composite_grid(&images, &config)?
    } else {
        tessella::render_grid(&images, &config)?
    };

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(&config.file_name));
    composite
        .raster
        .save(&out)
        .with_context(|| format!("save '{}'", out.display()))?;
    println!("{}", out.display());
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = tessella::GridConfig::default();
    let text = match args.format {
        ConfigFormat::Yaml => config.to_yaml_string()?,
        ConfigFormat::Json => config.to_json_string()?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
