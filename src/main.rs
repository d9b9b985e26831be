use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use qrlens::{analyze, AnalysisResult, ECLevel, Inspector, QRError, RenderConfig, Rgb};

#[derive(Parser)]
#[command(name = "qrlens")]
#[command(about = "Generate QR codes and inspect what they carry", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text as a QR code PNG
    Encode {
        /// Text to encode, passed through unchanged
        text: String,

        /// Output file
        #[arg(short, long, default_value = "qrcode.png")]
        output: PathBuf,

        /// Canvas width in pixels
        #[arg(long, default_value_t = 300)]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = 300)]
        height: u32,

        /// Module color, e.g. "#000000"
        #[arg(long)]
        fg: Option<Rgb>,

        /// Background color, e.g. "#ffffff"
        #[arg(long)]
        bg: Option<Rgb>,

        /// Error correction level (L, M, Q, H)
        #[arg(long, default_value = "H")]
        ec: ECLevel,

        /// Light modules on a dark background
        #[arg(long)]
        dark: bool,

        /// Print a PNG data URI instead of writing a file
        #[arg(long)]
        data_uri: bool,
    },

    /// Decode the QR code in an image and analyse its payload
    Decode {
        /// Image file (PNG, JPEG, GIF, BMP, WebP)
        path: PathBuf,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyse text as if it had been scanned
    Analyze {
        text: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let inspector = Inspector::default();

    match cli.command {
        Commands::Encode { text, output, width, height, fg, bg, ec, dark, data_uri } => {
            let mut config = if dark { RenderConfig::dark() } else { RenderConfig::new() };
            config.width(width).height(height).ec_level(ec);
            if let Some(fg) = fg {
                config.foreground(fg);
            }
            if let Some(bg) = bg {
                config.background(bg);
            }

            let generated = match inspector.generate(&text, &config) {
                Err(QRError::EmptyData) => anyhow::bail!("Please enter text to generate a QR code"),
                res => res.context("Failed to generate QR code")?,
            };

            if data_uri {
                println!("{}", generated.to_data_uri()?);
            } else {
                generated
                    .image
                    .save(&output)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                info!("QR code saved to: {}", output.display());
            }
            print_analysis(&generated.analysis, false)
        }

        Commands::Decode { path, json } => {
            let img = image::open(&path)
                .with_context(|| format!("Failed to load image {}", path.display()))?;

            let res = match inspector.read(&img) {
                Err(QRError::SymbolNotFound) => {
                    anyhow::bail!("No QR code found in image. Please use a clear QR code image.")
                }
                res => res.context("Failed to decode QR code")?,
            };
            print_analysis(&res, json)
        }

        Commands::Analyze { text, json } => print_analysis(&analyze(&text, None), json),
    }
}

fn print_analysis(res: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(res)?);
        return Ok(());
    }

    println!("{}: {}", res.kind, res.fields.title());
    for (label, value) in res.fields.entries() {
        println!("  {label:<12} {value}");
    }
    println!("  {:<12} {}", "Format", res.format);
    if let Some(v) = res.symbol_metadata.version {
        println!("  {:<12} {v}", "Version");
    }
    if let Some(m) = res.symbol_metadata.mask_pattern {
        println!("  {:<12} {m}", "Mask");
    }
    println!("  {:<12} {}", "Raw bytes", res.raw_bytes_hex);
    Ok(())
}
