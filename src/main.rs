//! Small Caps - command line converter
//!
//! Prints its arguments in small capitals, or converts stdin line by line.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use smallcaps::config::Config;
use smallcaps::{GlyphTable, TextTransformer};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to convert; reads stdin when omitted
    text: Vec<String>,

    /// Glyph table to use instead of the configured one
    #[arg(short, long, value_enum)]
    table: Option<GlyphTable>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_error) = Config::load_or_default();

    // Setup logging, on stderr so stdout stays clean for output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(&config.log_level)
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!("⚠️ Using default config: {}", e);
    }

    let table = args.table.unwrap_or(config.glyph_table);
    info!("🔤 Small Caps v{} ({:?} table)", env!("CARGO_PKG_VERSION"), table);
    let transformer = TextTransformer::with_table(table);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.text.is_empty() {
        writeln!(out, "{}", transformer.transform(&args.text.join(" ")))?;
        return Ok(());
    }

    // Invalid UTF-8 becomes U+FFFD instead of ending the stream
    let mut stdin = io::stdin().lock();
    let mut raw = Vec::new();
    let mut converted = String::new();
    while stdin.read_until(b'\n', &mut raw)? > 0 {
        converted.clear();
        {
            let line = String::from_utf8_lossy(&raw);
            let line = line.strip_suffix('\n').unwrap_or(&line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            transformer.transform_into(line, &mut converted);
        }
        writeln!(out, "{}", converted)?;
        raw.clear();
    }
    debug!("stdin exhausted");

    Ok(())
}
