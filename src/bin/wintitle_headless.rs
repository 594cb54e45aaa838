//! Wintitle Headless Runner
//!
//! Feeds window title notifications through the title block without a bar.
//! Each input line is one JSON payload. Icons are read from property dumps
//! named `<window>.icon` in the icon directory.

use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use wintitle::app::{Config, IconConfig};
use wintitle::core::TitleSnapshot;
use wintitle::icon::{DirIconSource, IconSource, NoIcons};
use wintitle::{CellMeasure, WindowTitle};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut input_file: Option<String> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut icon_dir: Option<PathBuf> = None;
    let mut icon_size: Option<u32> = None;
    let mut output_format = OutputFormat::Text;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(args[i].clone());
                }
            },
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-i" | "--icons" => {
                i += 1;
                if i < args.len() {
                    icon_dir = Some(PathBuf::from(&args[i]));
                }
            },
            "-s" | "--icon-size" => {
                i += 1;
                if i < args.len() {
                    icon_size = Some(parse_icon_size(&args[i]));
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let mut config = match &config_file {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => Config::load_or_default(),
    };
    if let Some(size) = icon_size {
        config.icon.size = size;
        config.icon.enabled = size > 0;
    }
    if icon_dir.is_some() {
        config.icon.dump_dir = icon_dir;
    }

    let measure = CellMeasure::new(config.text.cell_width);
    let icons: Box<dyn IconSource> = match &config.icon.dump_dir {
        Some(dir) => Box::new(DirIconSource::new(dir)),
        None => Box::new(NoIcons),
    };
    let mut title = WindowTitle::new(config.icon.effective_size());

    // Read input
    let reader: Box<dyn Read> = match &input_file {
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => Box::new(io::stdin()),
    };

    // Process one notification per line
    let mut failures = 0usize;
    for (lineno, line) in BufReader::new(reader).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                return ExitCode::FAILURE;
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        let record = match title.handle_payload(line.as_bytes(), &measure, &*icons) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(
                    "Could not parse windowtitle event on line {}: {}",
                    lineno + 1,
                    e
                );
                failures += 1;
                continue;
            },
        };

        let snapshot = TitleSnapshot::from_record(record);
        match output_format {
            OutputFormat::Text => println!("{}", snapshot.to_text()),
            OutputFormat::Json => match serde_json::to_string(&snapshot) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing snapshot: {}", e);
                    return ExitCode::FAILURE;
                },
            },
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Icon size from the command line, falling back to the default on bad input
fn parse_icon_size(arg: &str) -> u32 {
    arg.parse().unwrap_or_else(|_| {
        let fallback = IconConfig::default().size;
        tracing::warn!("Invalid icon size '{}', using {}", arg, fallback);
        fallback
    })
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn print_help() {
    println!("Wintitle Headless Runner");
    println!();
    println!("Usage: wintitle-headless [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>      Read payloads from file");
    println!("  -c, --config <PATH>    Load configuration from PATH");
    println!("  -i, --icons <DIR>      Read icon property dumps from DIR");
    println!("  -s, --icon-size <N>    Preferred icon size, 0 disables icons");
    println!("  -j, --json             Output titles as JSON");
    println!("  -t, --text             Output titles as text (default)");
    println!("  -h, --help             Show this help message");
    println!();
    println!("Each input line is one JSON payload. If no input file is");
    println!("specified, reads from stdin.");
    println!();
    println!("Examples:");
    println!("  echo '{{\"windowtitle\":\"vim\"}}' | wintitle-headless");
    println!("  wintitle-headless --json -i dumps/ events.jsonl");
}
