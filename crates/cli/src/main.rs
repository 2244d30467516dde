//! inkport - Import a page's vector artwork as editable shapes
//!
//! Reads page dumps produced by the document parser (JSON with the page
//! viewport, operator list and text items), runs the import pipeline and
//! writes the resulting shapes and text items as JSON.

use clap::{ArgAction, Parser};
use inkport_core::error::Result;
use inkport_core::high_level::{ImportOptions, ImportResult, import_source};
use inkport_core::layout::{DEFAULT_GAP_MM, GroupParams};
use inkport_core::PageDocument;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Import page vector artwork as compound shapes and text items.
#[derive(Parser, Debug)]
#[command(name = "inkport")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more page dumps (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Maximum distance in millimetres between merged shapes
    #[arg(long, default_value_t = DEFAULT_GAP_MM)]
    gap: f64,

    /// Keep every painted path as its own shape
    #[arg(long = "no-grouping", action = ArgAction::SetTrue)]
    no_grouping: bool,

    /// Skip text items
    #[arg(long = "no-text", action = ArgAction::SetTrue)]
    no_text: bool,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Pretty-print the JSON output
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_options(args: &Args) -> std::result::Result<ImportOptions, String> {
    let grouping = if args.no_grouping {
        None
    } else if args.gap.is_finite() && args.gap >= 0.0 {
        Some(GroupParams::new(args.gap))
    } else {
        return Err(format!(
            "Invalid gap {}: expected a non-negative number of millimetres",
            args.gap
        ));
    };
    Ok(ImportOptions {
        grouping,
        extract_text: !args.no_text,
        cancel: None,
    })
}

fn import_path(path: &Path, options: &ImportOptions) -> Result<ImportResult> {
    let file = File::open(path)?;
    // SAFETY: the mapping is only read while parsing and dropped before return.
    let mmap = unsafe { Mmap::map(&file) }?;
    let doc = PageDocument::from_slice(&mmap)?;
    import_source(&doc, options)
}

fn render(result: &ImportResult, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.debug);

    let options = match build_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            std::process::exit(1);
        }

        let result = match import_path(path, &options) {
            Ok(result) => result,
            Err(e) => {
                output.flush()?;
                eprintln!("Error importing {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
        tracing::debug!(file = %path.display(), paths = result.path_count(), "imported");

        writeln!(output, "{}", render(&result, args.pretty)?)?;
        eprintln!("{}: {}", path.display(), result.summary());
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_defaults() {
        let args = Args::parse_from(["inkport", "page.json"]);
        let options = build_options(&args).unwrap();
        assert_eq!(options.grouping, Some(GroupParams::default()));
        assert!(options.extract_text);
    }

    #[test]
    fn test_build_options_flags() {
        let args = Args::parse_from(["inkport", "--no-grouping", "--no-text", "a.json"]);
        let options = build_options(&args).unwrap();
        assert!(options.grouping.is_none());
        assert!(!options.extract_text);
    }

    #[test]
    fn test_build_options_rejects_negative_gap() {
        let args = Args::parse_from(["inkport", "--gap=-2", "a.json"]);
        assert!(build_options(&args).is_err());
    }
}
