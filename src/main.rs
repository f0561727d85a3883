//! hilite - print a file with syntax highlighting
//!
//! Front end for the highlight engine: loads the config, picks a
//! language for the file and renders the highlighted lines to the
//! terminal.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use hilite::error::{HighlightError, Result};
use hilite::highlight::{HighlightController, HighlightOutcome, MemoryBuffer, TextBuffer};
use hilite::render::Renderer;
use hilite::Config;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "HILITE_LOG";

/// Command line options
#[derive(Debug, Default)]
struct Options {
    file: Option<PathBuf>,
    full: bool,
    /// 1-based inclusive line range
    lines: Option<(usize, usize)>,
    max_lines: Option<usize>,
    config: Option<PathBuf>,
    language: Option<String>,
    list: bool,
    number: bool,
    verbose: u8,
    help: bool,
    version: bool,
}

fn main() {
    let opts = match parse_args(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Try 'hilite --help' for more information.");
            process::exit(2);
        }
    };

    if opts.help {
        print_usage();
        return;
    }
    if opts.version {
        print_version();
        return;
    }

    init_logging(opts.verbose);

    if let Err(e) = run(opts) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Options> {
    let mut opts = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => opts.help = true,
            "--version" | "-V" => opts.version = true,
            "--full" | "-f" => opts.full = true,
            "--list" | "-L" => opts.list = true,
            "--number" | "-n" => opts.number = true,
            "--lines" | "-l" => {
                let value = required(&mut args, &arg)?;
                opts.lines = Some(parse_line_range(&value)?);
            }
            "--max-lines" => {
                let value = required(&mut args, &arg)?;
                let n = value
                    .parse()
                    .map_err(|_| HighlightError::Message(format!("invalid line count: {}", value)))?;
                opts.max_lines = Some(n);
            }
            "--config" | "-c" => opts.config = Some(PathBuf::from(required(&mut args, &arg)?)),
            "--language" | "-x" => opts.language = Some(required(&mut args, &arg)?),
            v if v.starts_with("-v") && v[1..].chars().all(|c| c == 'v') => {
                opts.verbose = opts.verbose.saturating_add((v.len() - 1) as u8);
            }
            "--verbose" => opts.verbose = opts.verbose.saturating_add(1),
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(HighlightError::Message(format!("unknown option: {}", s)));
            }
            _ => {
                if opts.file.is_some() {
                    return Err(HighlightError::Message(format!("unexpected argument: {}", arg)));
                }
                opts.file = Some(PathBuf::from(&arg));
            }
        }
    }

    Ok(opts)
}

fn required<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| HighlightError::Message(format!("{} requires a value", flag)))
}

/// Parse `A:B`, `A:` or `A` into a 1-based inclusive range
fn parse_line_range(value: &str) -> Result<(usize, usize)> {
    let invalid = || HighlightError::Message(format!("invalid line range: {}", value));
    let (first, last) = match value.split_once(':') {
        Some((a, "")) => (a.parse().map_err(|_| invalid())?, usize::MAX),
        Some((a, b)) => (a.parse().map_err(|_| invalid())?, b.parse().map_err(|_| invalid())?),
        None => {
            let n = value.parse().map_err(|_| invalid())?;
            (n, n)
        }
    };
    if first == 0 || last < first {
        return Err(invalid());
    }
    Ok((first, last))
}

fn run(opts: Options) -> Result<()> {
    let config = match &opts.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let mut settings = config.highlight;
    if let Some(n) = opts.max_lines {
        settings.max_lines = n.max(1);
    }
    if opts.full {
        settings.visible_only = false;
    } else if opts.lines.is_some() {
        settings.visible_only = true;
    }

    let registry = Arc::new(config.build_registry());

    if opts.list {
        for id in registry.list_languages() {
            println!("{}", id);
        }
        return Ok(());
    }

    let path = opts
        .file
        .ok_or_else(|| HighlightError::Message("no input file".to_string()))?;
    let bytes = fs::read(&path)?;
    let mut buffer = MemoryBuffer::new(&String::from_utf8_lossy(&bytes));

    // A trailing newline does not start a line worth printing
    let mut count = buffer.line_count();
    if count > 1 && buffer.line(count - 1).is_some_and(|l| l.is_empty()) {
        count -= 1;
    }

    let shown = match opts.lines {
        Some((first, last)) => (first - 1).min(count)..last.min(count),
        None => 0..count,
    };
    if !shown.is_empty() {
        buffer.set_viewport(shown.start, shown.end - 1);
    }

    let mut controller = HighlightController::new(registry, settings);

    match &opts.language {
        Some(id) => {
            controller
                .set_language_by_id(&mut buffer, id)
                .ok_or_else(|| HighlightError::Message(format!("unknown language: {}", id)))?;
        }
        None => {
            controller.set_language(&mut buffer, &path);
        }
    }

    match controller.highlight(&mut buffer, None) {
        HighlightOutcome::Applied { lines, spans, rejected } => {
            debug!(first = lines.start, last = lines.end, spans, rejected, "highlighted");
        }
        HighlightOutcome::Abandoned { reason } => warn!("highlighting abandoned: {}", reason),
        outcome => debug!(?outcome, "nothing highlighted"),
    }

    let renderer = if opts.number {
        Renderer::new().with_line_numbers()
    } else {
        Renderer::new()
    };
    let stdout = io::stdout();
    renderer.render(&buffer, shown, &mut stdout.lock())
}

fn print_usage() {
    println!("hilite {} - syntax highlighting for the terminal", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: hilite [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -l, --lines A:B      Show and highlight lines A to B (1-based)");
    println!("  -f, --full           Highlight from the top of the document");
    println!("      --max-lines N    Highlight at most N lines per pass");
    println!("  -x, --language ID    Use language ID instead of detecting it");
    println!("  -c, --config PATH    Read settings from PATH instead of ~/.hilite.toml");
    println!("  -n, --number         Show line numbers");
    println!("  -L, --list           List known languages");
    println!("  -v, --verbose        Log more (repeat for debug and trace)");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Set {} to a tracing filter (e.g. hilite=debug) to control logging.", LOG_ENV);
}

fn print_version() {
    println!("hilite {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_flags() {
        let opts = parse(&["-vv", "--lines", "10:20", "--max-lines", "50", "main.rs"]).unwrap();
        assert_eq!(opts.verbose, 2);
        assert_eq!(opts.lines, Some((10, 20)));
        assert_eq!(opts.max_lines, Some(50));
        assert_eq!(opts.file, Some(PathBuf::from("main.rs")));
        assert!(!opts.full);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--lines"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["a", "b"]).is_err());
        assert!(parse(&["--max-lines", "x"]).is_err());
    }

    #[test]
    fn test_line_range() {
        assert_eq!(parse_line_range("3:7").unwrap(), (3, 7));
        assert_eq!(parse_line_range("5").unwrap(), (5, 5));
        assert_eq!(parse_line_range("5:").unwrap(), (5, usize::MAX));
        assert!(parse_line_range("0:4").is_err());
        assert!(parse_line_range("9:4").is_err());
        assert!(parse_line_range("a:b").is_err());
    }
}
