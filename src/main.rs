//! swarnam - render HTML/CSS/JS snippet blocks in the terminal
//!
//! Reads a block from a file (or stdin) and prints its highlighted source
//! panes, its preview document, or a line-by-line tokenizer trace.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use tracing::Level;

use swarnam::config::Config;
use swarnam::error::{Result, SwarnamError};
use swarnam::preview::HtmlPreview;
use swarnam::render::{self, Diagnostics};
use swarnam::terminal::PaneWriter;
use swarnam::{DocumentSession, SwarnamTokenizer};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    file: Option<String>,
    preview: bool,
    lines: bool,
    no_color: bool,
    dark: bool,
    verbose: bool,
}

/// Prints diagnostics in place of the rendered block
struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn report_error(&mut self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns false when the block was rejected with a diagnostic
fn run() -> Result<bool> {
    let mut options = Options::default();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(true);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(true);
            }
            "--preview" => options.preview = true,
            "--lines" => options.lines = true,
            "--no-color" => options.no_color = true,
            "--dark" => options.dark = true,
            "--verbose" | "-v" => options.verbose = true,
            "-" => options.file = None,
            s if s.starts_with('-') => {
                return Err(SwarnamError::Message(format!("Unknown option: {}", s)));
            }
            _ => options.file = Some(arg.clone()),
        }
    }

    init_logging(options.verbose);

    let mut config = Config::load();
    if options.no_color {
        config.color = false;
    }
    if options.dark {
        config.dark_mode = true;
    }

    let source = read_source(options.file.as_deref())?;
    let tokenizer = SwarnamTokenizer::builtin();

    if options.lines {
        print_lines(&tokenizer, &source);
        return Ok(true);
    }

    let mut preview = HtmlPreview::new(config.dark_mode);
    let Some(rendered) = render::render(&source, &tokenizer, &mut preview, &mut StderrDiagnostics) else {
        return Ok(false);
    };

    if options.preview {
        print!("{}", rendered.preview);
    } else {
        let mut writer = PaneWriter::new(io::stdout().lock(), &config);
        writer.write_panes(&rendered.panes)?;
    }

    Ok(true)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn read_source(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Drive the incremental tokenizer one line at a time, as an editor would
fn print_lines(tokenizer: &SwarnamTokenizer, source: &str) {
    let lines: Vec<&str> = source.lines().collect();
    let mut session = DocumentSession::new(tokenizer);

    for (idx, line) in lines.iter().enumerate() {
        let spans = session.highlight_line(&lines, idx);
        let segment = session.segment_at(idx).map_or("?", |kind| kind.label());
        let classes: Vec<String> = spans.iter().map(|s| s.token_type.css_class()).collect();
        println!("{:>4} {:<4} {}  [{}]", idx + 1, segment, line, classes.join(" "));
    }

    session.dispose();
}

fn print_usage() {
    println!("swarnam {} - HTML/CSS/JS snippet renderer", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: swarnam [OPTIONS] [FILE]");
    println!();
    println!("Reads the block from FILE, or from stdin when FILE is absent or -.");
    println!("Segments are separated by lines containing only ---*---");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!("      --preview  Print the preview document instead of source panes");
    println!("      --lines    Print the segment and token classes of every line");
    println!("      --no-color Disable terminal colours");
    println!("      --dark     Use light preview text for dark backgrounds");
    println!("  -v, --verbose  Log debug output to stderr");
    println!();
    println!("Settings are read from ~/.swarnam.toml");
}

fn print_version() {
    println!("swarnam {}", env!("CARGO_PKG_VERSION"));
}
