use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use mygrep::Pattern;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to match each line against
    #[arg(
        short = 'E',
        long = "extended-regexp",
        value_name = "PATTERN",
        allow_hyphen_values = true
    )]
    pattern: String,

    /// Files to search (standard input if none, or for `-`)
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Print nothing, only set the exit status
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Select lines that do not match
    #[arg(short = 'v', long)]
    invert_match: bool,

    /// Print the number of selected lines for each input
    #[arg(short = 'c', long)]
    count: bool,

    /// Log pattern compilation details to stderr
    #[arg(long)]
    debug: bool,
}

// Exit status: 0 = a line was selected, 1 = none, 2 = error (clap uses 2 for usage errors).
fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(summary) => ExitCode::from(summary.exit_status(args.quiet)),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// What a run over all inputs found.
#[derive(Debug, Default, PartialEq)]
struct Summary {
    selected: bool,
    /// Inputs that could not be opened or read.
    failed: usize,
}

impl Summary {
    /// Like grep, a failed input makes the status 2 unless `-q` already found
    /// a line.
    fn exit_status(&self, quiet: bool) -> u8 {
        match (self.selected, self.failed) {
            (true, _) if quiet => 0,
            (_, failed) if failed > 0 => 2,
            (true, _) => 0,
            (false, _) => 1,
        }
    }
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

/// Search every input, reporting inputs that cannot be read and carrying on
/// with the rest. Only an invalid pattern stops the run.
fn run(args: &Args, out: &mut impl Write) -> Result<Summary> {
    let pattern = Pattern::new(&args.pattern)
        .with_context(|| format!("invalid pattern {:?}", args.pattern))?;

    let sources = if args.files.is_empty() {
        vec!["-".to_string()]
    } else {
        args.files.clone()
    };
    let with_filename = sources.len() > 1;
    tracing::debug!(inputs = sources.len(), "searching");

    let mut summary = Summary::default();
    for name in &sources {
        let prefix = with_filename.then_some(name.as_str());
        let searched = open(name).and_then(|reader| {
            filter_lines(&pattern, reader, args, prefix, out)
                .with_context(|| format!("failed to search {name}"))
        });
        match searched {
            Ok(selected) => summary.selected |= selected > 0,
            Err(err) => {
                eprintln!("error: {err:#}");
                summary.failed += 1;
            }
        }
        if args.quiet && summary.selected {
            break;
        }
    }
    out.flush()?;
    Ok(summary)
}

fn open(name: &str) -> Result<Box<dyn BufRead>> {
    if name == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(name).with_context(|| format!("failed to open {name}"))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Write the selected lines of `reader` to `out` and return how many there were.
///
/// Lines are split on `\n`, which is not part of the matched text.
fn filter_lines(
    pattern: &Pattern,
    mut reader: impl BufRead,
    args: &Args,
    prefix: Option<&str>,
    out: &mut impl Write,
) -> io::Result<usize> {
    let mut selected = 0usize;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let text = line.strip_suffix(b"\n").unwrap_or(&line[..]);
        if pattern.is_match_bytes(text) == args.invert_match {
            continue;
        }
        selected += 1;
        if args.quiet {
            break;
        }
        if !args.count {
            if let Some(name) = prefix {
                write!(out, "{name}:")?;
            }
            out.write_all(text)?;
            out.write_all(b"\n")?;
        }
    }

    if args.count && !args.quiet {
        if let Some(name) = prefix {
            write!(out, "{name}:")?;
        }
        writeln!(out, "{selected}")?;
    }
    Ok(selected)
}
