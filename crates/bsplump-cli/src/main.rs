use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bsplump_core::report::{LumpReport, decode_lump_file};
use bsplump_core::source::LumpWindow;
use bsplump_core::{
    DEFAULT_PARALLEL_THRESHOLD, DecodeOptions, EntityKind, MapType, TrailingBytes, layout_for,
    record_len,
};
use clap::{Parser, Subcommand};
use glob::glob;

mod logger;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("BSPLUMP_BUILD_COMMIT"),
    ", ",
    env!("BSPLUMP_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "bsplump")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode fixed-size BSP lump records (brushes, nodes) into JSON.",
    long_about = None,
    after_help = "Examples:\n  bsplump lump decode brushes.lmp --kind brush --format quake2 -o brushes.json\n  bsplump lump decode map.bsp --kind node --format source20 --offset 1024 --length 3200 --stdout\n  bsplump lump formats --kind node"
)]
struct Cli {
    /// Log decoding steps to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on raw lump data.
    Lump {
        #[command(subcommand)]
        command: LumpCommands,
    },
}

#[derive(Subcommand, Debug)]
enum LumpCommands {
    /// Decode a lump and write a versioned JSON report.
    #[command(
        after_help = "Examples:\n  bsplump lump decode brushes.lmp --kind brush --format quake2 -o brushes.json\n  bsplump lump decode map.bsp --kind node --format quake --offset 4000 --length 480 --stdout --pretty"
    )]
    Decode {
        /// Path to a file holding the lump (or a pattern matching one file)
        input: PathBuf,

        /// Record kind stored in the lump (brush, node)
        #[arg(short, long)]
        kind: EntityKind,

        /// Map type the lump was written for (see `bsplump lump formats`)
        #[arg(short, long)]
        format: MapType,

        /// Byte offset of the lump inside the input
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Lump length in bytes (default: to end of input)
        #[arg(long)]
        length: Option<u64>,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Fail when the lump length is not a whole number of records
        #[arg(long)]
        strict: bool,

        /// Never decode on the thread pool
        #[arg(long, conflicts_with = "parallel_threshold")]
        sequential: bool,

        /// Record count at which decoding moves to the thread pool
        #[arg(long, default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
        parallel_threshold: usize,
    },
    /// List supported map types with their layout group and record length.
    Formats {
        /// Only show one record kind
        #[arg(short, long)]
        kind: Option<EntityKind>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let result = match cli.command {
        Commands::Lump { command } => match command {
            LumpCommands::Decode {
                input,
                kind,
                format,
                offset,
                length,
                report,
                stdout,
                pretty,
                compact,
                quiet,
                strict,
                sequential,
                parallel_threshold,
            } => {
                let options = DecodeOptions::default()
                    .with_trailing(if strict {
                        TrailingBytes::Reject
                    } else {
                        TrailingBytes::Ignore
                    })
                    .with_parallel_threshold((!sequential).then_some(parallel_threshold));
                cmd_lump_decode(DecodeArgs {
                    input,
                    kind,
                    format,
                    window: LumpWindow::new(offset, length),
                    report,
                    stdout,
                    pretty,
                    compact,
                    quiet,
                    options,
                })
            }
            LumpCommands::Formats { kind } => cmd_lump_formats(kind),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

struct DecodeArgs {
    input: PathBuf,
    kind: EntityKind,
    format: MapType,
    window: LumpWindow,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    options: DecodeOptions,
}

fn cmd_lump_decode(args: DecodeArgs) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&args.input)?;
    validate_input_file(&resolved_input)?;
    if let Err(err) = layout_for(args.kind, args.format) {
        return Err(CliError::new(
            err.to_string(),
            Some(format!(
                "run `bsplump lump formats --kind {}` to list supported map types",
                args.kind
            )),
        ));
    }

    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;
    let report = if args.stdout {
        None
    } else {
        Some(args.report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };

    if let Some(report_path) = report.as_ref() {
        let report_abs = report_path
            .parent()
            .map(|parent| {
                if parent.as_os_str().is_empty() {
                    fs::canonicalize(".")
                } else {
                    fs::canonicalize(parent)
                }
            })
            .transpose()
            .ok()
            .flatten();
        if let Some(report_dir) = report_abs {
            let report_target = report_dir.join(
                report_path
                    .file_name()
                    .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?,
            );
            if report_target == input_abs {
                return Err(CliError::new(
                    format!(
                        "report path must differ from input: {}",
                        report_path.display()
                    ),
                    Some("choose a different output path".to_string()),
                ));
            }
        }
    }

    let rep = decode_lump_file(
        &resolved_input,
        args.kind,
        args.format,
        args.window,
        &args.options,
    )
    .map_err(|err| {
        CliError::new(
            format!("lump decoding failed: {}", err),
            decode_hint(&args.options, args.kind, args.format),
        )
    })?;
    let json = serialize_report(&rep, args.pretty, args.compact)?;

    let Some(report) = report else {
        print!("{}", json);
        return Ok(());
    };

    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if !args.quiet {
        eprintln!(
            "OK: {} {} records -> {}",
            rep.records,
            rep.kind,
            report.display()
        );
        if rep.trailing_bytes > 0 {
            eprintln!(
                "note: {} trailing bytes ignored (use --strict to reject)",
                rep.trailing_bytes
            );
        }
    }
    Ok(())
}

fn decode_hint(options: &DecodeOptions, kind: EntityKind, format: MapType) -> Option<String> {
    if options.trailing != TrailingBytes::Reject {
        return None;
    }
    let len = record_len(kind, format).ok()?;
    Some(format!(
        "{kind} records are {len} bytes for {format}; check --offset/--length or drop --strict"
    ))
}

fn cmd_lump_formats(kind: Option<EntityKind>) -> Result<(), CliError> {
    let kinds: Vec<EntityKind> = match kind {
        Some(kind) => vec![kind],
        None => EntityKind::ALL.to_vec(),
    };

    let mut header = format!("{:<24}", "format");
    for kind in &kinds {
        header.push_str(&format!("{:<24}", kind.name()));
    }
    println!("{}", header.trim_end());

    for format in MapType::ALL {
        let mut line = format!("{:<24}", format.name());
        for kind in &kinds {
            let cell = match (layout_for(*kind, format), record_len(*kind, format)) {
                (Ok(layout), Ok(len)) => format!("{}/{}", layout.group(), len),
                _ => "-".to_string(),
            };
            line.push_str(&format!("{:<24}", cell));
        }
        println!("{}", line.trim_end());
    }
    Ok(())
}

fn serialize_report(rep: &LumpReport, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a lump file or a map file with --offset/--length".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a lump file or a map file with --offset/--length".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single lump file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
